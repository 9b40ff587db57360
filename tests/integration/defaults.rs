//! Precedence between schema-level and signature-level defaults.

use serde_json::{Value, json};
use simpleschema::{CallArgs, SchemaFunction, Signature, SimpleSchema};

fn with_defaults(schema_default: Option<Value>) -> SchemaFunction<Value> {
    let mut entry = json!({"type": "integer"});
    if let Some(default) = schema_default {
        entry["default"] = default;
    }
    SchemaFunction::builder(Signature::new("f").param("a").param_with_default("d", 1))
        .schema(SimpleSchema::new().property("d", entry))
        .build(|args| args.get("d").cloned().unwrap_or(Value::Null))
        .unwrap()
}

#[test]
fn test_schema_default_wins() {
    let function = with_defaults(Some(json!(10)));
    assert_eq!(function.call(CallArgs::positional([0])).unwrap(), json!(10));
}

#[test]
fn test_signature_default_used_without_schema_default() {
    let function = with_defaults(None);
    assert_eq!(function.call(CallArgs::positional([0])).unwrap(), json!(1));
}

#[test]
fn test_caller_value_wins_over_both() {
    let function = with_defaults(Some(json!(10)));
    assert_eq!(
        function.call(CallArgs::positional([0, 7])).unwrap(),
        json!(7)
    );
    assert_eq!(
        function.call(CallArgs::positional([0]).kwarg("d", 8)).unwrap(),
        json!(8)
    );
}

#[test]
fn test_defaults_are_validated() {
    let function = SchemaFunction::builder(Signature::new("f").param_with_default("d", "one"))
        .schema(SimpleSchema::new().property("d", json!({"type": "integer"})))
        .build(|_| ())
        .unwrap();

    crate::assert_validation_error_at!(function.call(CallArgs::new()), "d");
    assert!(function.call(CallArgs::positional([1])).is_ok());
}

#[test]
fn test_null_default_is_a_value() {
    let function = SchemaFunction::new(
        Signature::new("f").param_with_default("e", Value::Null),
        |args| args.get("e").cloned(),
    )
    .unwrap();
    assert_eq!(function.call(CallArgs::new()).unwrap(), Some(Value::Null));
}
