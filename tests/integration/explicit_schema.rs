//! Functions wrapped with an explicit schema mapping.

use crate::common::{CallRecorder, fixtures, foo};
use serde_json::{Value, json};
use simpleschema::{BuildError, CallArgs, CallError, SchemaFunction, Signature, SimpleSchema};

#[test]
fn test_wrong_type_rejected_with_location() {
    let recorder = CallRecorder::new();
    let foo = foo(&recorder);

    let call = CallArgs::positional([json!("hello"), json!(1.213), json!(313513)]).kwarg("d", "bar");
    let error = match foo.call(call) {
        Err(CallError::Validation(error)) => error,
        other => panic!("Expected validation error, got {:?}", other),
    };

    assert_eq!(error.instance, json!("bar"));
    assert_eq!(error.keyword, "type");
    assert_eq!(error.instance_path, "/d");
    assert_eq!(error.schema_path, "/properties/d/type");
    assert_eq!(error.schema, json!({"type": "integer", "default": 1}));
    assert_eq!(recorder.count(), 0);
}

#[test]
fn test_valid_call_runs_with_defaults() {
    let recorder = CallRecorder::new();
    let foo = foo(&recorder);

    let result = foo
        .call(CallArgs::positional([json!("hello"), json!(1), Value::Null]))
        .expect("call should validate");

    let expected = json!({"a": "hello", "b": 1, "c": null, "d": 1, "e": null});
    assert_eq!(result, expected);
    assert_eq!(recorder.count(), 1);

    let received = recorder.last().unwrap();
    let order: Vec<&str> = received.iter().map(|(name, _)| name).collect();
    assert_eq!(order, vec!["a", "b", "c", "d", "e"]);
}

#[test]
fn test_return_value_passed_through() {
    let function = SchemaFunction::builder(Signature::new("double").param("n"))
        .schema(SimpleSchema::new().property("n", json!({"type": "integer"})))
        .build(|args| args.get_as::<i64>("n").map(|n| n * 2))
        .unwrap();

    assert_eq!(function.call(CallArgs::positional([21])).unwrap().unwrap(), 42);
}

#[test]
fn test_unschematized_parameters_pass_through() {
    let recorder = CallRecorder::new();
    let foo = foo(&recorder);

    for c in [json!(null), json!([1, 2]), json!({"k": "v"}), json!("text")] {
        let result = foo
            .call(CallArgs::positional([json!("hello"), json!(2), c.clone()]).kwarg("e", c.clone()))
            .expect("c and e are unconstrained");
        assert_eq!(result["c"], c);
        assert_eq!(result["e"], c);
    }
    assert_eq!(recorder.count(), 4);
}

#[test]
fn test_binding_error_precedes_validation() {
    let recorder = CallRecorder::new();
    let foo = foo(&recorder);

    // `a` has the wrong type, but the missing `c` is reported first.
    let result = foo.call(CallArgs::positional([json!(1), json!(2)]));
    match result {
        Err(CallError::Binding(error)) => assert!(error.to_string().contains("'c'")),
        other => panic!("Expected binding error, got {:?}", other),
    }
    assert_eq!(recorder.count(), 0);
}

#[test]
fn test_all_errors_can_be_listed() {
    let recorder = CallRecorder::new();
    let foo = foo(&recorder);

    let errors = foo
        .validation_errors(&CallArgs::positional([json!(1), json!("x"), json!(0)]).kwarg("d", 1.5))
        .unwrap();
    let mut params: Vec<String> = errors.iter().filter_map(|e| e.parameter()).collect();
    params.sort();
    assert_eq!(params, vec!["a", "b", "d"]);
}

#[test]
fn test_dry_run_does_not_invoke() {
    let recorder = CallRecorder::new();
    let foo = foo(&recorder);

    let bound = foo
        .bind(&CallArgs::positional([json!("x"), json!(0), json!(0)]))
        .unwrap();
    assert_eq!(bound.get("d"), Some(&json!(1)));
    assert_eq!(recorder.count(), 0);
}

#[test]
fn test_loaded_from_json_descriptor() {
    #[derive(serde::Deserialize)]
    struct Descriptor {
        signature: Signature,
        schema: SimpleSchema,
    }

    let descriptor: Descriptor = serde_json::from_value(fixtures::foo_descriptor()).unwrap();
    let function = SchemaFunction::builder(descriptor.signature)
        .schema(descriptor.schema)
        .build(|args| args.to_value())
        .unwrap();

    let result = function
        .call(CallArgs::positional([json!("hello"), json!(1), Value::Null]))
        .unwrap();
    assert_eq!(result, json!({"a": "hello", "b": 1, "c": null, "d": 1, "e": null}));
    assert!(function.call(CallArgs::positional([json!("hello"), json!(1), Value::Null]).kwarg("d", "bar")).is_err());
}

#[test]
fn test_invalid_schemas_rejected_at_build() {
    let signature = Signature::new("f").param("x");

    let result = SchemaFunction::builder(signature.clone())
        .schema(SimpleSchema::new().property("x", json!("string")))
        .build(|_| ());
    assert!(matches!(result, Err(BuildError::InvalidPropertySchema { .. })));

    let result = SchemaFunction::builder(signature.clone())
        .schema(SimpleSchema::new().property("y", json!({"type": "string"})))
        .build(|_| ());
    assert!(matches!(result, Err(BuildError::UnknownParameter { .. })));

    let result = SchemaFunction::builder(signature)
        .schema(SimpleSchema::new().property("x", json!({"minimum": "zero"})))
        .build(|_| ());
    assert!(matches!(result, Err(BuildError::InvalidSchema { .. })));
}
