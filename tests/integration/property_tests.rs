//! Property-based checks for binding and validation.
//!
//! Uses proptest to generate well-typed and ill-typed calls and verifies that
//! the wrapped callable runs exactly when every schema-declared argument
//! matches its declared type.

use crate::common::{CallRecorder, foo};
use proptest::prelude::*;
use serde_json::{Value, json};
use simpleschema::{CallArgs, CallError};

/// Strategy for arbitrary scalar JSON values.
fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        (-1.0e6f64..1.0e6).prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::from),
    ]
}

proptest! {
    #[test]
    fn well_typed_calls_run_once(
        a in "[a-zA-Z ]{0,16}",
        b in -1.0e9f64..1.0e9,
        c in scalar_strategy(),
        d in proptest::option::of(any::<i64>()),
    ) {
        let recorder = CallRecorder::new();
        let foo = foo(&recorder);

        let mut call = CallArgs::positional([json!(a), json!(b), c.clone()]);
        if let Some(d) = d {
            call = call.kwarg("d", d);
        }

        let result = foo.call(call).expect("well-typed call must validate");
        prop_assert_eq!(recorder.count(), 1);
        prop_assert_eq!(&result["a"], &json!(a));
        prop_assert_eq!(&result["c"], &c);
        prop_assert_eq!(&result["d"], &json!(d.unwrap_or(1)));
        prop_assert_eq!(&result["e"], &Value::Null);
    }

    #[test]
    fn non_string_a_never_runs(a in scalar_strategy().prop_filter("not a string", |v| !v.is_string())) {
        let recorder = CallRecorder::new();
        let foo = foo(&recorder);

        let result = foo.call(CallArgs::positional([a.clone(), json!(1), Value::Null]));
        match result {
            Err(CallError::Validation(error)) => {
                prop_assert_eq!(error.instance_path, "/a");
                prop_assert_eq!(error.instance, a);
            }
            other => prop_assert!(false, "expected validation error, got {:?}", other),
        }
        prop_assert_eq!(recorder.count(), 0);
    }
}
