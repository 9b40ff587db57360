//! Callables that take a receiver.

use serde_json::json;
use simpleschema::{CallArgs, SchemaMethod, Signature, SimpleSchema, simpleschema};
use std::sync::Mutex;

struct Account {
    balance: Mutex<i64>,
}

impl Account {
    fn deposit_method() -> SchemaMethod<Account, i64> {
        simpleschema(
            SimpleSchema::new().property("amount", json!({"type": "integer", "exclusiveMinimum": 0})),
        )
        .wrap_method(
            Signature::new("deposit").param("amount"),
            |account: &Account, args| {
                let amount: i64 = args.get_as("amount").unwrap_or(0);
                let mut balance = account.balance.lock().expect("balance lock poisoned");
                *balance += amount;
                *balance
            },
        )
        .expect("Failed to build deposit")
    }
}

#[test]
fn test_method_updates_receiver() {
    let account = Account {
        balance: Mutex::new(100),
    };
    let deposit = Account::deposit_method();

    assert_eq!(deposit.call(&account, CallArgs::positional([50])).unwrap(), 150);
    assert_eq!(
        deposit.call(&account, CallArgs::new().kwarg("amount", 25)).unwrap(),
        175
    );
}

#[test]
fn test_method_validation_leaves_receiver_untouched() {
    let account = Account {
        balance: Mutex::new(100),
    };
    let deposit = Account::deposit_method();

    crate::assert_validation_error_at!(deposit.call(&account, CallArgs::positional([-5])), "amount");
    crate::assert_validation_error_at!(deposit.call(&account, CallArgs::positional(["5"])), "amount");
    assert_eq!(*account.balance.lock().unwrap(), 100);
}

#[test]
fn test_method_schema_excludes_receiver() {
    let deposit = Account::deposit_method();
    let properties = deposit.schema()["properties"].as_object().unwrap();
    assert_eq!(properties.len(), 1);
    assert!(properties.contains_key("amount"));
}
