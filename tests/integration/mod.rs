//! End-to-end scenarios for schema-bound functions.

pub mod defaults;
pub mod explicit_schema;
pub mod methods;
pub mod property_tests;
