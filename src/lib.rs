//! Schema-validated function calls for Rust.
//!
//! Binds a simplified JSON Schema description to a function's parameters and
//! validates every call against it before the function runs.
//!
//! # Core Components
//!
//! - [`Signature`] - Explicit parameter descriptor (names, defaults, catch-alls)
//! - [`SimpleSchema`] - Explicit `{parameter: property schema}` mapping
//! - [`SchemaFunction`] - The wrapped callable; binds, validates, then invokes
//! - [`SchemaMethod`] - Same, for callables that take a receiver
//! - [`CallError`] - Binding or validation failure, returned unmodified
//!
//! # Quick Start
//!
//! ```rust
//! use simpleschema::{CallArgs, CallError, Signature, SimpleSchema, simpleschema};
//! use serde_json::{Value, json};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let foo = simpleschema(
//!     SimpleSchema::new()
//!         .property("a", json!({"type": "string"}))
//!         .property("b", json!({"type": "number"}))
//!         .property("d", json!({"type": "integer"})),
//! )
//! .wrap(
//!     Signature::new("foo")
//!         .param("a")
//!         .param("b")
//!         .param("c")
//!         .param_with_default("d", 1)
//!         .param_with_default("e", Value::Null),
//!     |args| args.to_value(),
//! )?;
//!
//! let call = CallArgs::positional([json!("hello"), json!(1.213), json!(313513)]).kwarg("d", "bar");
//! match foo.call(call) {
//!     Err(CallError::Validation(error)) => {
//!         assert_eq!(error.instance_path, "/d");
//!         assert_eq!(error.schema_path, "/properties/d/type");
//!     }
//!     other => panic!("unexpected result: {:?}", other),
//! }
//!
//! let result = foo.call(CallArgs::positional([json!("hello"), json!(1), Value::Null]))?;
//! assert_eq!(result, json!({"a": "hello", "b": 1, "c": null, "d": 1, "e": null}));
//! # Ok(())
//! # }
//! ```

pub mod arguments;
pub mod binder;
pub mod config;
pub mod error;
pub mod function;
pub mod schema;
pub mod signature;

// Re-export commonly used types for convenience
pub use arguments::{BoundArguments, CallArgs};
pub use binder::{Binding, SchemaBinder};
pub use config::{SchemaConfig, SchemaDraft};
pub use error::{
    BindingError, BindingResult, BuildError, BuildResult, CallError, CallResult, ValidationError,
};
pub use function::{
    SchemaDecorator, SchemaFunction, SchemaFunctionBuilder, SchemaMethod, simpleschema,
};
pub use schema::{CombinedSchema, PropertySchema, SimpleSchema};
pub use signature::{Parameter, Signature};
