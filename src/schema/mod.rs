//! Parameter schemas and their validation.
//!
//! # Key Types
//!
//! - [`PropertySchema`] - Schema for a single parameter
//! - [`SimpleSchema`] - Explicit mapping from parameter name to property schema
//! - [`CombinedSchema`] - Compiled `{"type": "object", "properties": ...}` schema
//!
//! Validation itself is delegated to the `jsonschema` crate; this module only
//! assembles the schema and reshapes the validator's errors.

pub mod combined;
pub mod types;
pub(crate) mod validation;


pub use combined::CombinedSchema;
pub use types::{PropertySchema, SimpleSchema};
