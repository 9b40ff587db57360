//! Property schema types.
//!
//! A [`PropertySchema`] is one parameter's entry under `properties`; a
//! [`SimpleSchema`] is the explicit `{parameter: property schema}` mapping
//! supplied when a function is wrapped.

use crate::error::{BuildError, BuildResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Schema for a single parameter.
///
/// Any JSON-Schema keyword valid inside a property definition may appear;
/// only `default` is interpreted here, everything else is handed to the
/// validator untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertySchema(Map<String, Value>);

impl PropertySchema {
    /// An entry that accepts any value.
    pub fn any() -> Self {
        Self(Map::new())
    }

    /// Convert a JSON value into a property schema for `name`.
    pub fn from_value(name: &str, value: Value) -> BuildResult<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(BuildError::InvalidPropertySchema {
                name: name.to_string(),
                actual: value_kind(&other).to_string(),
            }),
        }
    }

    /// The schema-level default, if declared.
    pub fn default_value(&self) -> Option<&Value> {
        self.0.get("default")
    }

    /// Set `default` unless the schema already declares one.
    pub fn merge_default(&mut self, default: &Value) {
        if !self.0.contains_key("default") {
            self.0.insert("default".to_string(), default.clone());
        }
    }

    /// The `type` keyword, if it is a single type name.
    pub fn type_name(&self) -> Option<&str> {
        self.0.get("type").and_then(Value::as_str)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// Explicit mapping from parameter name to property schema.
///
/// Entries are kept as raw JSON until the function is built so that a
/// malformed entry is reported as a [`BuildError`] rather than panicking here.
///
/// # Examples
///
/// ```rust
/// use simpleschema::SimpleSchema;
/// use serde_json::json;
///
/// let schema = SimpleSchema::new()
///     .property("a", json!({"type": "string"}))
///     .property("b", json!({"type": "number"}))
///     .property("d", json!({"type": "integer"}));
/// assert_eq!(schema.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimpleSchema(Map<String, Value>);

impl SimpleSchema {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Add or replace the entry for `name`.
    pub fn property(mut self, name: impl Into<String>, schema: Value) -> Self {
        self.0.insert(name.into(), schema);
        self
    }

    /// Build from a JSON object of property schemas.
    pub fn from_value(value: Value) -> BuildResult<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(BuildError::InvalidPropertySchema {
                name: "<schema>".to_string(),
                actual: value_kind(&other).to_string(),
            }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

/// JSON type name of a value, for error messages.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
