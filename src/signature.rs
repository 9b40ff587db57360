//! Explicit parameter descriptors for schema-bound functions.
//!
//! A [`Signature`] lists a function's parameters in call order, their
//! signature-level defaults, optional per-parameter schemas, and whether the
//! function accepts surplus positional or arbitrary keyword arguments.
//!
//! # Examples
//!
//! ```rust
//! use simpleschema::Signature;
//! use serde_json::{Value, json};
//!
//! let signature = Signature::new("foo")
//!     .param("a")
//!     .param("b")
//!     .param("c")
//!     .param_with_default("d", json!(1))
//!     .param_with_default("e", Value::Null);
//!
//! assert_eq!(signature.parameters().len(), 5);
//! assert_eq!(signature.position("d"), Some(3));
//! ```

use crate::error::{BuildError, BuildResult};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashSet;

/// A single declared parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name, used as the property name in the combined schema
    pub name: String,
    /// Signature-level default. `Some(Value::Null)` is a real default.
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub default: Option<Value>,
    /// Schema attached directly to this parameter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
}

/// Keeps an explicit `null` distinct from an absent field.
fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl Parameter {
    /// A parameter without a default; callers must supply it.
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
            schema: None,
        }
    }

    /// A parameter with a signature-level default.
    pub fn with_default(name: impl Into<String>, default: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            default: Some(default.into()),
            schema: None,
        }
    }

    /// A parameter described by its own property schema.
    ///
    /// The schema takes the place of a plain default: the parameter only
    /// gets a value when the caller passes one or the schema carries a
    /// `default` keyword.
    pub fn with_schema(name: impl Into<String>, schema: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            default: None,
            schema: Some(schema.into()),
        }
    }

    /// Whether the parameter has a signature-level default.
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }
}

/// Ordered parameter list of a function plus its catch-all flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signature {
    name: String,
    #[serde(default)]
    parameters: Vec<Parameter>,
    #[serde(default)]
    var_positional: bool,
    #[serde(default)]
    var_keywords: bool,
}

impl Signature {
    /// Start a signature for the named function with no parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            var_positional: false,
            var_keywords: false,
        }
    }

    /// Append a required parameter.
    pub fn param(self, name: impl Into<String>) -> Self {
        self.parameter(Parameter::required(name))
    }

    /// Append a parameter with a signature-level default.
    pub fn param_with_default(self, name: impl Into<String>, default: impl Into<Value>) -> Self {
        self.parameter(Parameter::with_default(name, default))
    }

    /// Append a parameter described by its own property schema.
    pub fn param_with_schema(self, name: impl Into<String>, schema: impl Into<Value>) -> Self {
        self.parameter(Parameter::with_schema(name, schema))
    }

    /// Append a fully specified parameter.
    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Accept surplus positional arguments.
    pub fn var_positional(mut self) -> Self {
        self.var_positional = true;
        self
    }

    /// Accept arbitrary keyword arguments.
    pub fn var_keywords(mut self) -> Self {
        self.var_keywords = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn accepts_var_positional(&self) -> bool {
        self.var_positional
    }

    pub fn accepts_var_keywords(&self) -> bool {
        self.var_keywords
    }

    /// Index of the named parameter in call order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.parameters.iter().position(|p| p.name == name)
    }

    /// Look up a declared parameter by name.
    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Whether `name` may be passed as a keyword argument.
    pub fn accepts_keyword(&self, name: &str) -> bool {
        self.var_keywords || self.position(name).is_some()
    }

    /// Reject descriptors that declare the same name twice.
    pub fn check(&self) -> BuildResult<()> {
        let mut seen = HashSet::new();
        for parameter in &self.parameters {
            if !seen.insert(parameter.name.as_str()) {
                return Err(BuildError::DuplicateParameter {
                    name: parameter.name.clone(),
                });
            }
        }
        Ok(())
    }
}
