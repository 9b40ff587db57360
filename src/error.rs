//! Error types for schema-bound calls.
//!
//! Binding errors are raised while matching call arguments to the declared
//! parameters, validation errors come from the JSON Schema validator, and
//! build errors are raised once, when a [`SchemaFunction`](crate::SchemaFunction)
//! is assembled.

use serde_json::Value;

/// Error returned by a call to a schema-bound function.
///
/// The wrapped callable never runs when either variant is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CallError {
    /// Arguments could not be matched to the function's parameters
    #[error("Binding error: {0}")]
    Binding(#[from] BindingError),

    /// The call instance does not conform to the combined schema
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Argument binding errors.
///
/// These mirror the arity and keyword checks a native call would perform and
/// are raised before any schema validation runs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindingError {
    /// More positional arguments than declared parameters
    #[error("{function}() takes at most {max} positional arguments ({given} given)")]
    TooManyPositional {
        function: String,
        max: usize,
        given: usize,
    },

    /// Keyword argument that names no parameter and no catch-all exists
    #[error("{function}() got an unexpected keyword argument '{name}'")]
    UnexpectedKeyword { function: String, name: String },

    /// Parameter supplied both positionally and by keyword
    #[error("{function}() got multiple values for argument '{name}'")]
    DuplicateArgument { function: String, name: String },

    /// Parameter with no supplied value and no default
    #[error("{function}() missing required argument '{name}'")]
    MissingArgument { function: String, name: String },
}

/// Structured JSON Schema validation failure.
///
/// Carries everything the validator reported about the first violation:
/// the failing value, the violated keyword, the schema fragment holding that
/// keyword, and JSON Pointer locations in both the instance and the schema.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message} (at '{instance_path}', schema '{schema_path}')")]
pub struct ValidationError {
    /// The offending value
    pub instance: Value,
    /// The violated keyword, e.g. `type` or `minimum`
    pub keyword: String,
    /// The schema object that contains `keyword`
    pub schema: Value,
    /// JSON Pointer to the offending value, e.g. `/d`
    pub instance_path: String,
    /// JSON Pointer to the violated keyword, e.g. `/properties/d/type`
    pub schema_path: String,
    /// Human-readable message from the validator
    pub message: String,
}

impl ValidationError {
    /// Name of the top-level parameter the failure is located at, if any.
    pub fn parameter(&self) -> Option<String> {
        self.instance_path
            .strip_prefix('/')
            .and_then(|rest| rest.split('/').next())
            .filter(|token| !token.is_empty())
            .map(unescape_token)
    }
}

/// Undo JSON Pointer escaping (RFC 6901) of a single reference token.
pub(crate) fn unescape_token(token: &str) -> String {
    token.replace("~1", "/").replace("~0", "~")
}

/// Errors raised while assembling a schema-bound function.
///
/// These are programming errors in the descriptor or schema and are
/// reported once, before any call is made.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// The same parameter name is declared twice
    #[error("Parameter '{name}' is declared more than once")]
    DuplicateParameter { name: String },

    /// Schema entry for a name the function does not accept
    #[error("Schema entry '{name}' does not match any parameter of {function}()")]
    UnknownParameter { function: String, name: String },

    /// Schema entry that is not a JSON object
    #[error("Schema entry for '{name}' must be a JSON object, got {actual}")]
    InvalidPropertySchema { name: String, actual: String },

    /// The validator rejected the combined schema
    #[error("Invalid schema for {function}(): {message}")]
    InvalidSchema { function: String, message: String },
}

impl BindingError {
    /// Create a missing argument error
    pub fn missing(function: impl Into<String>, name: impl Into<String>) -> Self {
        Self::MissingArgument {
            function: function.into(),
            name: name.into(),
        }
    }

    /// Create an unexpected keyword error
    pub fn unexpected_keyword(function: impl Into<String>, name: impl Into<String>) -> Self {
        Self::UnexpectedKeyword {
            function: function.into(),
            name: name.into(),
        }
    }

    /// Create a duplicate argument error
    pub fn duplicate(function: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateArgument {
            function: function.into(),
            name: name.into(),
        }
    }
}

impl CallError {
    /// The validation failure, if this is one.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(e) => Some(e),
            Self::Binding(_) => None,
        }
    }

    /// The binding failure, if this is one.
    pub fn as_binding(&self) -> Option<&BindingError> {
        match self {
            Self::Binding(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

// Result type aliases for convenience
pub type CallResult<T> = Result<T, CallError>;
pub type BindingResult<T> = Result<T, BindingError>;
pub type BuildResult<T> = Result<T, BuildError>;
