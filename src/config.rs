//! Validator configuration for schema-bound functions.

use serde::{Deserialize, Serialize};

/// JSON Schema draft used to compile the combined schema.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchemaDraft {
    /// Let the validator pick (its latest supported draft)
    #[default]
    Auto,
    Draft4,
    Draft6,
    Draft7,
    #[serde(rename = "2019-09")]
    Draft201909,
    #[serde(rename = "2020-12")]
    Draft202012,
}

impl SchemaDraft {
    pub(crate) fn to_jsonschema(self) -> Option<jsonschema::Draft> {
        match self {
            Self::Auto => None,
            Self::Draft4 => Some(jsonschema::Draft::Draft4),
            Self::Draft6 => Some(jsonschema::Draft::Draft6),
            Self::Draft7 => Some(jsonschema::Draft::Draft7),
            Self::Draft201909 => Some(jsonschema::Draft::Draft201909),
            Self::Draft202012 => Some(jsonschema::Draft::Draft202012),
        }
    }
}

/// Options applied when the combined schema is compiled.
///
/// # Examples
///
/// ```rust
/// use simpleschema::{SchemaConfig, SchemaDraft};
///
/// let config = SchemaConfig {
///     draft: SchemaDraft::Draft7,
///     validate_formats: true,
/// };
/// assert_ne!(config, SchemaConfig::default());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaConfig {
    /// Draft to compile against
    pub draft: SchemaDraft,
    /// Treat `format` as an assertion instead of an annotation
    pub validate_formats: bool,
}
