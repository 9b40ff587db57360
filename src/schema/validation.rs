//! Conversion of validator output into [`ValidationError`].

use crate::error::{ValidationError, unescape_token};
use serde_json::Value;

pub(crate) fn first_error(
    validator: &jsonschema::Validator,
    document: &Value,
    instance: &Value,
) -> Option<ValidationError> {
    validator
        .iter_errors(instance)
        .next()
        .map(|error| convert(&error, document))
}

pub(crate) fn all_errors(
    validator: &jsonschema::Validator,
    document: &Value,
    instance: &Value,
) -> Vec<ValidationError> {
    validator
        .iter_errors(instance)
        .map(|error| convert(&error, document))
        .collect()
}

/// The violated keyword is the last segment of the schema path; the
/// fragment is whatever the remaining path points at.
fn convert(error: &jsonschema::ValidationError<'_>, document: &Value) -> ValidationError {
    let schema_path = error.schema_path.to_string();
    let (parent, keyword) = match schema_path.rsplit_once('/') {
        Some((parent, keyword)) => (parent, keyword),
        None => ("", schema_path.as_str()),
    };
    let schema = document.pointer(parent).cloned().unwrap_or(Value::Null);

    ValidationError {
        instance: error.instance.clone().into_owned(),
        keyword: unescape_token(keyword),
        schema,
        instance_path: error.instance_path.to_string(),
        schema_path,
        message: error.to_string(),
    }
}
