//! Assembly and compilation of a function's combined schema.
//!
//! The combined schema has the shape
//! `{"type": "object", "properties": {name: property schema, ...}}` and is
//! compiled exactly once, when the function is built.

use super::types::{PropertySchema, SimpleSchema};
use super::validation;
use crate::config::SchemaConfig;
use crate::error::{BuildError, BuildResult, ValidationError};
use crate::signature::Signature;
use log::debug;
use serde_json::{Map, Value, json};
use std::collections::BTreeMap;

/// Compiled schema for one function.
pub struct CombinedSchema {
    properties: BTreeMap<String, PropertySchema>,
    document: Value,
    validator: jsonschema::Validator,
}

impl std::fmt::Debug for CombinedSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CombinedSchema")
            .field("document", &self.document)
            .finish()
    }
}

impl CombinedSchema {
    /// Merge the explicit mapping, per-parameter schemas and signature
    /// defaults, then compile the result.
    ///
    /// Every declared parameter gets an entry (`{}` when nothing describes
    /// it). Explicit entries are applied first and per-parameter schemas
    /// replace them. A signature default is copied into its entry as
    /// `default` only when the entry has none.
    pub fn build(
        signature: &Signature,
        explicit: &SimpleSchema,
        config: &SchemaConfig,
    ) -> BuildResult<Self> {
        signature.check()?;

        let mut properties: BTreeMap<String, PropertySchema> = signature
            .parameters()
            .iter()
            .map(|p| (p.name.clone(), PropertySchema::any()))
            .collect();

        for (name, entry) in explicit.iter() {
            if !signature.accepts_keyword(name) {
                return Err(BuildError::UnknownParameter {
                    function: signature.name().to_string(),
                    name: name.clone(),
                });
            }
            let schema = PropertySchema::from_value(name, entry.clone())?;
            properties.insert(name.clone(), schema);
        }

        for parameter in signature.parameters() {
            if let Some(entry) = &parameter.schema {
                let schema = PropertySchema::from_value(&parameter.name, entry.clone())?;
                properties.insert(parameter.name.clone(), schema);
            }
        }

        for parameter in signature.parameters() {
            if let (Some(default), Some(schema)) =
                (&parameter.default, properties.get_mut(&parameter.name))
            {
                schema.merge_default(default);
            }
        }

        let document = json!({
            "type": "object",
            "properties": properties
                .iter()
                .map(|(name, schema)| (name.clone(), Value::Object(schema.as_map().clone())))
                .collect::<Map<String, Value>>(),
        });

        let validator = compile(&document, config).map_err(|message| BuildError::InvalidSchema {
            function: signature.name().to_string(),
            message,
        })?;

        debug!(
            "Compiled schema for {}() with {} properties",
            signature.name(),
            properties.len()
        );

        Ok(Self {
            properties,
            document,
            validator,
        })
    }

    /// The combined schema as JSON.
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Property schema for `name`, if the schema describes it.
    pub fn property(&self, name: &str) -> Option<&PropertySchema> {
        self.properties.get(name)
    }

    /// Whether `name` is validated.
    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Default for `name`: the schema's own, else the merged signature default.
    pub fn default_for(&self, name: &str) -> Option<&Value> {
        self.properties.get(name).and_then(PropertySchema::default_value)
    }

    /// Names described by the schema, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    /// First violation for `instance`, if any.
    pub fn first_error(&self, instance: &Value) -> Option<ValidationError> {
        validation::first_error(&self.validator, &self.document, instance)
    }

    /// Every violation for `instance`.
    pub fn errors(&self, instance: &Value) -> Vec<ValidationError> {
        validation::all_errors(&self.validator, &self.document, instance)
    }
}

fn compile(document: &Value, config: &SchemaConfig) -> Result<jsonschema::Validator, String> {
    let compiled = match config.draft.to_jsonschema() {
        Some(draft) => jsonschema::options()
            .with_draft(draft)
            .should_validate_formats(config.validate_formats)
            .build(document),
        None => jsonschema::options()
            .should_validate_formats(config.validate_formats)
            .build(document),
    };
    compiled.map_err(|e| e.to_string())
}
