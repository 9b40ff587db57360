//! Argument binding and call-instance construction.
//!
//! [`SchemaBinder`] holds everything captured when a function is wrapped:
//! its [`Signature`] and compiled [`CombinedSchema`]. Binding a call resolves
//! every parameter (caller value, else schema default, else signature
//! default), builds the instance object from the names the schema
//! describes, and validates it.

use crate::arguments::{BoundArguments, CallArgs};
use crate::config::SchemaConfig;
use crate::error::{BindingError, BindingResult, BuildResult, CallResult, ValidationError};
use crate::schema::{CombinedSchema, SimpleSchema};
use crate::signature::Signature;
use log::trace;
use serde_json::{Map, Value};

/// Immutable binding metadata for one wrapped function.
#[derive(Debug)]
pub struct SchemaBinder {
    signature: Signature,
    schema: CombinedSchema,
}

/// Result of binding a call, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    /// What the callable will receive
    pub arguments: BoundArguments,
    /// What the validator will see
    pub instance: Value,
}

impl SchemaBinder {
    pub fn new(
        signature: Signature,
        explicit: &SimpleSchema,
        config: &SchemaConfig,
    ) -> BuildResult<Self> {
        let schema = CombinedSchema::build(&signature, explicit, config)?;
        Ok(Self { signature, schema })
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn schema(&self) -> &CombinedSchema {
        &self.schema
    }

    /// Bind and validate a call.
    pub fn bind(&self, call: &CallArgs) -> CallResult<BoundArguments> {
        let binding = self.bind_arguments(call)?;
        if let Some(error) = self.schema.first_error(&binding.instance) {
            return Err(error.into());
        }
        trace!(
            "Validated call to {}() with {} bound arguments",
            self.signature.name(),
            binding.arguments.len()
        );
        Ok(binding.arguments)
    }

    /// Bind a call and collect every validation failure.
    pub fn validation_errors(&self, call: &CallArgs) -> BindingResult<Vec<ValidationError>> {
        let binding = self.bind_arguments(call)?;
        Ok(self.schema.errors(&binding.instance))
    }

    /// Match a call to the signature without validating it.
    pub fn bind_arguments(&self, call: &CallArgs) -> BindingResult<Binding> {
        let function = self.signature.name();
        let parameters = self.signature.parameters();

        if call.args.len() > parameters.len() && !self.signature.accepts_var_positional() {
            return Err(BindingError::TooManyPositional {
                function: function.to_string(),
                max: parameters.len(),
                given: call.args.len(),
            });
        }

        let split = call.args.len().min(parameters.len());
        let mut supplied: Vec<Option<Value>> = call.args[..split]
            .iter()
            .cloned()
            .map(Some)
            .chain(std::iter::repeat(None))
            .take(parameters.len())
            .collect();
        let extra_positional = call.args[split..].to_vec();

        let mut extra_keywords = Map::new();
        for (name, value) in &call.kwargs {
            match self.signature.position(name) {
                Some(index) if supplied[index].is_some() => {
                    return Err(BindingError::duplicate(function, name));
                }
                Some(index) => supplied[index] = Some(value.clone()),
                None if self.signature.accepts_var_keywords() => {
                    extra_keywords.insert(name.clone(), value.clone());
                }
                None => return Err(BindingError::unexpected_keyword(function, name)),
            }
        }

        let mut instance = Map::new();
        let mut named = Vec::with_capacity(parameters.len());
        for (parameter, value) in parameters.iter().zip(supplied) {
            let value = match value {
                Some(value) => value,
                None => self
                    .schema
                    .default_for(&parameter.name)
                    .or(parameter.default.as_ref())
                    .cloned()
                    .ok_or_else(|| BindingError::missing(function, &parameter.name))?,
            };
            if self.schema.contains(&parameter.name) {
                instance.insert(parameter.name.clone(), value.clone());
            }
            named.push((parameter.name.clone(), value));
        }

        // Schema entries reachable only through the keyword catch-all.
        for name in self.schema.names() {
            if self.signature.position(name).is_some() {
                continue;
            }
            if let Some(value) = extra_keywords.get(name) {
                instance.insert(name.to_string(), value.clone());
            } else if let Some(default) = self.schema.default_for(name) {
                extra_keywords.insert(name.to_string(), default.clone());
                instance.insert(name.to_string(), default.clone());
            }
        }

        Ok(Binding {
            arguments: BoundArguments::new(named, extra_positional, extra_keywords),
            instance: Value::Object(instance),
        })
    }
}
