//! Schema-bound functions and methods.
//!
//! A [`SchemaFunction`] wraps a callable together with its [`Signature`] and
//! parameter schemas. Each call is bound, checked against the combined
//! schema, and only then handed to the callable; on failure the callable is
//! not invoked and the [`CallError`] is returned as-is.
//!
//! # Examples
//!
//! ```rust
//! use simpleschema::{CallArgs, SchemaFunction, Signature};
//! use serde_json::json;
//!
//! let barfoo = SchemaFunction::new(
//!     Signature::new("barfoo")
//!         .param("a")
//!         .param_with_schema("b", json!({"type": "string"}))
//!         .param_with_default("c", 3),
//!     |args| args.to_value(),
//! )?;
//!
//! assert!(barfoo.call(CallArgs::positional([json!(1), json!(2)])).is_err());
//! let result = barfoo.call(CallArgs::positional([json!(1), json!("hello")]))?;
//! assert_eq!(result, json!({"a": 1, "b": "hello", "c": 3}));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::arguments::{BoundArguments, CallArgs};
use crate::binder::SchemaBinder;
use crate::config::SchemaConfig;
use crate::error::{BindingResult, BuildResult, CallResult, ValidationError};
use crate::schema::SimpleSchema;
use crate::signature::Signature;
use log::trace;
use serde_json::Value;
use std::marker::PhantomData;
use std::sync::Arc;

type Callable<R> = dyn Fn(BoundArguments) -> R + Send + Sync;

/// A callable whose arguments are validated against a schema on every call.
pub struct SchemaFunction<R> {
    binder: Arc<SchemaBinder>,
    function: Arc<Callable<R>>,
}

impl<R> Clone for SchemaFunction<R> {
    fn clone(&self) -> Self {
        Self {
            binder: Arc::clone(&self.binder),
            function: Arc::clone(&self.function),
        }
    }
}

impl<R> std::fmt::Debug for SchemaFunction<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaFunction")
            .field("signature", self.binder.signature())
            .field("schema", self.binder.schema().document())
            .finish()
    }
}

impl<R> SchemaFunction<R> {
    /// Wrap `function`, taking schemas only from the signature's
    /// per-parameter annotations.
    pub fn new<F>(signature: Signature, function: F) -> BuildResult<Self>
    where
        F: Fn(BoundArguments) -> R + Send + Sync + 'static,
    {
        SchemaFunctionBuilder::new(signature).build(function)
    }

    /// Start a builder for more control over schema and configuration.
    pub fn builder(signature: Signature) -> SchemaFunctionBuilder<R> {
        SchemaFunctionBuilder::new(signature)
    }

    /// Bind, validate, then invoke the wrapped callable.
    pub fn call(&self, args: CallArgs) -> CallResult<R> {
        let bound = self.binder.bind(&args)?;
        trace!("Invoking {}()", self.name());
        Ok((self.function)(bound))
    }

    /// Bind and validate without invoking the callable.
    pub fn bind(&self, args: &CallArgs) -> CallResult<BoundArguments> {
        self.binder.bind(args)
    }

    /// Every validation failure for a call, not only the first.
    pub fn validation_errors(&self, args: &CallArgs) -> BindingResult<Vec<ValidationError>> {
        self.binder.validation_errors(args)
    }

    pub fn name(&self) -> &str {
        self.binder.signature().name()
    }

    pub fn signature(&self) -> &Signature {
        self.binder.signature()
    }

    /// The combined schema as JSON.
    pub fn schema(&self) -> &Value {
        self.binder.schema().document()
    }
}

/// Method form of [`SchemaFunction`].
///
/// The receiver is passed separately on each call and is never bound,
/// defaulted, or validated.
pub struct SchemaMethod<S: ?Sized, R> {
    binder: Arc<SchemaBinder>,
    method: Arc<dyn Fn(&S, BoundArguments) -> R + Send + Sync>,
}

impl<S: ?Sized, R> Clone for SchemaMethod<S, R> {
    fn clone(&self) -> Self {
        Self {
            binder: Arc::clone(&self.binder),
            method: Arc::clone(&self.method),
        }
    }
}

impl<S: ?Sized, R> std::fmt::Debug for SchemaMethod<S, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaMethod")
            .field("signature", self.binder.signature())
            .field("schema", self.binder.schema().document())
            .finish()
    }
}

impl<S: ?Sized, R> SchemaMethod<S, R> {
    pub fn new<F>(signature: Signature, method: F) -> BuildResult<Self>
    where
        F: Fn(&S, BoundArguments) -> R + Send + Sync + 'static,
    {
        SchemaFunctionBuilder::new(signature).build_method(method)
    }

    /// Bind and validate `args`, then invoke the method on `receiver`.
    pub fn call(&self, receiver: &S, args: CallArgs) -> CallResult<R> {
        let bound = self.binder.bind(&args)?;
        trace!("Invoking method {}()", self.name());
        Ok((self.method)(receiver, bound))
    }

    pub fn bind(&self, args: &CallArgs) -> CallResult<BoundArguments> {
        self.binder.bind(args)
    }

    pub fn name(&self) -> &str {
        self.binder.signature().name()
    }

    pub fn schema(&self) -> &Value {
        self.binder.schema().document()
    }
}

/// Builder for [`SchemaFunction`] and [`SchemaMethod`].
///
/// `R` is the return type of the wrapped callable; it is fixed by
/// [`build`](Self::build) or [`build_method`](Self::build_method).
pub struct SchemaFunctionBuilder<R> {
    signature: Signature,
    schema: SimpleSchema,
    config: SchemaConfig,
    returns: PhantomData<fn() -> R>,
}

impl<R> Clone for SchemaFunctionBuilder<R> {
    fn clone(&self) -> Self {
        Self {
            signature: self.signature.clone(),
            schema: self.schema.clone(),
            config: self.config.clone(),
            returns: PhantomData,
        }
    }
}

impl<R> std::fmt::Debug for SchemaFunctionBuilder<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaFunctionBuilder")
            .field("signature", &self.signature)
            .field("schema", &self.schema)
            .field("config", &self.config)
            .finish()
    }
}

impl<R> SchemaFunctionBuilder<R> {
    pub fn new(signature: Signature) -> Self {
        Self {
            signature,
            schema: SimpleSchema::new(),
            config: SchemaConfig::default(),
            returns: PhantomData,
        }
    }

    /// Explicit per-parameter schemas. Per-parameter annotations on the
    /// signature take precedence over entries for the same name.
    pub fn schema(mut self, schema: SimpleSchema) -> Self {
        self.schema = schema;
        self
    }

    pub fn config(mut self, config: SchemaConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build<F>(self, function: F) -> BuildResult<SchemaFunction<R>>
    where
        F: Fn(BoundArguments) -> R + Send + Sync + 'static,
    {
        let binder = SchemaBinder::new(self.signature, &self.schema, &self.config)?;
        Ok(SchemaFunction {
            binder: Arc::new(binder),
            function: Arc::new(function),
        })
    }

    pub fn build_method<S, F>(self, method: F) -> BuildResult<SchemaMethod<S, R>>
    where
        S: ?Sized,
        F: Fn(&S, BoundArguments) -> R + Send + Sync + 'static,
    {
        let binder = SchemaBinder::new(self.signature, &self.schema, &self.config)?;
        Ok(SchemaMethod {
            binder: Arc::new(binder),
            method: Arc::new(method),
        })
    }
}

/// Decorator factory holding an explicit schema mapping.
///
/// # Examples
///
/// ```rust
/// use simpleschema::{CallArgs, Signature, SimpleSchema, simpleschema};
/// use serde_json::json;
///
/// let foo = simpleschema(
///     SimpleSchema::new()
///         .property("a", json!({"type": "string"}))
///         .property("d", json!({"type": "integer"})),
/// )
/// .wrap(
///     Signature::new("foo").param("a").param_with_default("d", 1),
///     |args| args.get_as::<i64>("d"),
/// )?;
///
/// assert_eq!(foo.call(CallArgs::positional(["x"]))?.unwrap(), 1);
/// assert!(foo.call(CallArgs::positional(["x"]).kwarg("d", "bar")).is_err());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn simpleschema(schema: SimpleSchema) -> SchemaDecorator {
    SchemaDecorator {
        schema,
        config: SchemaConfig::default(),
    }
}

/// Explicit schema waiting to be applied to a function.
#[derive(Debug, Clone)]
pub struct SchemaDecorator {
    schema: SimpleSchema,
    config: SchemaConfig,
}

impl SchemaDecorator {
    pub fn with_config(mut self, config: SchemaConfig) -> Self {
        self.config = config;
        self
    }

    pub fn wrap<R, F>(&self, signature: Signature, function: F) -> BuildResult<SchemaFunction<R>>
    where
        F: Fn(BoundArguments) -> R + Send + Sync + 'static,
    {
        self.builder(signature).build(function)
    }

    pub fn wrap_method<S, R, F>(
        &self,
        signature: Signature,
        method: F,
    ) -> BuildResult<SchemaMethod<S, R>>
    where
        S: ?Sized,
        F: Fn(&S, BoundArguments) -> R + Send + Sync + 'static,
    {
        self.builder(signature).build_method(method)
    }

    fn builder<R>(&self, signature: Signature) -> SchemaFunctionBuilder<R> {
        SchemaFunctionBuilder::new(signature)
            .schema(self.schema.clone())
            .config(self.config.clone())
    }
}
