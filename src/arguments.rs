//! Call arguments as passed by a caller and as received by the callable.
//!
//! [`CallArgs`] is the raw call: positional values plus keyword values.
//! [`BoundArguments`] is what the wrapped function receives after binding:
//! one value per declared parameter, in declaration order, plus whatever the
//! catch-all positional and keyword slots collected.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Arguments of a single call.
///
/// # Examples
///
/// ```rust
/// use simpleschema::CallArgs;
/// use serde_json::Value;
///
/// let call = CallArgs::new()
///     .arg("hello")
///     .arg(1.213)
///     .arg(313513)
///     .kwarg("d", "bar");
/// assert_eq!(call.args.len(), 3);
/// assert_eq!(call.kwargs["d"], Value::from("bar"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallArgs {
    /// Positional arguments in call order
    #[serde(default)]
    pub args: Vec<Value>,
    /// Keyword arguments
    #[serde(default)]
    pub kwargs: Map<String, Value>,
}

impl CallArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call with the given positional arguments only.
    pub fn positional<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            args: values.into_iter().map(Into::into).collect(),
            kwargs: Map::new(),
        }
    }

    /// Append a positional argument.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.args.push(value.into());
        self
    }

    /// Add a keyword argument, replacing any earlier one of the same name.
    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.kwargs.insert(name.into(), value.into());
        self
    }
}

/// Arguments as delivered to the wrapped function.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BoundArguments {
    named: Vec<(String, Value)>,
    extra_positional: Vec<Value>,
    extra_keywords: Map<String, Value>,
}

impl BoundArguments {
    pub(crate) fn new(
        named: Vec<(String, Value)>,
        extra_positional: Vec<Value>,
        extra_keywords: Map<String, Value>,
    ) -> Self {
        Self {
            named,
            extra_positional,
            extra_keywords,
        }
    }

    /// Value of a declared parameter or collected keyword argument.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.named
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
            .or_else(|| self.extra_keywords.get(name))
    }

    /// Deserialize one argument. A missing argument deserializes from
    /// `null`, so `Option<T>` yields `None` for it.
    pub fn get_as<T: DeserializeOwned>(&self, name: &str) -> serde_json::Result<T> {
        let value = self.get(name).cloned().unwrap_or(Value::Null);
        serde_json::from_value(value)
    }

    /// Deserialize all named and keyword arguments into a struct.
    pub fn deserialize<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_value(self.to_value())
    }

    /// Declared parameters and their values, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.named.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Positional arguments beyond the declared parameters.
    pub fn extra_positional(&self) -> &[Value] {
        &self.extra_positional
    }

    /// Keyword arguments that name no declared parameter.
    pub fn extra_keywords(&self) -> &Map<String, Value> {
        &self.extra_keywords
    }

    /// Number of declared parameters.
    pub fn len(&self) -> usize {
        self.named.len()
    }

    pub fn is_empty(&self) -> bool {
        self.named.is_empty()
    }

    /// Named and keyword arguments as one JSON object.
    pub fn to_value(&self) -> Value {
        let mut object = Map::new();
        for (name, value) in &self.named {
            object.insert(name.clone(), value.clone());
        }
        for (name, value) in &self.extra_keywords {
            object.insert(name.clone(), value.clone());
        }
        Value::Object(object)
    }
}
