//! Descriptor fixtures shared by tests that load functions from JSON.

use serde_json::{Value, json};

/// JSON descriptor equivalent to [`super::foo`].
pub fn foo_descriptor() -> Value {
    json!({
        "signature": {
            "name": "foo",
            "parameters": [
                {"name": "a"},
                {"name": "b"},
                {"name": "c"},
                {"name": "d", "default": 1},
                {"name": "e", "default": null}
            ]
        },
        "schema": {
            "a": {"type": "string"},
            "b": {"type": "number"},
            "d": {"type": "integer"}
        }
    })
}

/// Descriptor for a function taking `**options` with schema-described options.
pub fn render_descriptor() -> Value {
    json!({
        "signature": {
            "name": "render",
            "parameters": [
                {"name": "template", "schema": {"type": "string", "minLength": 1}}
            ],
            "var_keywords": true
        },
        "schema": {
            "indent": {"type": "integer", "minimum": 0, "default": 2},
            "theme": {"enum": ["light", "dark"]}
        }
    })
}
