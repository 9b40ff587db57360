//! # Call Checker
//!
//! A command-line utility that binds and validates a JSON-encoded call against
//! a JSON function descriptor, without running anything.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin check-call descriptor.json call.json
//! ```
//!
//! ## Descriptor Format
//!
//! ```json
//! {
//!   "signature": {
//!     "name": "foo",
//!     "parameters": [
//!       {"name": "a"},
//!       {"name": "b"},
//!       {"name": "c"},
//!       {"name": "d", "default": 1},
//!       {"name": "e", "default": null}
//!     ]
//!   },
//!   "schema": {
//!     "a": {"type": "string"},
//!     "b": {"type": "number"},
//!     "d": {"type": "integer"}
//!   }
//! }
//! ```
//!
//! ## Call Format
//!
//! ```json
//! {"args": ["hello", 1.213, 313513], "kwargs": {"d": "bar"}}
//! ```
//!
//! ## Exit Codes
//!
//! - `0` - the call binds and validates; bound arguments are printed as JSON
//! - `1` - binding or validation failed; the error is printed
//! - `2` - usage, I/O, or descriptor errors

use serde::Deserialize;
use simpleschema::{CallArgs, CallError, SchemaConfig, SchemaFunction, Signature, SimpleSchema};
use std::env;
use std::fs;
use std::path::Path;
use std::process;

#[derive(Debug, Deserialize)]
struct Descriptor {
    signature: Signature,
    #[serde(default)]
    schema: SimpleSchema,
    #[serde(default)]
    config: SchemaConfig,
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: {} <descriptor.json> <call.json>", args[0]);
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  {} foo.descriptor.json foo.call.json", args[0]);
        process::exit(2);
    }

    let descriptor: Descriptor = load_json(Path::new(&args[1]));
    let call: CallArgs = load_json(Path::new(&args[2]));

    let function = match SchemaFunction::builder(descriptor.signature)
        .schema(descriptor.schema)
        .config(descriptor.config)
        .build(|bound| bound)
    {
        Ok(function) => function,
        Err(e) => {
            eprintln!("❌ Invalid descriptor: {}", e);
            process::exit(2);
        }
    };

    match function.call(call) {
        Ok(bound) => {
            println!("✓ Call to {}() is valid", function.name());
            match serde_json::to_string_pretty(&bound.to_value()) {
                Ok(text) => println!("{}", text),
                Err(e) => {
                    eprintln!("Error: failed to render bound arguments: {}", e);
                    process::exit(2);
                }
            }
        }
        Err(CallError::Validation(error)) => {
            eprintln!("❌ Validation failed: {}", error.message);
            eprintln!("  Instance path: {}", error.instance_path);
            eprintln!("  Schema path:   {}", error.schema_path);
            eprintln!("  Keyword:       {}", error.keyword);
            eprintln!("  Value:         {}", error.instance);
            eprintln!("  Schema:        {}", error.schema);
            process::exit(1);
        }
        Err(CallError::Binding(error)) => {
            eprintln!("❌ Binding failed: {}", error);
            process::exit(1);
        }
    }
}

fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> T {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error: cannot read '{}': {}", path.display(), e);
            process::exit(2);
        }
    };
    match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("Error: '{}' is not valid: {}", path.display(), e);
            process::exit(2);
        }
    }
}
