//! Recovery strategies.
//!
//! A strategy turns cleaned completion text into raw JSON entries or gives up.
//! The interpreter tries strategies in order and keeps the first success.

use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;
use thiserror::Error;

/// Why a strategy produced nothing.
#[derive(Error, Debug)]
pub enum RecoveryError {
    /// The text is not valid JSON as a whole
    #[error("Invalid JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    /// No brace-delimited object in the text parsed on its own
    #[error("No well-formed objects found")]
    NoObjects,
}

/// One parsing attempt in the recovery chain.
pub trait RecoveryStrategy: Send + Sync {
    /// Short name used in logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Extract raw entries from already-cleaned text.
    fn attempt(&self, text: &str) -> Result<Vec<Value>, RecoveryError>;
}

/// Parses the whole text as one JSON document.
#[derive(Debug, Default, Clone, Copy)]
pub struct StrictParse;

impl RecoveryStrategy for StrictParse {
    fn name(&self) -> &'static str {
        "strict"
    }

    fn attempt(&self, text: &str) -> Result<Vec<Value>, RecoveryError> {
        let value: Value = serde_json::from_str(text)?;
        Ok(entries(value))
    }
}

/// Parses every flat `{...}` span independently and keeps the ones that parse.
///
/// Recovers the well-formed siblings of a malformed entry in an otherwise
/// broken array.
#[derive(Debug, Default, Clone, Copy)]
pub struct ObjectSalvage;

impl RecoveryStrategy for ObjectSalvage {
    fn name(&self) -> &'static str {
        "object-salvage"
    }

    fn attempt(&self, text: &str) -> Result<Vec<Value>, RecoveryError> {
        static OBJECT_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex =
            OBJECT_REGEX.get_or_init(|| Regex::new(r"\{[^{}]*\}").expect("invalid object regex"));

        let salvaged: Vec<Value> = regex
            .find_iter(text)
            .filter_map(|m| serde_json::from_str::<Value>(m.as_str()).ok())
            .collect();

        if salvaged.is_empty() {
            Err(RecoveryError::NoObjects)
        } else {
            Ok(salvaged)
        }
    }
}

/// Unwraps the accepted payload shapes into a flat entry list: a bare array,
/// an object with a `shapes` array, or a single object.
pub fn entries(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("shapes") {
            Some(Value::Array(items)) => items,
            Some(other) => {
                map.insert("shapes".to_string(), other);
                vec![Value::Object(map)]
            }
            None => vec![Value::Object(map)],
        },
        other => vec![other],
    }
}
