//! Value rendering for log fields
//!
//! Every value that appears in a log line passes through [`FieldValue`] and
//! is rendered with the same JSON encoder, so two lines carrying the same
//! logical value are byte-identical.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Placeholder emitted when a value cannot be encoded.
///
/// Rendering must never fail a log call, so encoder errors degrade to this
/// string instead of propagating.
pub const ENCODING_PLACEHOLDER: &str = "(encoding failed)";

/// Value type for structured logging fields
///
/// A closed sum over everything the line format can carry: null, booleans,
/// numbers, strings, sequences, and key-ordered mappings, recursively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Seq(Vec<FieldValue>),
    Map(BTreeMap<String, FieldValue>),
}

impl FieldValue {
    /// Capture an error's human-readable description as a field value.
    ///
    /// Errors carry a failure description rather than a structured form, so
    /// they enter log lines as their `Display` text.
    pub fn from_error(err: &(dyn std::error::Error + 'static)) -> Self {
        FieldValue::String(err.to_string())
    }

    /// Convert an arbitrary serializable value into a `FieldValue`.
    ///
    /// Degrades to [`ENCODING_PLACEHOLDER`] if the value's serializer fails;
    /// a log call never observes the failure.
    pub fn from_serialize<T: Serialize>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(v) => Self::from_json(v),
            Err(_) => FieldValue::String(ENCODING_PLACEHOLDER.to_string()),
        }
    }

    /// Convert a `serde_json::Value` into a `FieldValue` recursively.
    pub fn from_json(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => FieldValue::Null,
            serde_json::Value::Bool(b) => FieldValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    FieldValue::Int(i)
                } else {
                    n.as_f64().map(FieldValue::Float).unwrap_or(FieldValue::Null)
                }
            }
            serde_json::Value::String(s) => FieldValue::String(s),
            serde_json::Value::Array(items) => {
                FieldValue::Seq(items.into_iter().map(Self::from_json).collect())
            }
            serde_json::Value::Object(map) => FieldValue::Map(
                map.into_iter().map(|(k, v)| (k, Self::from_json(v))).collect(),
            ),
        }
    }

    /// Whether this value is a string key candidate.
    pub fn as_key(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Render a value into its canonical single-line textual form.
///
/// Uses the JSON encoding: numbers as literals, strings quoted, composites
/// recursive. serde_json leaves HTML-unsafe characters unescaped, emits no
/// trailing delimiter, and encodes non-finite floats as null. An encoder
/// failure renders as [`ENCODING_PLACEHOLDER`] rather than propagating.
pub fn render(value: &FieldValue) -> String {
    match serde_json::to_string(value) {
        Ok(s) => s,
        Err(_) => ENCODING_PLACEHOLDER.to_string(),
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render(self))
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<u32> for FieldValue {
    fn from(i: u32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<Vec<FieldValue>> for FieldValue {
    fn from(items: Vec<FieldValue>) -> Self {
        FieldValue::Seq(items)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(FieldValue::Null)
    }
}
