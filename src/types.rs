//! Common types used throughout mediapager
//!
//! This module contains shared type definitions, type aliases,
//! and the record/cursor types passed between pagination and export.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;

/// One page of records as returned by a listing call
pub type Page = Vec<Record>;

// ============================================================================
// Record
// ============================================================================

/// A single record returned by a listing endpoint.
///
/// Records are opaque JSON objects. Accessors never fail: a missing key,
/// an explicit `null`, or a non-object in the middle of a path all read as
/// `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(JsonObject);

impl Record {
    /// Wrap a JSON object
    pub fn new(fields: JsonObject) -> Self {
        Self(fields)
    }

    /// Get a top-level field, treating `null` as absent
    pub fn get(&self, field: &str) -> Option<&JsonValue> {
        self.0.get(field).filter(|v| !v.is_null())
    }

    /// Walk a path of nested keys.
    ///
    /// Returns `None` as soon as a key is missing, a value is `null`, or an
    /// intermediate value is not an object.
    pub fn lookup<S: AsRef<str>>(&self, path: &[S]) -> Option<&JsonValue> {
        let (first, rest) = path.split_first()?;
        let mut current = self.get(first.as_ref())?;
        for key in rest {
            current = current
                .as_object()?
                .get(key.as_ref())
                .filter(|v| !v.is_null())?;
        }
        Some(current)
    }

    /// Read the cursor value held in `field`
    pub fn cursor(&self, field: &str) -> Option<Cursor> {
        self.get(field).and_then(Cursor::from_value)
    }

    /// Borrow the underlying object
    pub fn as_object(&self) -> &JsonObject {
        &self.0
    }

    /// Consume the record, returning the underlying object
    pub fn into_inner(self) -> JsonObject {
        self.0
    }
}

impl From<JsonObject> for Record {
    fn from(fields: JsonObject) -> Self {
        Self(fields)
    }
}

impl TryFrom<JsonValue> for Record {
    type Error = Error;

    fn try_from(value: JsonValue) -> Result<Self> {
        match value {
            JsonValue::Object(map) => Ok(Self(map)),
            other => Err(Error::decode(format!(
                "expected a JSON object record, got {}",
                json_kind(&other)
            ))),
        }
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

// ============================================================================
// Cursor
// ============================================================================

/// Resume token for cursor pagination: the identifier of the last record seen
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    /// Create a cursor from a raw identifier
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Build a cursor from a JSON identifier.
    ///
    /// Numbers and non-empty strings are accepted; anything else is not a
    /// usable identifier.
    pub fn from_value(value: &JsonValue) -> Option<Self> {
        match value {
            JsonValue::Number(n) => Some(Self(n.to_string())),
            JsonValue::String(s) if !s.is_empty() => Some(Self(s.clone())),
            _ => None,
        }
    }

    /// Cursor as a query parameter value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Backoff Type
// ============================================================================

/// Type of backoff for retries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackoffType {
    /// Constant delay between retries
    Constant,
    /// Linear increase in delay
    Linear,
    /// Exponential increase in delay
    #[default]
    Exponential,
}

// ============================================================================
// Utilities
// ============================================================================

/// Extension trait for Option<String> to handle empty strings
pub trait OptionStringExt {
    /// Returns None if the string is empty
    fn none_if_empty(self) -> Option<String>;
}

impl OptionStringExt for Option<String> {
    fn none_if_empty(self) -> Option<String> {
        self.filter(|s| !s.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: JsonValue) -> Record {
        Record::try_from(value).unwrap()
    }

    #[test]
    fn test_record_get_treats_null_as_missing() {
        let r = record(json!({"media_id": 1, "name": null}));
        assert_eq!(r.get("media_id"), Some(&json!(1)));
        assert_eq!(r.get("name"), None);
        assert_eq!(r.get("url"), None);
    }

    #[test]
    fn test_record_lookup_nested() {
        let r = record(json!({
            "metadata": {"pub_country": {"tag": "IN", "label": "India"}}
        }));
        assert_eq!(
            r.lookup(&["metadata", "pub_country", "tag"]),
            Some(&json!("IN"))
        );
    }

    #[test]
    fn test_record_lookup_short_circuits() {
        let r = record(json!({
            "metadata": {"pub_country": null, "language": "en"}
        }));
        assert_eq!(r.lookup(&["metadata", "pub_country", "tag"]), None);
        // intermediate value is not an object
        assert_eq!(r.lookup(&["metadata", "language", "tag"]), None);
        assert_eq!(r.lookup(&["missing", "tag"]), None);
        assert_eq!(r.lookup::<&str>(&[]), None);

        let r = record(json!({"metadata": null}));
        assert_eq!(r.lookup(&["metadata", "pub_country", "tag"]), None);
    }

    #[test]
    fn test_record_rejects_non_objects() {
        let err = Record::try_from(json!([1, 2])).unwrap_err();
        assert!(err.to_string().contains("got array"));
        assert!(Record::try_from(json!(null)).is_err());
    }

    #[test]
    fn test_cursor_from_value() {
        assert_eq!(Cursor::from_value(&json!(42)), Some(Cursor::new("42")));
        assert_eq!(Cursor::from_value(&json!("abc")), Some(Cursor::new("abc")));
        assert_eq!(Cursor::from_value(&json!("")), None);
        assert_eq!(Cursor::from_value(&json!(null)), None);
        assert_eq!(Cursor::from_value(&json!({"id": 1})), None);
        assert_eq!(Cursor::new("7").to_string(), "7");
    }

    #[test]
    fn test_record_cursor() {
        let r = record(json!({"feeds_id": 981, "media_id": 1}));
        assert_eq!(r.cursor("feeds_id"), Some(Cursor::new("981")));
        assert_eq!(r.cursor("tags_id"), None);
    }

    #[test]
    fn test_backoff_serde() {
        let backoff: BackoffType = serde_json::from_str("\"linear\"").unwrap();
        assert_eq!(backoff, BackoffType::Linear);
        assert_eq!(BackoffType::default(), BackoffType::Exponential);
    }

    #[test]
    fn test_option_string_none_if_empty() {
        assert_eq!(
            Some("guardian".to_string()).none_if_empty(),
            Some("guardian".to_string())
        );
        assert_eq!(Some("  ".to_string()).none_if_empty(), None);
        assert_eq!(None::<String>.none_if_empty(), None);
    }
}
