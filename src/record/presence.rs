//! Presence predicate for heterogeneous values.
//!
//! `has_value` is the single source of truth for "emptiness". The join
//! mapper and the search filter both rely on it; any other emptiness
//! check in the crate must go through here.

use serde_json::Value;

use super::Record;

/// Returns whether a value is considered present.
///
/// Absent: null, empty array, empty object, empty string.
/// Present: everything else, including numeric zero and `false`.
pub fn has_value(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
        Value::String(text) => !text.is_empty(),
        Value::Number(_) | Value::Bool(_) => true,
    }
}

/// Returns whether a record carries the named field.
pub fn has_property(record: &Record, field: &str) -> bool {
    record.contains_key(field)
}
