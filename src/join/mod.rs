//! # Relational Mapper
//!
//! Left-join enrichment of one record sequence from another, keyed by
//! field value equality.

use serde_json::Value;

use crate::record::{has_value, Record};

/// Enriches each left record with one field projected from the first
/// matching right record.
///
/// A right record matches when its `right_key` value equals the left
/// record's `left_key` value; both fields must be present. Output order
/// and length mirror the left sequence exactly: one record out per
/// record in, never dropped, never duplicated even when several right
/// records match (first match wins).
///
/// Each output record is a shallow copy of the left record plus:
/// - `value_field`: the matched record's value, or null when there is
///   no match (or the match fails the presence predicate);
/// - `disabled`: true iff no present match was found.
///
/// An unmatched key is not an error; it is encoded in the output shape.
pub fn join_mapping(
    left: &[Record],
    left_key: &str,
    right: &[Record],
    right_key: &str,
    value_field: &str,
) -> Vec<Record> {
    left.iter()
        .map(|record| {
            let matched = record.get(left_key).and_then(|key_value| {
                right
                    .iter()
                    .find(|candidate| candidate.get(right_key) == Some(key_value))
            });

            let present = matched.map_or(false, |r| has_value(&Value::Object(r.clone())));

            let mut merged = record.clone();
            let projected = if present {
                matched
                    .and_then(|r| r.get(value_field))
                    .cloned()
                    .unwrap_or(Value::Null)
            } else {
                Value::Null
            };
            merged.insert(value_field.to_string(), projected);
            merged.insert("disabled".to_string(), Value::Bool(!present));
            merged
        })
        .collect()
}
