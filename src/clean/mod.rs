//! # Collection Cleaners
//!
//! Removal helpers for sequences and records. Each function takes
//! ownership and returns a new collection; inputs are never mutated in
//! place behind the caller's back.

use serde_json::Value;

use crate::record::{has_value, Record};

/// Drops every element that fails the presence predicate.
///
/// Order is preserved and the operation is idempotent. Numeric zero and
/// `false` survive; null, empty strings, and empty collections do not.
pub fn remove_empty_elements(items: Vec<Value>) -> Vec<Value> {
    items.into_iter().filter(has_value).collect()
}

/// Removes the element at `index`, splice-style.
///
/// An out-of-range index leaves the sequence unchanged.
pub fn remove_element(mut items: Vec<Value>, index: usize) -> Vec<Value> {
    if index < items.len() {
        items.remove(index);
    }
    items
}

/// Removes a field from a record if present.
pub fn remove_property(mut record: Record, field: &str) -> Record {
    record.remove(field);
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn seq(value: Value) -> Vec<Value> {
        value.as_array().unwrap().clone()
    }

    #[test]
    fn test_remove_empty_elements() {
        let items = seq(json!(["a", "", null, 0, false, [], {}, [1]]));

        let cleaned = remove_empty_elements(items);

        assert_eq!(cleaned, seq(json!(["a", 0, false, [1]])));
    }

    #[test]
    fn test_remove_empty_elements_idempotent() {
        let items = seq(json!(["a", null, "", "b"]));

        let once = remove_empty_elements(items);
        let twice = remove_empty_elements(once.clone());

        assert_eq!(once, twice);
    }

    #[test]
    fn test_remove_element() {
        let items = seq(json!([1, 2, 3]));

        assert_eq!(remove_element(items, 1), seq(json!([1, 3])));
    }

    #[test]
    fn test_remove_element_out_of_range() {
        let items = seq(json!([1, 2, 3]));

        assert_eq!(remove_element(items.clone(), 3), items);
    }

    #[test]
    fn test_remove_property() {
        let record = json!({"name": "Alice", "age": 30});
        let record = record.as_object().unwrap().clone();

        let trimmed = remove_property(record, "age");

        assert!(!trimmed.contains_key("age"));
        assert_eq!(trimmed.get("name"), Some(&json!("Alice")));
    }

    #[test]
    fn test_remove_missing_property_is_noop() {
        let record = json!({"name": "Alice"});
        let record = record.as_object().unwrap().clone();

        let unchanged = remove_property(record.clone(), "email");

        assert_eq!(unchanged, record);
    }
}
