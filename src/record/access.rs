//! Value coercions for dynamic field access.
//!
//! Searching, grouping, and aggregation all read fields by name from
//! records with no schema. These helpers define the one set of coercion
//! rules they share.

use serde_json::Value;

/// Coerces a primitive value to text for substring matching.
///
/// Arrays, objects, and null have no text form and return `None`; the
/// caller decides whether that means "skip" or "no match".
pub fn value_as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Numeric interpretation of a value: numbers directly, strings parsed.
///
/// Anything else does not parse and returns `None` (the aggregation
/// skip policy turns that into a zero contribution).
pub fn value_as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Stringifies a value for use as a group key.
///
/// Strings are used verbatim (no surrounding quotes); every other value
/// uses its JSON rendering, so a missing field stringifies as `"null"`.
pub fn stringify_key(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_coercion() {
        assert_eq!(value_as_text(&json!("abc")), Some("abc".to_string()));
        assert_eq!(value_as_text(&json!(42)), Some("42".to_string()));
        assert_eq!(value_as_text(&json!(true)), Some("true".to_string()));
        assert_eq!(value_as_text(&json!(null)), None);
        assert_eq!(value_as_text(&json!([1, 2])), None);
    }

    #[test]
    fn test_numeric_interpretation() {
        assert_eq!(value_as_number(&json!(10)), Some(10.0));
        assert_eq!(value_as_number(&json!("10")), Some(10.0));
        assert_eq!(value_as_number(&json!(" 2.5 ")), Some(2.5));
        assert_eq!(value_as_number(&json!("ten")), None);
        assert_eq!(value_as_number(&json!(null)), None);
        assert_eq!(value_as_number(&json!(true)), None);
    }

    #[test]
    fn test_group_keys() {
        assert_eq!(stringify_key(&json!("A")), "A");
        assert_eq!(stringify_key(&json!(7)), "7");
        assert_eq!(stringify_key(&json!(null)), "null");
        assert_eq!(stringify_key(&json!(true)), "true");
    }
}
