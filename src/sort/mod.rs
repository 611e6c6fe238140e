//! # Sorting Utilities
//!
//! Direction-validated numeric sorting and stable by-field sorting of
//! record sequences.

pub mod errors;

pub use errors::{SortError, SortResult};

use std::cmp::Ordering;

use serde_json::Value;

use crate::record::Record;

/// Sort direction, parsed from its literal token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Parses `"ASC"` or `"DESC"`; anything else is an error.
    pub fn parse(token: &str) -> SortResult<Self> {
        match token {
            "ASC" => Ok(SortDirection::Asc),
            "DESC" => Ok(SortDirection::Desc),
            other => Err(SortError::InvalidDirection(other.to_string())),
        }
    }
}

/// Sorts numbers by the given direction token.
///
/// The direction must be exactly `"ASC"` or `"DESC"`; any other token
/// fails the whole call with `SortError::InvalidDirection`. Equal
/// elements keep no particular order.
pub fn sort_array(mut values: Vec<f64>, direction: &str) -> SortResult<Vec<f64>> {
    let direction = SortDirection::parse(direction)?;

    values.sort_by(|a, b| {
        let ordering = a.total_cmp(b);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    Ok(values)
}

/// Sorts records ascending by a field, stably.
///
/// Ties keep their relative input order. Missing fields sort first;
/// mixed types order by type rank before value.
pub fn sort_objects_by_property(mut records: Vec<Record>, field: &str) -> Vec<Record> {
    records.sort_by(|a, b| compare_values(a.get(field), b.get(field)));
    records
}

/// Three-way comparison of optional field values.
///
/// Ordering rules:
/// - absent < any present value
/// - across types: null < bool < number < string < array < object
/// - within a type, natural ordering (arrays and objects compare equal)
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a_val), Some(b_val)) => {
            let type_order = |v: &Value| -> u8 {
                match v {
                    Value::Null => 0,
                    Value::Bool(_) => 1,
                    Value::Number(_) => 2,
                    Value::String(_) => 3,
                    Value::Array(_) => 4,
                    Value::Object(_) => 5,
                }
            };

            let by_type = type_order(a_val).cmp(&type_order(b_val));
            if by_type != Ordering::Equal {
                return by_type;
            }

            match (a_val, b_val) {
                (Value::Bool(a_b), Value::Bool(b_b)) => a_b.cmp(b_b),
                (Value::Number(a_n), Value::Number(b_n)) => {
                    let a_f = a_n.as_f64().unwrap_or(0.0);
                    let b_f = b_n.as_f64().unwrap_or(0.0);
                    a_f.total_cmp(&b_f)
                }
                (Value::String(a_s), Value::String(b_s)) => a_s.cmp(b_s),
                _ => Ordering::Equal,
            }
        }
    }
}
