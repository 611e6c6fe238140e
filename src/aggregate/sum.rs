//! Per-group numeric summation.

use std::collections::HashMap;

use serde_json::Value;

use crate::observe::{Logger, Severity};
use crate::record::{stringify_key, value_as_number, Record};

/// Summed totals keyed by group, in first-seen group order.
#[derive(Debug, Clone, Default)]
pub struct SumTable {
    keys: Vec<String>,
    totals: HashMap<String, f64>,
}

impl SumTable {
    /// Total for the named group, if it exists.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.totals.get(key).copied()
    }

    /// Group keys in first-seen order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterates (key, total) pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.keys.iter().map(|key| (key.as_str(), self.totals[key]))
    }

    fn add(&mut self, key: String, amount: f64) {
        if !self.totals.contains_key(&key) {
            self.keys.push(key.clone());
        }
        *self.totals.entry(key).or_insert(0.0) += amount;
    }
}

/// Sums the numeric interpretation of `sum_field` per group of
/// `key_field` values.
///
/// Numbers and numeric strings count; anything else contributes 0 with
/// a WARN diagnostic and never raises. A group whose every value is
/// unparseable still appears, with total 0.
pub fn aggregate_data(records: &[Record], key_field: &str, sum_field: &str) -> SumTable {
    let mut table = SumTable::default();

    for record in records {
        let key = stringify_key(record.get(key_field).unwrap_or(&Value::Null));

        let value = record.get(sum_field).unwrap_or(&Value::Null);
        let amount = match value_as_number(value) {
            Some(amount) => amount,
            None => {
                Logger::log(
                    Severity::Warn,
                    "aggregate_value_skipped",
                    &[
                        ("field", sum_field),
                        ("group", &key),
                        ("value", &value.to_string()),
                    ],
                );
                0.0
            }
        };

        table.add(key, amount);
    }

    table
}
