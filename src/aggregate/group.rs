//! Record grouping by key field.

use std::collections::HashMap;

use serde_json::Value;

use crate::record::{stringify_key, Record};

/// Groups of records keyed by the stringified grouping value.
///
/// Iteration yields groups in first-seen order; records within a group
/// keep their input order.
#[derive(Debug, Clone, Default)]
pub struct GroupTable {
    keys: Vec<String>,
    groups: HashMap<String, Vec<Record>>,
}

impl GroupTable {
    /// Records in the named group, if it exists.
    pub fn get(&self, key: &str) -> Option<&[Record]> {
        self.groups.get(key).map(Vec::as_slice)
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

    /// Iterates groups in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Record])> {
        self.keys
            .iter()
            .map(|key| (key.as_str(), self.groups[key].as_slice()))
    }

    fn push(&mut self, key: String, record: Record) {
        if !self.groups.contains_key(&key) {
            self.keys.push(key.clone());
        }
        self.groups.entry(key).or_default().push(record);
    }
}

/// Partitions records by the stringified value of `key_field`.
///
/// Records lacking the field group under `"null"`; nothing is dropped
/// and nothing raises.
pub fn group_by(records: &[Record], key_field: &str) -> GroupTable {
    let mut table = GroupTable::default();

    for record in records {
        let key = stringify_key(record.get(key_field).unwrap_or(&Value::Null));
        table.push(key, record.clone());
    }

    table
}
