//! Watchable key/value store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde_json::Value;
use uuid::Uuid;

use super::errors::{StoreError, StoreResult};

/// Callback invoked with (key, old value, new value). The new value is
/// `None` when the key was removed.
pub type WatchCallback = Arc<dyn Fn(&str, Option<&Value>, Option<&Value>) + Send + Sync>;

struct Watcher {
    key: String,
    callback: WatchCallback,
}

/// In-memory key/value store with per-key change watchers.
///
/// Watchers are identified by uuid cancel tokens and fire synchronously
/// inside `set`/`remove`, after the entry lock is released.
#[derive(Default)]
pub struct KvStore {
    entries: RwLock<HashMap<String, Value>>,
    watchers: RwLock<HashMap<Uuid, Watcher>>,
}

impl KvStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a value, notifying watchers of the key.
    pub fn set(&self, key: &str, value: Value) -> StoreResult<()> {
        let old = {
            let mut entries = self
                .entries
                .write()
                .map_err(|_| StoreError::Internal("Lock poisoned".into()))?;
            entries.insert(key.to_string(), value.clone())
        };

        self.notify(key, old.as_ref(), Some(&value))?;
        Ok(())
    }

    /// Returns a copy of the stored value, if any.
    pub fn get(&self, key: &str) -> StoreResult<Option<Value>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| StoreError::Internal("Lock poisoned".into()))?;
        Ok(entries.get(key).cloned())
    }

    /// Removes a key, notifying watchers, and returns the old value.
    pub fn remove(&self, key: &str) -> StoreResult<Option<Value>> {
        let old = {
            let mut entries = self
                .entries
                .write()
                .map_err(|_| StoreError::Internal("Lock poisoned".into()))?;
            entries.remove(key)
        };

        if old.is_some() {
            self.notify(key, old.as_ref(), None)?;
        }
        Ok(old)
    }

    /// Registers a change watcher for a key and returns its cancel
    /// token.
    pub fn watch<F>(&self, key: &str, callback: F) -> StoreResult<Uuid>
    where
        F: Fn(&str, Option<&Value>, Option<&Value>) + Send + Sync + 'static,
    {
        let id = Uuid::new_v4();
        let watcher = Watcher {
            key: key.to_string(),
            callback: Arc::new(callback),
        };

        let mut watchers = self
            .watchers
            .write()
            .map_err(|_| StoreError::Internal("Lock poisoned".into()))?;
        watchers.insert(id, watcher);

        Ok(id)
    }

    /// Removes a watcher by its token.
    pub fn unwatch(&self, id: Uuid) -> StoreResult<()> {
        let mut watchers = self
            .watchers
            .write()
            .map_err(|_| StoreError::Internal("Lock poisoned".into()))?;

        match watchers.remove(&id) {
            Some(_) => Ok(()),
            None => Err(StoreError::WatcherNotFound(id)),
        }
    }

    fn notify(&self, key: &str, old: Option<&Value>, new: Option<&Value>) -> StoreResult<()> {
        let callbacks: Vec<WatchCallback> = {
            let watchers = self
                .watchers
                .read()
                .map_err(|_| StoreError::Internal("Lock poisoned".into()))?;
            watchers
                .values()
                .filter(|watcher| watcher.key == key)
                .map(|watcher| Arc::clone(&watcher.callback))
                .collect()
        };

        for callback in callbacks {
            callback(key, old, new);
        }
        Ok(())
    }
}
