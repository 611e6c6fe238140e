//! One-shot callback registry with due times and cancel tokens.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use super::errors::{ScheduleError, ScheduleResult};

type Callback = Arc<dyn Fn() + Send + Sync>;

struct ScheduledCallback {
    due: DateTime<Utc>,
    callback: Callback,
}

/// Registry of one-shot callbacks.
///
/// Callbacks are registered with a due time and a uuid cancel token;
/// `run_due` fires and removes every callback whose due time has
/// passed. The registry does not poll itself; the caller drives it.
#[derive(Default)]
pub struct CallbackRegistry {
    callbacks: RwLock<HashMap<Uuid, ScheduledCallback>>,
}

impl CallbackRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback due after `delay`, returning its cancel
    /// token.
    pub fn schedule_in<F>(&self, delay: Duration, callback: F) -> ScheduleResult<Uuid>
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.schedule_at(Utc::now() + delay, callback)
    }

    /// Registers a callback due at an absolute time.
    pub fn schedule_at<F>(&self, due: DateTime<Utc>, callback: F) -> ScheduleResult<Uuid>
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = Uuid::new_v4();
        let entry = ScheduledCallback {
            due,
            callback: Arc::new(callback),
        };

        let mut callbacks = self
            .callbacks
            .write()
            .map_err(|_| ScheduleError::Internal("Lock poisoned".into()))?;
        callbacks.insert(id, entry);

        Ok(id)
    }

    /// Cancels a pending callback by its token.
    pub fn cancel(&self, id: Uuid) -> ScheduleResult<()> {
        let mut callbacks = self
            .callbacks
            .write()
            .map_err(|_| ScheduleError::Internal("Lock poisoned".into()))?;

        match callbacks.remove(&id) {
            Some(_) => Ok(()),
            None => Err(ScheduleError::CallbackNotFound(id)),
        }
    }

    /// Tokens of callbacks due at `now`.
    pub fn due(&self, now: DateTime<Utc>) -> Vec<Uuid> {
        self.callbacks
            .read()
            .map(|callbacks| {
                callbacks
                    .iter()
                    .filter(|(_, entry)| entry.due <= now)
                    .map(|(id, _)| *id)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Fires and removes every callback due at `now`; returns how many
    /// ran.
    ///
    /// Callbacks run outside the registry lock, so a callback may
    /// schedule further callbacks.
    pub fn run_due(&self, now: DateTime<Utc>) -> ScheduleResult<usize> {
        let ready: Vec<Callback> = {
            let mut callbacks = self
                .callbacks
                .write()
                .map_err(|_| ScheduleError::Internal("Lock poisoned".into()))?;

            let due_ids: Vec<Uuid> = callbacks
                .iter()
                .filter(|(_, entry)| entry.due <= now)
                .map(|(id, _)| *id)
                .collect();

            due_ids
                .into_iter()
                .filter_map(|id| callbacks.remove(&id))
                .map(|entry| entry.callback)
                .collect()
        };

        let count = ready.len();
        for callback in ready {
            callback();
        }
        Ok(count)
    }

    /// Number of pending callbacks.
    pub fn len(&self) -> usize {
        self.callbacks.read().map(|c| c.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_due_callback_fires_once() {
        let registry = CallbackRegistry::new();
        let fired = Arc::new(AtomicUsize::new(0));

        let sink = Arc::clone(&fired);
        registry
            .schedule_at(Utc::now() - Duration::seconds(1), move || {
                sink.fetch_add(1, Ordering::SeqCst);
            })
            .unwrap();

        assert_eq!(registry.run_due(Utc::now()).unwrap(), 1);
        assert_eq!(registry.run_due(Utc::now()).unwrap(), 0);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_future_callback_does_not_fire_early() {
        let registry = CallbackRegistry::new();

        registry
            .schedule_in(Duration::hours(1), || {})
            .unwrap();

        assert_eq!(registry.run_due(Utc::now()).unwrap(), 0);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let registry = CallbackRegistry::new();
        let fired = Arc::new(AtomicUsize::new(0));

        let sink = Arc::clone(&fired);
        let id = registry
            .schedule_at(Utc::now() - Duration::seconds(1), move || {
                sink.fetch_add(1, Ordering::SeqCst);
            })
            .unwrap();

        registry.cancel(id).unwrap();

        assert_eq!(registry.run_due(Utc::now()).unwrap(), 0);
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_cancel_unknown_token() {
        let registry = CallbackRegistry::new();

        let err = registry.cancel(Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, ScheduleError::CallbackNotFound(_)));
    }

    #[test]
    fn test_due_lists_ready_tokens() {
        let registry = CallbackRegistry::new();

        let ready = registry
            .schedule_at(Utc::now() - Duration::seconds(1), || {})
            .unwrap();
        registry.schedule_in(Duration::hours(1), || {}).unwrap();

        assert_eq!(registry.due(Utc::now()), vec![ready]);
    }
}
