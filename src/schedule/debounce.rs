//! Quiet-period debouncing on tokio tasks.

use std::sync::Mutex;
use std::time::Duration;

use tokio::task::JoinHandle;

use super::errors::{ScheduleError, ScheduleResult};

/// Debounces calls: a callback runs only after the quiet period has
/// elapsed with no further `call`.
///
/// Each `call` arms the callback on a tokio task and aborts any
/// previously armed one, so a burst of calls runs the last callback
/// exactly once. Must be used inside a tokio runtime.
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    /// Create a debouncer with the given quiet period
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Arms `callback` to run after the quiet period, replacing any
    /// previously armed callback.
    pub fn call<F>(&self, callback: F) -> ScheduleResult<()>
    where
        F: FnOnce() + Send + 'static,
    {
        let mut pending = self
            .pending
            .lock()
            .map_err(|_| ScheduleError::Internal("Lock poisoned".into()))?;

        if let Some(armed) = pending.take() {
            armed.abort();
        }

        let delay = self.delay;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        }));

        Ok(())
    }

    /// Aborts the armed callback, if any.
    pub fn cancel(&self) -> ScheduleResult<()> {
        let mut pending = self
            .pending
            .lock()
            .map_err(|_| ScheduleError::Internal("Lock poisoned".into()))?;

        if let Some(armed) = pending.take() {
            armed.abort();
        }
        Ok(())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        if let Ok(mut pending) = self.pending.lock() {
            if let Some(armed) = pending.take() {
                armed.abort();
            }
        }
    }
}
