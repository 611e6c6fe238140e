//! # Schedule Errors
//!
//! Error types for the callback registry and debouncer.

use thiserror::Error;

use uuid::Uuid;

/// Result type for scheduling operations
pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Scheduling errors
#[derive(Debug, Clone, Error)]
pub enum ScheduleError {
    /// Cancel token is unknown (already fired, cancelled, or never
    /// registered)
    #[error("Scheduled callback not found: {0}")]
    CallbackNotFound(Uuid),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
