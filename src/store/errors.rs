//! # Store Errors
//!
//! Error types for the key/value store.

use thiserror::Error;

use uuid::Uuid;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Watcher token is unknown (already removed, or never registered)
    #[error("Watcher not found: {0}")]
    WatcherNotFound(Uuid),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
