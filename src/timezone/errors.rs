//! # Timezone Errors

use thiserror::Error;

/// Result type for timezone conversion
pub type TimezoneResult<T> = Result<T, TimezoneError>;

/// Timezone conversion errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimezoneError {
    /// Zone string is not "UTC"/"Z" or a +HH:MM style offset
    #[error("Invalid UTC offset: {0}")]
    InvalidOffset(String),

    /// Timestamp is neither RFC 3339 nor YYYY-MM-DDTHH:MM:SS
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
