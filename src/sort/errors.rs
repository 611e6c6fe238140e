//! # Sort Errors
//!
//! The only hard failure in the transformation core: an unrecognized
//! direction token.

use thiserror::Error;

/// Result type for sort operations
pub type SortResult<T> = Result<T, SortError>;

/// Sort errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// Direction token was neither "ASC" nor "DESC"
    #[error("Invalid sort direction: {0} (expected \"ASC\" or \"DESC\")")]
    InvalidDirection(String),
}
