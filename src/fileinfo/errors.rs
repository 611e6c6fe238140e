//! # File Info Errors

use thiserror::Error;

/// Result type for file info operations
pub type FileInfoResult<T> = Result<T, FileInfoError>;

/// File info errors
#[derive(Debug, Error)]
pub enum FileInfoError {
    /// Path has no file name component
    #[error("Path has no file name: {0}")]
    InvalidPath(String),

    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
