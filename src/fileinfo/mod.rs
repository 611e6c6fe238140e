//! # File Info
//!
//! Reads a file and reports its name, content type, size, and
//! base64-encoded contents, the same shape a browser FileReader
//! wrapper reports.

pub mod errors;

pub use errors::{FileInfoError, FileInfoResult};

use std::fs;
use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

/// File metadata plus base64-encoded contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileInfo {
    /// File name (last path component)
    pub name: String,

    /// Content type guessed from the extension
    pub content_type: String,

    /// Size in bytes
    pub size: u64,

    /// Contents, base64-encoded (standard alphabet)
    pub base64: String,
}

/// Reads a file into a [`FileInfo`].
pub fn read_file_info(path: impl AsRef<Path>) -> FileInfoResult<FileInfo> {
    let path = path.as_ref();

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| FileInfoError::InvalidPath(path.display().to_string()))?;

    let contents = fs::read(path)?;

    Ok(FileInfo {
        name,
        content_type: content_type_for(path).to_string(),
        size: contents.len() as u64,
        base64: STANDARD.encode(&contents),
    })
}

/// Content type by extension, `application/octet-stream` fallback.
fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "txt" => "text/plain",
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "csv" => "text/csv",
        "js" => "text/javascript",
        "json" => "application/json",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "mp3" => "audio/mpeg",
        "mp4" => "video/mp4",
        _ => "application/octet-stream",
    }
}
