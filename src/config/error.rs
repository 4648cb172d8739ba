use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or rewriting a sheet file.
///
/// These are the fatal tier: the driver stops and the binary exits with
/// a non-zero status. Problems inside the sheet itself are reported as
/// diagnostics instead (see `core::types`).
#[derive(Debug, Error)]
pub enum SheetError {
    /// Sheet file does not exist.
    #[error("Sheet file not found: {0}")]
    NotFound(PathBuf),
    /// Path exists but is a directory or other non-file entry.
    #[error("Not a regular file: {0}")]
    NotAFile(PathBuf),
    /// Reading the sheet failed (permissions, invalid UTF-8, ...).
    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Atomic write operation failed.
    #[error("Atomic write failed: {0}")]
    WriteFailed(String),
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
