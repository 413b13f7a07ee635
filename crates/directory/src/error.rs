//! Error types for the directory crate.
//!
//! Building a snapshot never fails; only reading one from disk can.
//! Malformed records are normalized in [`crate::index`] instead of
//! surfacing here.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a directory snapshot
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// Snapshot file does not exist
    #[error("Snapshot file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// I/O error occurred while reading a snapshot
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Payload was not valid JSON, or not the expected top-level shape
    #[error("Invalid JSON in {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DirectoryError>;
