//! Storage error types.

use thiserror::Error;

/// Errors that can occur when reading or writing newsletters.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backend failed to read or write the blob.
    #[error("Storage backend error: {0}")]
    Backend(String),

    /// The stored blob is not a valid newsletter array.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Filesystem error from the file backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
