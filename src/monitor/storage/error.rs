//! Errors raised while persisting metric records

/// Result of a store operation
pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The metrics file could not be written
    #[error("metrics file: {0}")]
    Io(#[from] std::io::Error),

    /// Records could not be encoded as JSON
    #[error("metrics encoding: {0}")]
    Serialization(#[from] serde_json::Error),
}
