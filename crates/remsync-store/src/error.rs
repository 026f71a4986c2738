/// Errors from configuration store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Serialization failure while writing a document.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
