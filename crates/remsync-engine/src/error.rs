//! Error types for the engine crate.

/// Errors that can occur during engine operations.
///
/// Most input anomalies never reach this type: invalid roots, empty target
/// names, and malformed individual rows degrade to "fewer records" by
/// design. What remains is a persistence failure on commit and a wholly
/// undecodable edit payload.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration store operation failed.
    #[error("store error: {0}")]
    Store(#[from] remsync_store::StoreError),

    /// The edit payload could not be decoded at all.
    #[error("undecodable edit payload: {0}")]
    Payload(String),
}

/// Convenience alias for engine results.
pub type EngineResult<T> = Result<T, EngineError>;
