//! Error types for the recognition event store.
//!
//! All errors are propagated via [`StoreError`] which wraps the
//! underlying [`fred`] errors with additional context about which key
//! was involved.

/// Errors that can occur in the recognition event store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The underlying Redis-compatible store failed to respond.
    #[error("store unavailable: {0}")]
    Unavailable(#[from] fred::error::Error),

    /// The requested id, owner, or day has no record.
    #[error("key not found: {0}")]
    NotFound(String),

    /// A stored record is missing expected fields or carries fields
    /// that cannot be parsed. Surfaced rather than silently defaulted.
    #[error("corrupt record at {key}: {reason}")]
    CorruptRecord {
        /// The store key holding the corrupt record.
        key: String,
        /// What was wrong with the record.
        reason: String,
    },

    /// A configuration error (e.g. an invalid connection URL).
    #[error("configuration error: {0}")]
    Config(String),
}
