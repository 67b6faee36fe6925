//! Error types for the seeder binary.
//!
//! [`SeederError`] is the top-level error type that wraps all possible
//! failure modes during seeding, providing a single error type that
//! `main` can propagate with `?`.

/// Top-level error for the seeder binary.
#[derive(Debug, thiserror::Error)]
pub enum SeederError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: crate::config::ConfigError,
    },

    /// A store operation failed.
    #[error("store error: {source}")]
    Store {
        /// The underlying store error.
        #[from]
        source: veridoc_store::StoreError,
    },

    /// Sample data construction failed.
    #[error("sample data error: {message}")]
    Sample {
        /// Description of the sample-data failure.
        message: String,
    },
}
