//! Error types for the record deduplication core

use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the matching pipeline.
///
/// Per the error-handling design, only configuration problems are fatal.
/// Bad records, empty blocks, worker panics, and cancellation all degrade
/// gracefully and are represented in [`crate::runner::RunOutcome`] instead
/// of here.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }
}
