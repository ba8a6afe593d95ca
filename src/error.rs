//! Error types shared across the crate.

use std::io;

use thiserror::Error;

/// Convenience alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, RemesaError>;

/// Errors surfaced by the query core and the storage boundary.
#[derive(Debug, Error)]
pub enum RemesaError {
    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A request or response body could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A vertex, label or index entry does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// The caller handed us something unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The storage engine returned inconsistent data.
    #[error("storage engine fault: {0}")]
    Storage(String),
}
