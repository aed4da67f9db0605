//! Common error types for mimedex.

use thiserror::Error;

/// Errors raised by registry construction and extension queries.
///
/// A lookup that matches nothing is not an error; queries report that
/// with `None`.
#[derive(Debug, Error)]
pub enum MimeError {
    /// The path or extension has no non-empty final segment.
    #[error("Invalid path: {0:?}")]
    InvalidPath(String),

    /// Custom entries could not be decoded.
    #[error("Invalid custom entries: {0}")]
    InvalidCustomEntries(#[from] serde_json::Error),
}

/// Result type for mimedex operations.
pub type MimeResult<T> = Result<T, MimeError>;
