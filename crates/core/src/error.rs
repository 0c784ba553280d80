//! Error types shared across horizondb crates

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the data layer
///
/// Data-shape mismatches during filtering are never errors; a missing or
/// mistyped field is simply a non-match.
#[derive(Debug, Error)]
pub enum Error {
    /// Query contains a key outside the allowlist
    #[error("invalid filter key: {key}")]
    InvalidFilterKey {
        /// The first unrecognized key, in query order
        key: String,
    },

    /// Draft record or payload could not be decoded
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Writing the snapshot failed; the record was not saved
    #[error("failed to persist snapshot to {}: {source}", path.display())]
    Persistence {
        /// Snapshot path being written
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Snapshot file exists but does not hold a JSON array of objects
    #[error("corrupt snapshot at {}: {message}", path.display())]
    Corruption {
        /// Snapshot path that failed to parse
        path: PathBuf,
        /// Parser diagnostic
        message: String,
    },

    /// I/O error outside of the persist step
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Store has been closed and accepts no further appends
    #[error("store is closed")]
    Closed,
}

/// Result type alias for horizondb core operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build an `InvalidFilterKey` error
    pub fn invalid_filter_key(key: impl Into<String>) -> Self {
        Error::InvalidFilterKey { key: key.into() }
    }

    /// Check if the caller supplied bad input
    ///
    /// Client errors are never fixed by retrying the same request.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::InvalidFilterKey { .. } | Error::MalformedInput(_))
    }

    /// Check if this error means a write did not become durable
    pub fn is_persistence_failure(&self) -> bool {
        matches!(self, Error::Persistence { .. })
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
