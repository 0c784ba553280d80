//! Unified error types for horizondb.
//!
//! This module provides a clean error type that wraps internal errors
//! and presents a consistent interface to collaborators such as HTTP
//! handlers and the CLI.

use thiserror::Error;

/// All horizondb errors.
///
/// This is the canonical error type for all catalog operations. Every
/// variant is terminal for the operation in progress; nothing is retried
/// automatically.
#[derive(Debug, Error)]
pub enum Error {
    /// Query used a key outside the allowlist
    #[error("Invalid filter key: \"{0}\".")]
    InvalidFilterKey(String),

    /// Draft record or payload could not be decoded
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Writing the snapshot failed; the record was not saved
    #[error("persistence error: {0}")]
    Persistence(String),

    /// Stored snapshot is unreadable as a JSON array of objects
    #[error("corrupt snapshot: {0}")]
    Corruption(String),

    /// Catalog was closed
    #[error("catalog is closed")]
    Closed,

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type for horizondb operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if the caller supplied bad input.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::InvalidFilterKey(_) | Error::MalformedInput(_))
    }

    /// Check if a write did not become durable.
    pub fn is_persistence_failure(&self) -> bool {
        matches!(self, Error::Persistence(_))
    }

    /// Check if the operation may succeed on retry.
    ///
    /// Always false: validation is deterministic and a failed persist
    /// leaves the caller to decide whether to resubmit.
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// HTTP-style status code for this error.
    ///
    /// Client errors map to 400; everything else is a server-side 500.
    pub fn status_code(&self) -> u16 {
        if self.is_client_error() {
            400
        } else {
            500
        }
    }
}

/// Reason phrase for the status codes the collaborators emit.
pub fn status_text(status_code: u16) -> &'static str {
    match status_code {
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown Error",
    }
}

// Convert from internal core errors
impl From<horizon_core::Error> for Error {
    fn from(e: horizon_core::Error) -> Self {
        use horizon_core::Error as CoreError;
        match e {
            CoreError::InvalidFilterKey { key } => Error::InvalidFilterKey(key),
            CoreError::MalformedInput(msg) => Error::MalformedInput(msg),
            e @ CoreError::Persistence { .. } => Error::Persistence(e.to_string()),
            e @ CoreError::Corruption { .. } => Error::Corruption(e.to_string()),
            CoreError::Io(io_err) => Error::Io(io_err),
            CoreError::Serialization(msg) => Error::Serialization(msg),
            CoreError::Closed => Error::Closed,
        }
    }
}

impl From<horizon_storage::ConfigError> for Error {
    fn from(e: horizon_storage::ConfigError) -> Self {
        Error::Config(e.to_string())
    }
}

// Convert from serde_json errors
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
