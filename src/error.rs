//! Error types for Revdex.
//!
//! The indexing and query core is total and never returns these errors. They are
//! produced by the I/O collaborators: corpus and stop-word readers and the
//! configuration loader.

use std::io;

use thiserror::Error;

/// The main error type for Revdex operations.
#[derive(Error, Debug)]
pub enum RevdexError {
    /// I/O errors (file operations, readers).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid argument errors.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Generic error for other cases.
    #[error("{0}")]
    Other(String),
}

/// Result type alias for operations that may fail with [`RevdexError`].
pub type Result<T> = std::result::Result<T, RevdexError>;

impl RevdexError {
    /// Create a new configuration error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        RevdexError::InvalidConfig(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        RevdexError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        RevdexError::Other(msg.into())
    }
}

impl From<toml::de::Error> for RevdexError {
    fn from(err: toml::de::Error) -> Self {
        RevdexError::InvalidConfig(err.to_string())
    }
}
