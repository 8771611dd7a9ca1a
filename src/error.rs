//! Error types for Calluna.

use thiserror::Error;

use crate::query::QueryError;
use crate::reader::ReaderError;

/// Top-level error type for all Calluna operations.
#[derive(Debug, Error)]
pub enum CallunaError {
    /// Text analysis failed.
    #[error("analysis error: {0}")]
    Analysis(String),

    /// Index operation failed.
    #[error("index error: {0}")]
    Index(String),

    /// Query lexing or parsing failed.
    #[error("query error: {0}")]
    Query(#[from] QueryError),

    /// Document reading or extraction failed.
    #[error("reader error: {0}")]
    Reader(#[from] ReaderError),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Unexpected internal fault.
    #[error("internal error: {0}")]
    Internal(String),
}

impl CallunaError {
    /// Create an analysis error.
    pub fn analysis<S: Into<String>>(message: S) -> Self {
        CallunaError::Analysis(message.into())
    }

    /// Create an index error.
    pub fn index<S: Into<String>>(message: S) -> Self {
        CallunaError::Index(message.into())
    }

    /// Create an internal error.
    pub fn internal<S: Into<String>>(message: S) -> Self {
        CallunaError::Internal(message.into())
    }
}

/// Result type alias using [`CallunaError`].
pub type Result<T> = std::result::Result<T, CallunaError>;
