use std::fmt;

/// Unified error type for the noteport crate.
#[derive(Debug, Clone)]
pub enum CoreError {
    /// The external note source could not be reached or returned nothing.
    SourceUnavailable(String),
    /// Directory creation or file write failed during export.
    Filesystem(String),
    /// Invalid input provided by the caller.
    InvalidInput(String),
    /// Internal error.
    Internal(String),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::SourceUnavailable(msg) => write!(f, "note source unavailable: {msg}"),
            CoreError::Filesystem(msg) => write!(f, "filesystem error: {msg}"),
            CoreError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            CoreError::Internal(msg) => write!(f, "internal error: {msg}"),
        }
    }
}

impl std::error::Error for CoreError {}

/// Result type alias using [`CoreError`].
pub type CoreResult<T> = Result<T, CoreError>;
