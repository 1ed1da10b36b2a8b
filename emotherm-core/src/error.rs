//! Error types for emotherm-core

use thiserror::Error;

/// Main error type for the emotherm-core library
#[derive(Error, Debug)]
pub enum Error {
    /// Database error
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// A history entry failed validation; the stored history is unchanged
    #[error("invalid history entry: {0}")]
    InvalidEntry(String),

    /// A session operation was attempted in the wrong state
    #[error("invalid session operation: {0}")]
    SessionState(String),
}

/// Result type alias for emotherm-core
pub type Result<T> = std::result::Result<T, Error>;
