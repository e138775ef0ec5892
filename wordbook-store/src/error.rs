//! Error types for the record source layer.

use thiserror::Error;

/// Result type for record source operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while talking to a record source.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database file does not exist.
    #[error("record source not found: {0}")]
    NotFound(String),

    /// Error from SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A stored value has an unexpected shape.
    #[error("invalid data: {0}")]
    InvalidData(String),
}
