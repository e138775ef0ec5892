//! Error types for the vocabulary aggregate.

use thiserror::Error;
use wordbook_store::StoreError;

/// Result type for vocabulary operations.
pub type VocabResult<T> = Result<T, VocabError>;

/// Errors that can occur in vocabulary operations.
#[derive(Debug, Error)]
pub enum VocabError {
    /// The record source does not exist.
    #[error("record source not found: {0}")]
    NotFound(String),

    /// The record source could not be queried.
    #[error("backend error: {0}")]
    Backend(#[source] StoreError),

    /// A value had the wrong shape, e.g. a stored date that is not a date.
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    /// Combine was asked to merge two different words.
    #[error("cannot combine different words: '{left}' and '{right}'")]
    DomainConflict { left: String, right: String },

    /// A range or day offset that does not exist.
    #[error("range error: {0}")]
    Range(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

impl From<StoreError> for VocabError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(path) => VocabError::NotFound(path),
            other => VocabError::Backend(other),
        }
    }
}

impl From<wordbook_types::Error> for VocabError {
    fn from(err: wordbook_types::Error) -> Self {
        match err {
            wordbook_types::Error::DomainConflict { left, right } => {
                VocabError::DomainConflict { left, right }
            }
            other => VocabError::TypeMismatch(other.to_string()),
        }
    }
}
