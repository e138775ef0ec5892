//! Core value types for wordbook.
//!
//! This crate defines the leaf types every other wordbook crate builds on:
//! - [`Entry`]: one learned word with its date, tags and definitions
//! - [`WordId`]: the content-derived identifier of a normalized headword
//! - [`RawRecord`]: the textual row shape exchanged with a record source
//! - date and normalization helpers shared by the store and the aggregate
//!
//! Entries are plain values. Merging two entries for the same word is done
//! with [`Entry::combine`], and whole batches are deduplicated with
//! [`merge_duplicates`].

mod date;
mod entry;
mod ids;
mod merge;
mod normalize;
mod record;

pub use date::{DATE_FORMAT, format_date, parse_date, today};
pub use entry::{Entry, EntryKey};
pub use ids::{ID_LENGTH, WordId};
pub use merge::merge_duplicates;
pub use normalize::normalize;
pub use record::{
    DEFINITION_SEPARATOR, RawRecord, format_properties, join_definitions, parse_definitions,
    parse_properties,
};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in entry operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Two entries with different non-empty words cannot be combined.
    #[error("cannot combine different words: '{left}' and '{right}'")]
    DomainConflict { left: String, right: String },

    #[error("invalid date '{0}', expected dd.mm.yyyy")]
    InvalidDate(String),

    #[error("invalid word id: {0}")]
    InvalidId(String),
}
