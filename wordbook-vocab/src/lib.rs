//! Vocabulary aggregate for wordbook.
//!
//! A [`Vocabulary`] owns every [`Entry`] of one user, loaded eagerly from a
//! [`RecordSource`] when it is constructed. It answers:
//! - date queries: a single day, an inclusive range, the n-th active day
//!   before the last one
//! - searches by word fragment, by properties and by [`WordId`]
//! - learning statistics: the per-day histogram ("dynamic"), busiest and
//!   quietest days, averages and empty days
//!
//! # Two sources of truth
//!
//! The date range (`begin`, `end`, `duration`, the distinct date list) and
//! [`Vocabulary::contains_word`] are answered by the record source on every
//! call. The histogram, searches and date indexing run over the in-memory
//! entries. Entries staged with [`Vocabulary::append`] or
//! [`Vocabulary::extend`] therefore show up in the histogram but stay
//! invisible to the source-backed queries until someone persists them.

mod config;
mod error;
mod export;
mod query;
mod stats;
mod vocabulary;

pub use config::VocabularyConfig;
pub use error::{VocabError, VocabResult};
pub use export::{ChartData, DocumentData, Exporter, JsonExporter};
pub use query::DateQuery;
pub use stats::{DayInfo, Statistics};
pub use vocabulary::Vocabulary;

pub use wordbook_store::{RecordSource, SqliteRecordSource};
pub use wordbook_types::{Entry, EntryKey, WordId};
