//! Record source layer for wordbook.
//!
//! A record source is the persisted backend a vocabulary is loaded from. It
//! yields raw textual rows, answers date-range and existence queries, and
//! accepts appended rows. The aggregate never writes through on its own;
//! [`RecordSource::append`] is only called by whoever persists entries.
//!
//! # Backends
//!
//! - [`SqliteRecordSource`]: a single `Vocabulary` table in a SQLite file

mod error;
mod sqlite;

pub use error::{StoreError, StoreResult};
pub use sqlite::{SqliteRecordSource, TABLE_NAME};

use wordbook_types::RawRecord;

/// Query contract every backend fulfils.
///
/// Dates cross this boundary as stored `dd.mm.yyyy` text; parsing is left to
/// the caller.
pub trait RecordSource {
    /// All rows, in backend order.
    fn load_all(&self) -> StoreResult<Vec<RawRecord>>;

    /// Every distinct stored date, earliest first.
    fn distinct_dates(&self) -> StoreResult<Vec<String>>;

    /// The earliest stored date, if any row exists.
    fn first_date(&self) -> StoreResult<Option<String>>;

    /// The latest stored date, if any row exists.
    fn last_date(&self) -> StoreResult<Option<String>>;

    /// Whether any stored word contains `fragment` as a substring, ignoring
    /// case on both sides.
    fn contains_word(&self, fragment: &str) -> StoreResult<bool>;

    /// Appends one row.
    fn append(&self, record: &RawRecord) -> StoreResult<()>;
}
