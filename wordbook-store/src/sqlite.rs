//! SQLite-backed record source.

use rusqlite::functions::{Context, FunctionFlags};
use rusqlite::{Connection, params};
use std::path::Path;
use tracing::{debug, info};
use wordbook_types::RawRecord;

use crate::{RecordSource, StoreError, StoreResult};

/// Name of the table holding vocabulary rows.
pub const TABLE_NAME: &str = "Vocabulary";

// `dd.mm.yyyy` text does not sort chronologically, so order by yyyymmdd.
const DATE_KEY: &str = "substr(date, 7, 4) || substr(date, 4, 2) || substr(date, 1, 2)";

/// Record source over a SQLite database.
pub struct SqliteRecordSource {
    conn: Connection,
}

impl SqliteRecordSource {
    /// Opens an existing vocabulary database.
    ///
    /// Fails with [`StoreError::NotFound`] if the file is missing and with
    /// [`StoreError::Database`] if it is not SQLite or has no vocabulary
    /// table. The file is never written to.
    pub fn open(path: &Path) -> StoreResult<Self> {
        if !path.exists() {
            return Err(StoreError::NotFound(path.display().to_string()));
        }
        let source = Self::from_connection(Connection::open(path)?)?;
        source.check_schema()?;
        info!(path = %path.display(), "Opened vocabulary database");
        Ok(source)
    }

    /// Opens (or creates) a database file.
    pub fn create(path: &Path) -> StoreResult<Self> {
        let source = Self::from_connection(Connection::open(path)?)?;
        source.init_schema()?;
        info!(path = %path.display(), "Created vocabulary database");
        Ok(source)
    }

    /// Opens an in-memory database (for testing).
    pub fn open_in_memory() -> StoreResult<Self> {
        let source = Self::from_connection(Connection::open_in_memory()?)?;
        source.init_schema()?;
        Ok(source)
    }

    /// Registers `casefold(text)`; SQLite's own `lower()` only folds ASCII.
    fn from_connection(conn: Connection) -> StoreResult<Self> {
        conn.create_scalar_function(
            "casefold",
            1,
            FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
            |ctx: &Context<'_>| {
                let text: Option<String> = ctx.get(0)?;
                Ok(text.map(|t| t.to_lowercase()))
            },
        )?;
        Ok(Self { conn })
    }

    fn check_schema(&self) -> StoreResult<()> {
        self.conn.prepare(&format!(
            "SELECT word, date, properties, English, Russian FROM {TABLE_NAME} LIMIT 0"
        ))?;
        Ok(())
    }

    fn init_schema(&self) -> StoreResult<()> {
        self.conn.execute_batch(&format!(
            "
            CREATE TABLE IF NOT EXISTS {TABLE_NAME} (
                word TEXT NOT NULL,
                date TEXT NOT NULL,
                properties TEXT,
                English TEXT,
                Russian TEXT
            );
            "
        ))?;
        Ok(())
    }

    fn edge_date(&self, direction: &str) -> StoreResult<Option<String>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT date FROM {TABLE_NAME} WHERE date != '' ORDER BY {DATE_KEY} {direction} LIMIT 1"
        ))?;
        let mut rows = stmt.query([])?;
        match rows.next()? {
            Some(row) => Ok(Some(row.get(0)?)),
            None => Ok(None),
        }
    }
}

impl RecordSource for SqliteRecordSource {
    fn load_all(&self) -> StoreResult<Vec<RawRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT word, date, properties, English, Russian FROM {TABLE_NAME}"
        ))?;

        let rows = stmt.query_map([], |row| {
            Ok(RawRecord {
                word: row.get(0)?,
                date: row.get(1)?,
                properties: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                english: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                russian: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
            })
        })?;

        let records = rows.collect::<Result<Vec<_>, _>>()?;
        debug!(rows = records.len(), "Loaded vocabulary rows");
        Ok(records)
    }

    fn distinct_dates(&self) -> StoreResult<Vec<String>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT DISTINCT date FROM {TABLE_NAME} WHERE date != '' ORDER BY {DATE_KEY}"
        ))?;
        let dates = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(dates)
    }

    fn first_date(&self) -> StoreResult<Option<String>> {
        self.edge_date("ASC")
    }

    fn last_date(&self) -> StoreResult<Option<String>> {
        self.edge_date("DESC")
    }

    fn contains_word(&self, fragment: &str) -> StoreResult<bool> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT 1 FROM {TABLE_NAME} WHERE instr(casefold(word), ?1) > 0 LIMIT 1"
        ))?;
        Ok(stmt.exists(params![fragment.to_lowercase()])?)
    }

    fn append(&self, record: &RawRecord) -> StoreResult<()> {
        if record.word.trim().is_empty() {
            return Err(StoreError::InvalidData("empty word".into()));
        }
        self.conn.execute(
            &format!(
                "INSERT INTO {TABLE_NAME} (word, date, properties, English, Russian) VALUES (?1, ?2, ?3, ?4, ?5)"
            ),
            params![
                record.word,
                record.date,
                record.properties,
                record.english,
                record.russian,
            ],
        )?;
        debug!(word = %record.word, date = %record.date, "Appended vocabulary row");
        Ok(())
    }
}
