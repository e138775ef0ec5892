//! The vocabulary aggregate.

use chrono::NaiveDate;
use std::collections::HashSet;
use std::fmt;
use std::ops::AddAssign;
use std::path::Path;
use tracing::{debug, info, warn};
use wordbook_store::{RecordSource, SqliteRecordSource};
use wordbook_types::{
    Entry, EntryKey, WordId, format_date, join_definitions, normalize, parse_date,
};

use crate::{DateQuery, VocabError, VocabResult, VocabularyConfig};

/// Every learned word of one user, held in load order.
pub struct Vocabulary<S = SqliteRecordSource> {
    source: S,
    entries: Vec<Entry>,
    config: VocabularyConfig,
}

impl Vocabulary<SqliteRecordSource> {
    /// Loads the vocabulary stored in a SQLite file.
    ///
    /// Fails with [`VocabError::NotFound`] if the file is missing and with
    /// [`VocabError::Backend`] if it cannot be queried.
    pub fn open(path: &Path) -> VocabResult<Self> {
        Self::open_with_config(path, VocabularyConfig::default())
    }

    pub fn open_with_config(path: &Path, config: VocabularyConfig) -> VocabResult<Self> {
        let source = SqliteRecordSource::open(path)?;
        let vocab = Self::from_source_with_config(source, config)?;
        info!(path = %path.display(), entries = vocab.len(), "Vocabulary loaded");
        Ok(vocab)
    }
}

impl<S: RecordSource> Vocabulary<S> {
    /// Loads every row of `source`, one entry per row.
    pub fn from_source(source: S) -> VocabResult<Self> {
        Self::from_source_with_config(source, VocabularyConfig::default())
    }

    /// Loads every row of `source` with explicit settings.
    ///
    /// Rows are not merged; the source is expected to hold deduplicated data.
    pub fn from_source_with_config(source: S, config: VocabularyConfig) -> VocabResult<Self> {
        let records = source.load_all()?;
        let mut entries = Vec::with_capacity(records.len());
        for record in &records {
            match Entry::from_record(record) {
                Ok(entry) => entries.push(entry),
                Err(e) => {
                    warn!(word = %record.word, error = %e, "Unreadable vocabulary row");
                    return Err(e.into());
                }
            }
        }
        debug!(entries = entries.len(), "Hydrated vocabulary entries");

        Ok(Self {
            source,
            entries,
            config,
        })
    }

    /// The loaded entries followed by any staged ones.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    #[must_use]
    pub fn config(&self) -> &VocabularyConfig {
        &self.config
    }

    /// Changes how many entries `Display` lists; 0 lists all.
    pub fn set_restrict_show(&mut self, limit: usize) {
        self.config.restrict_show = limit;
    }

    /// Number of in-memory entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    // ── Source-backed dates ──────────────────────────────────────

    /// The earliest stored date.
    pub fn begin(&self) -> VocabResult<NaiveDate> {
        let text = self
            .source
            .first_date()?
            .ok_or_else(|| VocabError::Range("vocabulary has no stored dates".into()))?;
        Ok(parse_date(&text)?)
    }

    /// The latest stored date.
    pub fn end(&self) -> VocabResult<NaiveDate> {
        let text = self
            .source
            .last_date()?
            .ok_or_else(|| VocabError::Range("vocabulary has no stored dates".into()))?;
        Ok(parse_date(&text)?)
    }

    /// Days from `begin` to `end`, both included.
    pub fn duration(&self) -> VocabResult<i64> {
        Ok((self.end()? - self.begin()?).num_days() + 1)
    }

    /// Distinct stored dates, earliest first.
    pub fn date_list(&self) -> VocabResult<Vec<NaiveDate>> {
        self.source
            .distinct_dates()?
            .iter()
            .map(|text| parse_date(text).map_err(VocabError::from))
            .collect()
    }

    /// `begin-end` in `dd.mm.yyyy` form; the default export artifact name.
    pub fn date_span(&self) -> VocabResult<String> {
        Ok(format!(
            "{}-{}",
            format_date(self.begin()?),
            format_date(self.end()?)
        ))
    }

    /// Whether the record source holds a word containing the normalized key.
    ///
    /// Staged entries are not visible here until they are persisted.
    pub fn contains_word<'a>(&self, key: impl Into<EntryKey<'a>>) -> VocabResult<bool> {
        let fragment = key.into().normalized();
        Ok(self.source.contains_word(&fragment)?)
    }

    // ── Date indexing ────────────────────────────────────────────

    /// Entries learned on `date`.
    #[must_use]
    pub fn at(&self, date: NaiveDate) -> Vec<&Entry> {
        self.entries.iter().filter(|e| e.date() == date).collect()
    }

    /// Entries on a day or inside an inclusive range.
    ///
    /// Open range bounds default to [`Self::begin`] and [`Self::end`]; a
    /// start after the stop is a [`VocabError::Range`].
    pub fn get(&self, query: impl Into<DateQuery>) -> VocabResult<Vec<&Entry>> {
        let (start, stop) = match query.into() {
            DateQuery::Day(date) => return Ok(self.at(date)),
            DateQuery::Range { start, stop } => (start, stop),
        };

        let start = match start {
            Some(date) => date,
            None => self.begin()?,
        };
        let stop = match stop {
            Some(date) => date,
            None => self.end()?,
        };
        if start > stop {
            return Err(VocabError::Range(format!(
                "start {} is after stop {}",
                format_date(start),
                format_date(stop)
            )));
        }

        Ok(self
            .entries
            .iter()
            .filter(|e| (start..=stop).contains(&e.date()))
            .collect())
    }

    /// Entries from the active day `days_count` days before the last one.
    ///
    /// `0` is the last stored day. Asking further back than the history goes
    /// is a [`VocabError::Range`].
    pub fn item_before_now(&self, days_count: usize) -> VocabResult<Vec<&Entry>> {
        let dates = self.date_list()?;
        let index = dates
            .len()
            .checked_sub(days_count)
            .and_then(|n| n.checked_sub(1))
            .ok_or_else(|| VocabError::Range(format!("no active day {days_count} days back")))?;
        Ok(self.at(dates[index]))
    }

    // ── Search ───────────────────────────────────────────────────

    /// Entries whose word contains the normalized key or is contained in it.
    #[must_use]
    pub fn search<'a>(&self, key: impl Into<EntryKey<'a>>) -> Vec<&Entry> {
        let item = key.into().normalized();
        self.entries
            .iter()
            .filter(|e| e.word().contains(item.as_str()) || item.contains(e.word()))
            .collect()
    }

    /// Entries carrying every one of `properties`.
    #[must_use]
    pub fn search_by_properties<I, T>(&self, properties: I) -> Vec<&Entry>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let wanted: Vec<String> = properties
            .into_iter()
            .map(|p| normalize(p.as_ref()))
            .collect();
        self.entries.iter().filter(|e| e.is_fit(&wanted)).collect()
    }

    /// Entries whose id is one of `ids`.
    #[must_use]
    pub fn search_by_id(&self, ids: &[WordId]) -> Vec<&Entry> {
        let ids: HashSet<&WordId> = ids.iter().collect();
        self.entries.iter().filter(|e| ids.contains(e.id())).collect()
    }

    // ── Projections ──────────────────────────────────────────────

    /// A sorted copy of every entry.
    #[must_use]
    pub fn all_words(&self, reverse: bool) -> Vec<Entry> {
        let mut words = self.entries.clone();
        if reverse {
            words.sort_by(|a, b| b.cmp(a));
        } else {
            words.sort();
        }
        words
    }

    /// Every headword, in entry order.
    #[must_use]
    pub fn how_to_say_in_russian(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.word().to_string()).collect()
    }

    /// Every entry's English definitions joined with `"; "`.
    #[must_use]
    pub fn how_to_say_in_english(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|e| join_definitions(e.english()))
            .collect()
    }

    // ── Staging ──────────────────────────────────────────────────

    /// Stages an entry in memory. Nothing is written to the source; use
    /// [`Extend`] or `+=` for several at once.
    pub fn append(&mut self, entry: Entry) {
        debug!(word = %entry.word(), "Staged entry");
        self.entries.push(entry);
    }

    /// The entries followed by `others`, leaving the vocabulary untouched.
    #[must_use]
    pub fn concat<I: IntoIterator<Item = Entry>>(&self, others: I) -> Vec<Entry> {
        self.entries.iter().cloned().chain(others).collect()
    }
}

impl<S: RecordSource> Extend<Entry> for Vocabulary<S> {
    /// Stages several entries in memory.
    fn extend<I: IntoIterator<Item = Entry>>(&mut self, entries: I) {
        let before = self.entries.len();
        self.entries.extend(entries);
        debug!(staged = self.entries.len() - before, "Staged entries");
    }
}

impl<S: RecordSource> AddAssign<Entry> for Vocabulary<S> {
    fn add_assign(&mut self, entry: Entry) {
        self.append(entry);
    }
}

impl<S: RecordSource> AddAssign<Vec<Entry>> for Vocabulary<S> {
    fn add_assign(&mut self, entries: Vec<Entry>) {
        self.extend(entries);
    }
}

impl<'a, S> IntoIterator for &'a Vocabulary<S> {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<S: RecordSource> fmt::Display for Vocabulary<S> {
    /// The statistics report, a blank line, then up to `restrict_show`
    /// entries with a trailing `...` when the list was cut.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.statistics() {
            Ok(stats) => write!(f, "{stats}")?,
            Err(e) => write!(f, "Statistics unavailable: {e}")?,
        }
        f.write_str("\n\n")?;

        let limit = match self.config.restrict_show {
            0 => self.entries.len(),
            n => n.min(self.entries.len()),
        };
        let lines: Vec<String> = self.entries[..limit].iter().map(Entry::to_string).collect();
        f.write_str(&lines.join("\n"))?;
        if limit < self.entries.len() {
            f.write_str("\n...")?;
        }
        Ok(())
    }
}
