//! A single learned word.
//!
//! An [`Entry`] keeps its headword normalized at all times and derives its
//! [`WordId`] from it. Two entries are equal when both the word and the
//! property set match; comparing against a raw string only looks at the word.
//!
//! Ordering is lexicographic on the word. Entries sharing a word but
//! differing in properties are ordered by their sorted property lists, so
//! exactly one of `<`, `==`, `>` holds for any pair.

use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::date::{format_date, parse_date, today};
use crate::ids::WordId;
use crate::normalize::{capitalize, normalize};
use crate::record::{
    RawRecord, format_properties, join_definitions, parse_definitions, parse_properties,
};
use crate::{Error, Result};

/// One learned vocabulary item.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    word: String,
    id: WordId,
    date: NaiveDate,
    properties: BTreeSet<String>,
    english: Vec<String>,
    russian: Vec<String>,
}

impl Entry {
    /// Creates an entry for `word` learned today, with no properties or
    /// definitions.
    #[must_use]
    pub fn new(word: &str) -> Self {
        let word = normalize(word);
        Self {
            id: WordId::derive(&word),
            word,
            date: today(),
            properties: BTreeSet::new(),
            english: Vec::new(),
            russian: Vec::new(),
        }
    }

    /// The empty sentinel used to seed a fold over [`Entry::combine`].
    #[must_use]
    pub fn empty() -> Self {
        Self::new("")
    }

    /// Sets the learn date.
    #[must_use]
    pub fn learned_on(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Adds properties; each is normalized and blank ones are dropped.
    #[must_use]
    pub fn with_properties<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.properties.extend(
            properties
                .into_iter()
                .map(|p| normalize(p.as_ref()))
                .filter(|p| !p.is_empty()),
        );
        self
    }

    /// Appends English definitions.
    #[must_use]
    pub fn with_english<I, S>(mut self, defs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.english.extend(defs.into_iter().map(Into::into));
        self
    }

    /// Appends Russian definitions.
    #[must_use]
    pub fn with_russian<I, S>(mut self, defs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.russian.extend(defs.into_iter().map(Into::into));
        self
    }

    /// Hydrates an entry from a stored row.
    ///
    /// An empty date field means "learned today".
    pub fn from_record(record: &RawRecord) -> Result<Self> {
        let date = if record.date.trim().is_empty() {
            today()
        } else {
            parse_date(&record.date)?
        };

        Ok(Self::new(&record.word)
            .learned_on(date)
            .with_properties(parse_properties(&record.properties))
            .with_english(parse_definitions(&record.english))
            .with_russian(parse_definitions(&record.russian)))
    }

    /// Serializes the entry into the stored row shape.
    #[must_use]
    pub fn to_record(&self) -> RawRecord {
        RawRecord {
            word: self.word.clone(),
            date: format_date(self.date),
            properties: format_properties(&self.properties),
            english: join_definitions(&self.english),
            russian: join_definitions(&self.russian),
        }
    }

    /// Returns the normalized headword.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Replaces the headword, re-deriving the id.
    pub fn set_word(&mut self, word: &str) {
        self.word = normalize(word);
        self.id = WordId::derive(&self.word);
    }

    #[must_use]
    pub fn id(&self) -> &WordId {
        &self.id
    }

    /// Returns the date the word was learned.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn properties(&self) -> &BTreeSet<String> {
        &self.properties
    }

    #[must_use]
    pub fn english(&self) -> &[String] {
        &self.english
    }

    #[must_use]
    pub fn russian(&self) -> &[String] {
        &self.russian
    }

    /// Number of characters in the headword.
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    /// True for the empty sentinel (an absent word).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Iterates over the characters of the headword.
    pub fn chars(&self) -> std::str::Chars<'_> {
        self.word.chars()
    }

    /// Merges two entries for the same word into a new one.
    ///
    /// Either side may be the empty sentinel. The result keeps the greater of
    /// the two words, the earlier date and the union of properties; its
    /// definitions are `other`'s followed by `self`'s.
    pub fn combine(&self, other: &Entry) -> Result<Entry> {
        if !self.is_empty() && !other.is_empty() && self.word != other.word {
            return Err(Error::DomainConflict {
                left: self.word.clone(),
                right: other.word.clone(),
            });
        }

        // the sentinel contributes nothing, including its date
        let date = match (self.is_empty(), other.is_empty()) {
            (true, false) => other.date,
            (false, true) => self.date,
            _ => self.date.min(other.date),
        };
        let word = self.word.as_str().max(other.word.as_str()).to_string();

        Ok(Entry {
            id: WordId::derive(&word),
            word,
            date,
            properties: self.properties.union(&other.properties).cloned().collect(),
            english: other.english.iter().chain(&self.english).cloned().collect(),
            russian: other.russian.iter().chain(&self.russian).cloned().collect(),
        })
    }

    /// Whether every requested property (case-folded) is present.
    #[must_use]
    pub fn is_fit<I, S>(&self, properties: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        properties
            .into_iter()
            .all(|prop| self.properties.contains(&normalize(prop.as_ref())))
    }

    /// Whether the normalized `item` occurs in the word or in any
    /// definition.
    #[must_use]
    pub fn contains(&self, item: &str) -> bool {
        let item = normalize(item);
        std::iter::once(&self.word)
            .chain(&self.english)
            .chain(&self.russian)
            .any(|text| text.contains(item.as_str()))
    }

    /// Equality against a word or another entry.
    #[must_use]
    pub fn equals<'a>(&self, key: impl Into<EntryKey<'a>>) -> bool {
        match key.into() {
            EntryKey::Word(word) => self.word == word.trim(),
            EntryKey::Entry(entry) => self == entry,
        }
    }

    /// Ordering against a word or another entry.
    #[must_use]
    pub fn compare_to<'a>(&self, key: impl Into<EntryKey<'a>>) -> Ordering {
        match key.into() {
            EntryKey::Word(word) => self.word.as_str().cmp(word.trim()),
            EntryKey::Entry(entry) => self.cmp(entry),
        }
    }

    /// `Word – english defs`.
    #[must_use]
    pub fn format_english(&self) -> String {
        format!("{} – {}", capitalize(&self.word), join_definitions(&self.english))
    }

    /// `Word – russian defs`.
    #[must_use]
    pub fn format_russian(&self) -> String {
        format!("{} – {}", capitalize(&self.word), join_definitions(&self.russian))
    }

    /// Multi-line field dump.
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "Word: {}\nProperties: {}\nEnglish: {:?}\nRussian: {:?}",
            self.word,
            format_properties(&self.properties),
            self.english,
            self.russian
        )
    }
}

impl Default for Entry {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.word == other.word && self.properties == other.properties
    }
}

impl Eq for Entry {}

impl PartialEq<str> for Entry {
    fn eq(&self, other: &str) -> bool {
        self.word == other.trim()
    }
}

impl PartialEq<&str> for Entry {
    fn eq(&self, other: &&str) -> bool {
        self.word == other.trim()
    }
}

impl PartialOrd<str> for Entry {
    fn partial_cmp(&self, other: &str) -> Option<Ordering> {
        Some(self.word.as_str().cmp(other.trim()))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.word.cmp(&other.word) {
            Ordering::Equal => self.properties.cmp(&other.properties),
            other => other,
        }
    }
}

impl Hash for Entry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.word.hash(state);
        self.properties.hash(state);
    }
}

impl fmt::Display for Entry {
    /// `Word [props] – english\trussian`; the property block and the tab
    /// only appear when there is something to separate.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", capitalize(&self.word))?;
        if !self.properties.is_empty() {
            write!(f, " {}", format_properties(&self.properties))?;
        }
        f.write_str(" – ")?;
        f.write_str(&join_definitions(&self.english))?;
        if !self.english.is_empty() && !self.russian.is_empty() {
            f.write_str("\t")?;
        }
        f.write_str(&join_definitions(&self.russian))
    }
}

/// Something an entry can be compared or searched against: a raw word or
/// another entry.
#[derive(Debug, Clone, Copy)]
pub enum EntryKey<'a> {
    Word(&'a str),
    Entry(&'a Entry),
}

impl EntryKey<'_> {
    /// The normalized word this key stands for.
    #[must_use]
    pub fn normalized(&self) -> String {
        match self {
            EntryKey::Word(word) => normalize(word),
            EntryKey::Entry(entry) => entry.word.clone(),
        }
    }
}

impl<'a> From<&'a str> for EntryKey<'a> {
    fn from(word: &'a str) -> Self {
        EntryKey::Word(word)
    }
}

impl<'a> From<&'a String> for EntryKey<'a> {
    fn from(word: &'a String) -> Self {
        EntryKey::Word(word.as_str())
    }
}

impl<'a> From<&'a Entry> for EntryKey<'a> {
    fn from(entry: &'a Entry) -> Self {
        EntryKey::Entry(entry)
    }
}
