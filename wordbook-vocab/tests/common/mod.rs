//! Shared helpers for vocabulary tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use wordbook_store::{RecordSource, SqliteRecordSource};
use wordbook_types::RawRecord;
use wordbook_vocab::Vocabulary;

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A stored row with the given word, `dd.mm.yyyy` date and properties field.
pub fn row(word: &str, date: &str, properties: &str) -> RawRecord {
    RawRecord {
        word: word.into(),
        date: date.into(),
        properties: properties.into(),
        english: format!("{word} in english"),
        russian: String::new(),
    }
}

/// In-memory source holding `rows`.
pub fn source_with(rows: &[RawRecord]) -> SqliteRecordSource {
    let source = SqliteRecordSource::open_in_memory().unwrap();
    for r in rows {
        source.append(r).unwrap();
    }
    source
}

/// Two words on 01.01.2024 and one on 03.01.2024.
pub fn three_day_vocab() -> Vocabulary {
    Vocabulary::from_source(source_with(&[
        row("cat", "01.01.2024", "[informal]"),
        row("dog", "01.01.2024", "[b1, informal]"),
        row("owl", "03.01.2024", "[]"),
    ]))
    .unwrap()
}
