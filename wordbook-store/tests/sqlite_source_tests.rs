use pretty_assertions::assert_eq;
use wordbook_store::{RecordSource, SqliteRecordSource, StoreError};
use wordbook_types::RawRecord;

fn record(word: &str, date: &str) -> RawRecord {
    RawRecord {
        word: word.into(),
        date: date.into(),
        properties: "[]".into(),
        english: String::new(),
        russian: String::new(),
    }
}

fn seeded() -> SqliteRecordSource {
    let source = SqliteRecordSource::open_in_memory().unwrap();
    for (word, date) in [
        ("cat", "03.01.2024"),
        ("dog", "01.01.2024"),
        ("owl", "28.12.2023"),
        ("bat", "03.01.2024"),
    ] {
        source.append(&record(word, date)).unwrap();
    }
    source
}

// ── Opening ──────────────────────────────────────────────────────

#[test]
fn open_missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.db");
    let result = SqliteRecordSource::open(&path);
    assert!(matches!(result, Err(StoreError::NotFound(_))));
}

#[test]
fn create_then_reopen_keeps_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vocab.db");

    let source = SqliteRecordSource::create(&path).unwrap();
    source.append(&record("cat", "01.01.2024")).unwrap();
    drop(source);

    let reopened = SqliteRecordSource::open(&path).unwrap();
    assert_eq!(reopened.load_all().unwrap().len(), 1);
}

#[test]
fn open_garbage_file_is_database_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.db");
    std::fs::write(&path, b"definitely not a sqlite database, just some bytes").unwrap();
    assert!(matches!(
        SqliteRecordSource::open(&path),
        Err(StoreError::Database(_))
    ));
}

// ── Loading ──────────────────────────────────────────────────────

#[test]
fn load_all_returns_fields() {
    let source = SqliteRecordSource::open_in_memory().unwrap();
    let row = RawRecord {
        word: "cat".into(),
        date: "01.01.2024".into(),
        properties: "[informal]".into(),
        english: "feline; guy".into(),
        russian: "кот".into(),
    };
    source.append(&row).unwrap();
    assert_eq!(source.load_all().unwrap(), vec![row]);
}

#[test]
fn load_all_empty() {
    let source = SqliteRecordSource::open_in_memory().unwrap();
    assert!(source.load_all().unwrap().is_empty());
}

#[test]
fn append_rejects_empty_word() {
    let source = SqliteRecordSource::open_in_memory().unwrap();
    assert!(matches!(
        source.append(&record("  ", "01.01.2024")),
        Err(StoreError::InvalidData(_))
    ));
}

#[test]
fn open_foreign_database_is_database_error_and_leaves_it_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.db");
    let conn = rusqlite::Connection::open(&path).unwrap();
    conn.execute_batch("CREATE TABLE notes (body TEXT);").unwrap();
    drop(conn);

    assert!(matches!(
        SqliteRecordSource::open(&path),
        Err(StoreError::Database(_))
    ));

    let conn = rusqlite::Connection::open(&path).unwrap();
    let tables: i64 = conn
        .query_row("SELECT count(*) FROM sqlite_master WHERE type = 'table'", [], |r| r.get(0))
        .unwrap();
    assert_eq!(tables, 1);
}

// ── Dates ────────────────────────────────────────────────────────

#[test]
fn first_and_last_date_are_chronological() {
    let source = seeded();
    // lexicographic text order would pick 01.01.2024 and 28.12.2023
    assert_eq!(source.first_date().unwrap().as_deref(), Some("28.12.2023"));
    assert_eq!(source.last_date().unwrap().as_deref(), Some("03.01.2024"));
}

#[test]
fn edge_dates_of_empty_source() {
    let source = SqliteRecordSource::open_in_memory().unwrap();
    assert_eq!(source.first_date().unwrap(), None);
    assert_eq!(source.last_date().unwrap(), None);
}

#[test]
fn distinct_dates_sorted() {
    let source = seeded();
    assert_eq!(
        source.distinct_dates().unwrap(),
        vec!["28.12.2023", "01.01.2024", "03.01.2024"]
    );
}

// ── Existence ────────────────────────────────────────────────────

#[test]
fn contains_word_is_substring_match() {
    let source = seeded();
    assert!(source.contains_word("ca").unwrap());
    assert!(source.contains_word("owl").unwrap());
    assert!(!source.contains_word("cats").unwrap());
}

#[test]
fn contains_word_treats_wildcards_literally() {
    let source = seeded();
    assert!(!source.contains_word("%").unwrap());
    assert!(!source.contains_word("c_t").unwrap());
}

#[test]
fn contains_word_resists_injection() {
    let source = seeded();
    assert!(!source.contains_word("' OR '1'='1").unwrap());
    assert_eq!(source.load_all().unwrap().len(), 4);
}

#[test]
fn contains_word_ignores_case_on_both_sides() {
    let source = SqliteRecordSource::open_in_memory().unwrap();
    source.append(&record("Cat", "01.01.2024")).unwrap();
    source.append(&record("Ёжик", "01.01.2024")).unwrap();

    assert!(source.contains_word("cat").unwrap());
    assert!(source.contains_word("CA").unwrap());
    assert!(source.contains_word("ёж").unwrap());
    assert!(!source.contains_word("dog").unwrap());
}
