mod common;

use common::{three_day_vocab, ymd};
use pretty_assertions::assert_eq;
use wordbook_vocab::{JsonExporter, VocabularyConfig};

// ── Payloads ─────────────────────────────────────────────────────

#[test]
fn chart_data_uses_config_labels_and_span() {
    let vocab = three_day_vocab();
    let chart = vocab.chart_data().unwrap();

    assert_eq!(chart.name, "info_01.01.2024-03.01.2024");
    assert_eq!(chart.title, "Words learning dynamic");
    assert_eq!(chart.x_axis, "Days");
    assert_eq!(chart.y_axis, "Amount of words");
    assert_eq!(chart.points.get(&ymd(2024, 1, 1)), Some(&2));
}

#[test]
fn document_data_is_sorted_and_named_by_span() {
    let vocab = three_day_vocab();
    let doc = vocab.document_data().unwrap();

    assert_eq!(doc.header, "01.01.2024-03.01.2024");
    assert_eq!(doc.name, doc.header);
    let words: Vec<&str> = doc.entries.iter().map(|e| e.word()).collect();
    assert_eq!(words, vec!["cat", "dog", "owl"]);
}

// ── JSON exporter ────────────────────────────────────────────────

#[test]
fn json_exporter_writes_files() {
    let dir = tempfile::tempdir().unwrap();
    let exporter = JsonExporter::new(dir.path().join("out"));
    let vocab = three_day_vocab();

    let chart_path = vocab.export_chart(&exporter).unwrap();
    assert!(chart_path.ends_with("info_01.01.2024-03.01.2024.json"));
    let chart: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&chart_path).unwrap()).unwrap();
    assert_eq!(chart["points"]["2024-01-01"], 2);
    assert_eq!(chart["title"], "Words learning dynamic");

    let doc_path = vocab.export_document(&exporter).unwrap();
    let doc: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&doc_path).unwrap()).unwrap();
    assert_eq!(doc["entries"].as_array().unwrap().len(), 3);
    assert_eq!(doc["entries"][0]["word"], "cat");
}

// ── Config ───────────────────────────────────────────────────────

#[test]
fn config_defaults() {
    let config = VocabularyConfig::default();
    assert_eq!(config.restrict_show, 50);
    assert_eq!(config.export_dir, std::path::PathBuf::from("exports"));
}

#[test]
fn config_from_toml_keeps_missing_defaults() {
    let config = VocabularyConfig::from_toml_str(
        r#"
        restrict_show = 5
        chart_title = "Progress"
        "#,
    )
    .unwrap();
    assert_eq!(config.restrict_show, 5);
    assert_eq!(config.chart_title, "Progress");
    assert_eq!(config.x_axis_name, "Days");
}

#[test]
fn config_from_toml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wordbook.toml");
    std::fs::write(&path, "export_dir = \"artifacts\"\n").unwrap();
    let config = VocabularyConfig::from_toml_file(&path).unwrap();
    assert_eq!(config.export_dir, std::path::PathBuf::from("artifacts"));
}

#[test]
fn config_rejects_bad_types() {
    let err = VocabularyConfig::from_toml_str("restrict_show = \"many\"").unwrap_err();
    assert!(err.to_string().starts_with("config error"));
}
