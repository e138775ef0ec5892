//! Payloads handed to export collaborators.
//!
//! Rendering spreadsheets, documents or PDFs happens elsewhere; this module
//! only assembles what such a renderer consumes and ships a JSON writer.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use tracing::info;
use wordbook_store::RecordSource;
use wordbook_types::Entry;

use crate::{VocabResult, Vocabulary};

/// Learning dynamic chart: one point per active day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    /// Artifact name, `info_<date span>`.
    pub name: String,
    pub title: String,
    pub x_axis: String,
    pub y_axis: String,
    pub points: BTreeMap<NaiveDate, usize>,
}

/// Word list document, alphabetically sorted.
///
/// The same payload feeds both the document renderer and the print-formatted
/// (PDF) renderer; they differ only in layout.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentData {
    pub name: String,
    pub header: String,
    pub entries: Vec<Entry>,
}

/// Something that turns export payloads into artifacts.
pub trait Exporter {
    /// Writes the chart and returns where it went.
    fn export_chart(&self, chart: &ChartData) -> VocabResult<PathBuf>;

    /// Writes the document and returns where it went.
    fn export_document(&self, document: &DocumentData) -> VocabResult<PathBuf>;
}

/// Writes payloads as pretty-printed JSON files.
#[derive(Debug, Clone)]
pub struct JsonExporter {
    out_dir: PathBuf,
}

impl JsonExporter {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    fn write<T: Serialize>(&self, name: &str, value: &T) -> VocabResult<PathBuf> {
        fs::create_dir_all(&self.out_dir)?;
        let path = self.out_dir.join(format!("{name}.json"));
        fs::write(&path, serde_json::to_string_pretty(value)?)?;
        info!(path = %path.display(), "Export written");
        Ok(path)
    }
}

impl Exporter for JsonExporter {
    fn export_chart(&self, chart: &ChartData) -> VocabResult<PathBuf> {
        self.write(&chart.name, chart)
    }

    fn export_document(&self, document: &DocumentData) -> VocabResult<PathBuf> {
        self.write(&document.name, document)
    }
}

impl<S: RecordSource> Vocabulary<S> {
    /// The learning dynamic with the configured labels.
    pub fn chart_data(&self) -> VocabResult<ChartData> {
        let config = self.config();
        Ok(ChartData {
            name: format!("info_{}", self.date_span()?),
            title: config.chart_title.clone(),
            x_axis: config.x_axis_name.clone(),
            y_axis: config.y_axis_name.clone(),
            points: self.dynamic(),
        })
    }

    /// Every entry sorted, headed and named by the date span.
    pub fn document_data(&self) -> VocabResult<DocumentData> {
        let span = self.date_span()?;
        Ok(DocumentData {
            name: span.clone(),
            header: span,
            entries: self.all_words(false),
        })
    }

    pub fn export_chart(&self, exporter: &impl Exporter) -> VocabResult<PathBuf> {
        exporter.export_chart(&self.chart_data()?)
    }

    pub fn export_document(&self, exporter: &impl Exporter) -> VocabResult<PathBuf> {
        exporter.export_document(&self.document_data()?)
    }
}
