//! Vocabulary settings, loadable from TOML.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{VocabError, VocabResult};

/// Presentation and export settings of a [`crate::Vocabulary`].
///
/// ```toml
/// restrict_show = 20
/// export_dir = "out"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    /// How many entries the `Display` rendering lists; 0 lists all of them.
    pub restrict_show: usize,
    pub chart_title: String,
    pub x_axis_name: String,
    pub y_axis_name: String,
    /// Directory export artifacts are written into.
    pub export_dir: PathBuf,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            restrict_show: 50,
            chart_title: "Words learning dynamic".into(),
            x_axis_name: "Days".into(),
            y_axis_name: "Amount of words".into(),
            export_dir: PathBuf::from("exports"),
        }
    }
}

impl VocabularyConfig {
    /// Parses a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> VocabResult<Self> {
        toml::from_str(text).map_err(|e| VocabError::Config(e.to_string()))
    }

    /// Reads and parses a TOML file.
    pub fn from_toml_file(path: &Path) -> VocabResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
