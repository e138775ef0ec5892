//! Textual row codec shared with record sources.
//!
//! A stored row keeps every field as text:
//! - properties as a bracketed, comma-separated list: `[b1, informal]`
//! - definitions joined with `"; "`
//! - the learn date as `dd.mm.yyyy`

use serde::{Deserialize, Serialize};

use crate::normalize::normalize;

/// Separator between definitions inside a stored field.
pub const DEFINITION_SEPARATOR: &str = "; ";

/// One row as yielded by (or appended to) a record source.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawRecord {
    pub word: String,
    pub date: String,
    pub properties: String,
    pub english: String,
    pub russian: String,
}

/// Parses a `[p1, p2, ...]` field into normalized, non-empty properties.
#[must_use]
pub fn parse_properties(field: &str) -> Vec<String> {
    let inner = field.trim();
    let inner = inner.strip_prefix('[').unwrap_or(inner);
    let inner = inner.strip_suffix(']').unwrap_or(inner);

    inner
        .split(',')
        .map(normalize)
        .filter(|prop| !prop.is_empty())
        .collect()
}

/// Serializes properties as `[p1, p2, ...]`.
#[must_use]
pub fn format_properties<I, S>(properties: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined: Vec<String> = properties
        .into_iter()
        .map(|p| p.as_ref().to_string())
        .collect();
    format!("[{}]", joined.join(", "))
}

/// Splits a field written by [`join_definitions`]. A bare `;` stays inside
/// its definition. An empty field has no definitions.
#[must_use]
pub fn parse_definitions(field: &str) -> Vec<String> {
    field
        .split(DEFINITION_SEPARATOR)
        .map(str::trim)
        .filter(|def| !def.is_empty())
        .map(str::to_string)
        .collect()
}

/// Joins definitions with [`DEFINITION_SEPARATOR`].
#[must_use]
pub fn join_definitions(defs: &[String]) -> String {
    defs.join(DEFINITION_SEPARATOR)
}
