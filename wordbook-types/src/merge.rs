//! Batch deduplication by combine.

use crate::{Entry, Result};

/// Collapses entries sharing a (word, properties) key into one entry each.
///
/// Entries are sorted by word, grouped by key and every group is left-folded
/// with [`Entry::combine`] starting from [`Entry::empty`]. Within a group the
/// earliest date wins and the definitions of later entries come first.
/// Empty entries are dropped.
pub fn merge_duplicates<I>(entries: I) -> Result<Vec<Entry>>
where
    I: IntoIterator<Item = Entry>,
{
    let mut sorted: Vec<Entry> = entries.into_iter().filter(|e| !e.is_empty()).collect();
    // stable: input order is kept inside each group
    sorted.sort();

    sorted
        .chunk_by(|a, b| a == b)
        .map(|group| {
            group
                .iter()
                .try_fold(Entry::empty(), |acc, entry| acc.combine(entry))
        })
        .collect()
}
