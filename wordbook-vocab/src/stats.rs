//! Learning statistics over the in-memory entries.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use wordbook_store::RecordSource;
use wordbook_types::format_date;

use crate::{VocabResult, Vocabulary};

/// A day and how many entries were learned on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayInfo {
    pub date: NaiveDate,
    pub count: usize,
}

impl fmt::Display for DayInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} words)", format_date(self.date), self.count)
    }
}

/// Summary report of a vocabulary.
///
/// `would_be_total` is the total plus what the empty days would have added
/// at the average pace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub duration: i64,
    pub average: f64,
    pub empty_days: i64,
    pub total: usize,
    pub would_be_total: f64,
    pub max_day: Option<DayInfo>,
    pub min_day: Option<DayInfo>,
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let day = |info: Option<DayInfo>| info.map_or_else(|| "-".to_string(), |d| d.to_string());

        writeln!(f, "Duration: {} days", self.duration)?;
        writeln!(f, "Average amount of learned words: {:.2}", self.average)?;
        writeln!(f, "Empty days: {}", self.empty_days)?;
        writeln!(f, "Total: {}", self.total)?;
        writeln!(f, "Would be total: {:.2}", self.would_be_total)?;
        writeln!(f, "Max day: {}", day(self.max_day))?;
        write!(f, "Min day: {}", day(self.min_day))
    }
}

impl<S: RecordSource> Vocabulary<S> {
    /// Entries per learn date, counted over the in-memory entries (staged
    /// ones included).
    #[must_use]
    pub fn dynamic(&self) -> BTreeMap<NaiveDate, usize> {
        let mut counts = BTreeMap::new();
        for entry in self {
            *counts.entry(entry.date()).or_insert(0) += 1;
        }
        counts
    }

    /// The busiest day; the earliest one wins a tie.
    #[must_use]
    pub fn max_day_info(&self) -> Option<DayInfo> {
        self.extreme_day(|candidate, best| candidate > best)
    }

    /// The quietest active day; the earliest one wins a tie.
    #[must_use]
    pub fn min_day_info(&self) -> Option<DayInfo> {
        self.extreme_day(|candidate, best| candidate < best)
    }

    fn extreme_day(&self, beats: impl Fn(usize, usize) -> bool) -> Option<DayInfo> {
        let mut best: Option<DayInfo> = None;
        // ascending dates, so only a strict improvement replaces the leader
        for (date, count) in self.dynamic() {
            if best.is_none_or(|b| beats(count, b.count)) {
                best = Some(DayInfo { date, count });
            }
        }
        best
    }

    /// Mean entries per active day (days without entries are not counted).
    /// Zero for an empty vocabulary.
    #[must_use]
    pub fn avg_count_of_words(&self) -> f64 {
        let counts = self.dynamic();
        if counts.is_empty() {
            return 0.0;
        }
        let total: usize = counts.values().sum();
        total as f64 / counts.len() as f64
    }

    /// Days between `begin` and `end` on which nothing was stored.
    pub fn empty_days_count(&self) -> VocabResult<i64> {
        let active = self.date_list()?.len() as i64;
        Ok(self.duration()? - active)
    }

    /// Composes every statistic into one report.
    pub fn statistics(&self) -> VocabResult<Statistics> {
        let average = self.avg_count_of_words();
        let empty_days = self.empty_days_count()?;
        let total = self.len();

        Ok(Statistics {
            duration: self.duration()?,
            average,
            empty_days,
            total,
            would_be_total: total as f64 + average * empty_days as f64,
            max_day: self.max_day_info(),
            min_day: self.min_day_info(),
        })
    }
}
