//! Date selectors for [`crate::Vocabulary::get`].

use chrono::NaiveDate;
use std::ops::{RangeFrom, RangeFull, RangeInclusive, RangeToInclusive};

/// A single day or an inclusive date range.
///
/// Missing range bounds default to the vocabulary's first and last stored
/// dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateQuery {
    Day(NaiveDate),
    Range {
        start: Option<NaiveDate>,
        stop: Option<NaiveDate>,
    },
}

impl From<NaiveDate> for DateQuery {
    fn from(date: NaiveDate) -> Self {
        DateQuery::Day(date)
    }
}

impl From<RangeInclusive<NaiveDate>> for DateQuery {
    fn from(range: RangeInclusive<NaiveDate>) -> Self {
        let (start, stop) = range.into_inner();
        DateQuery::Range {
            start: Some(start),
            stop: Some(stop),
        }
    }
}

impl From<RangeFrom<NaiveDate>> for DateQuery {
    fn from(range: RangeFrom<NaiveDate>) -> Self {
        DateQuery::Range {
            start: Some(range.start),
            stop: None,
        }
    }
}

impl From<RangeToInclusive<NaiveDate>> for DateQuery {
    fn from(range: RangeToInclusive<NaiveDate>) -> Self {
        DateQuery::Range {
            start: None,
            stop: Some(range.end),
        }
    }
}

impl From<RangeFull> for DateQuery {
    fn from(_: RangeFull) -> Self {
        DateQuery::Range {
            start: None,
            stop: None,
        }
    }
}
