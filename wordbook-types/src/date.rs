//! Calendar date helpers.
//!
//! Dates are stored as `dd.mm.yyyy` text and handled in memory as
//! [`NaiveDate`] values.

use chrono::NaiveDate;

use crate::{Error, Result};

/// Textual format of every stored date (zero-padded day.month.year).
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Parses a stored `dd.mm.yyyy` date.
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
        .map_err(|_| Error::InvalidDate(text.to_string()))
}

/// Formats a date as `dd.mm.yyyy`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Today's date in the local time zone.
#[must_use]
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
