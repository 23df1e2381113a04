// Date utility functions
// Day-granularity helpers shared by the timeline services

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use thiserror::Error;

/// Wire format used for drop targets and imported timeline items.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// A date string that is not a valid `yyyy-MM-dd` calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid date '{input}', expected yyyy-MM-dd")]
pub struct DateParseError {
    pub input: String,
}

/// Parse an ISO-8601 calendar date (`yyyy-MM-dd`).
///
/// A trailing time component (`2021-01-15T10:00:00`) is accepted and
/// discarded, so only the day ever takes part in comparisons.
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, DateParseError> {
    let trimmed = value.trim();
    let date_part = trimmed.split_once('T').map_or(trimmed, |(date, _)| date);

    NaiveDate::parse_from_str(date_part, ISO_DATE_FORMAT).map_err(|_| DateParseError {
        input: value.to_string(),
    })
}

pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Signed whole days from `from` to `to`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// `date` moved by `days`, or `None` past the representable calendar.
pub fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::try_days(days)?)
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
