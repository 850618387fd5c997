//! Input-format checks for date-keys and clock times.
//!
//! Ordering throughout the core is lexical, which only matches chronological
//! order for zero-padded `YYYY-MM-DD` and 24-hour `HH:MM` strings. Mutations
//! accept any text; these helpers let callers check input before dispatch.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// `chrono` format string for date-keys.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

static DATE_KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date-key regex"));
static CLOCK_TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[01]\d|2[0-3]):[0-5]\d$").expect("valid clock-time regex"));

/// Returns whether `value` is a fixed-width date-key naming a real day.
pub fn is_date_key(value: &str) -> bool {
    DATE_KEY_RE.is_match(value) && parse_date_key(value).is_some()
}

/// Returns whether `value` is a zero-padded 24-hour `HH:MM` time.
pub fn is_clock_time(value: &str) -> bool {
    CLOCK_TIME_RE.is_match(value)
}

/// Parses a date-key into a calendar date.
pub fn parse_date_key(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_KEY_FORMAT).ok()
}

/// Formats a calendar date as a date-key.
pub fn to_date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}
