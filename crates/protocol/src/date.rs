//! Date parsing and long-form formatting.
//!
//! Record dates arrive as date-like strings. This module turns them into
//! UTC timestamps and renders them as long calendar dates in the en-US
//! style (`January 15, 2024`).
//!
//! # Accepted Inputs
//!
//! | Layout | Example | Interpretation |
//! |--------|---------|----------------|
//! | RFC 3339 | `2024-01-15T10:30:00.000Z` | As given |
//! | Naive date-time | `2024-01-15T10:30:00`, `2024-01-15 10:30` | UTC |
//! | Bare date | `2024-01-15` | UTC midnight |
//!
//! Anything else is rejected by [`parse_date`] and rendered as
//! [`INVALID_DATE`] by [`format_date`].

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::{DateParseError, Result};

/// Placeholder rendered in place of a date that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid date";

/// Long calendar date layout, e.g. `January 15, 2024`.
const LONG_DATE_FORMAT: &str = "%B %-d, %Y";

/// Naive date-time layouts, tried in order. `%.f` also matches no fraction.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parses a date-like string into a UTC timestamp.
///
/// # Errors
///
/// Returns [`DateParseError::Empty`] for blank input and
/// [`DateParseError::Unrecognized`] when no accepted layout matches.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use wcard_protocol::parse_date;
///
/// let parsed = parse_date("2024-01-15").unwrap();
/// assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap());
///
/// assert!(parse_date("not a date").is_err());
/// ```
pub fn parse_date(input: &str) -> Result<DateTime<Utc>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DateParseError::Empty);
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| DateParseError::Unrecognized(trimmed.to_string()))
}

/// Formats a date-like string as a long calendar date.
///
/// Unparseable input yields [`INVALID_DATE`] rather than an error, so a
/// malformed record still renders.
///
/// # Examples
///
/// ```
/// use wcard_protocol::{INVALID_DATE, format_date};
///
/// assert_eq!(format_date("2024-01-15"), "January 15, 2024");
/// assert_eq!(format_date("2026-01-05T08:00:00Z"), "January 5, 2026");
/// assert_eq!(format_date("soon"), INVALID_DATE);
/// ```
#[must_use]
pub fn format_date(input: &str) -> String {
    match parse_date(input) {
        Ok(parsed) => format_datetime(parsed),
        Err(_) => INVALID_DATE.to_string(),
    }
}

/// Formats an already-parsed timestamp as a long calendar date.
#[must_use]
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.format(LONG_DATE_FORMAT).to_string()
}
