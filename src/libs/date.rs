//! Calendar-date helpers.
//!
//! Tasks carry their due date as a `YYYY-MM-DD` string. The fixed-width,
//! zero-padded form is what makes plain string comparison order dates
//! correctly, so everything entering a [`Task`](super::task::Task) goes
//! through [`normalize_due_date`] first.

use chrono::{Local, NaiveDate};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Strips a time component: `2024-03-01T00:00:00Z` becomes `2024-03-01`.
pub fn normalize_due_date(raw: &str) -> String {
    match raw.split_once('T') {
        Some((date, _)) => date.to_string(),
        None => raw.to_string(),
    }
}

/// Parses a `YYYY-MM-DD` string, also accepting a trailing time component.
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&normalize_due_date(date.trim()), DATE_FORMAT).ok()
}

/// Strict form check for user input: exactly `YYYY-MM-DD`, no time part.
pub fn is_calendar_date(date: &str) -> bool {
    NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).is_ok()
}

/// Re-emits a date in the wire format.
///
/// Empty input stays empty and anything unparseable is passed through
/// unchanged, leaving the verdict to the server.
pub fn format_date_for_api(date: &str) -> String {
    if date.is_empty() {
        return String::new();
    }
    match parse_date(date) {
        Some(parsed) => parsed.format(DATE_FORMAT).to_string(),
        None => date.to_string(),
    }
}

/// Human form used in the task table, e.g. `Mar 1, 2024`.
pub fn format_display_date(date: &str) -> String {
    match parse_date(date) {
        Some(parsed) => parsed.format("%b %-d, %Y").to_string(),
        None => date.to_string(),
    }
}

/// Local calendar date as `YYYY-MM-DD`.
pub fn today() -> String {
    Local::now().date_naive().format(DATE_FORMAT).to_string()
}
