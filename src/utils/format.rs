//! Format - Formatting Utilities

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::constants::MISSING_PLACEHOLDER;

/// Parse an ISO-8601 timestamp into UTC.
///
/// Accepts RFC 3339 (`2024-11-01T09:30:00Z`, offsets), naive date-times which are
/// taken as UTC, and plain dates (midnight UTC).
pub fn parse_iso(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, pattern) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Format a UTC datetime as `DD-MM-YYYY`, or `DD-MM-YYYY HH:mm:ss` with `with_time`
pub fn format_utc(dt: &DateTime<Utc>, with_time: bool) -> String {
    if with_time {
        dt.format("%d-%m-%Y %H:%M:%S").to_string()
    } else {
        dt.format("%d-%m-%Y").to_string()
    }
}

/// Format an ISO-8601 string for display.
///
/// Empty or unparseable input yields the missing-value placeholder.
pub fn format_date(iso: &str, with_time: bool) -> String {
    match parse_iso(iso) {
        Some(dt) => format_utc(&dt, with_time),
        None => MISSING_PLACEHOLDER.to_string(),
    }
}

/// Format a number with thousand separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    let len = s.len();

    for (i, c) in s.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}
