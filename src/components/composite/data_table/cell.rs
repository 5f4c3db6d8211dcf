//! Cell Values
//!
//! Comparable values read from a row by accessor columns.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use gpui::SharedString;

use crate::constants::MISSING_PLACEHOLDER;
use crate::utils::format::{format_utc, parse_iso};

/// A value read from a row, used for sorting and default cell text
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Missing value
    Empty,
    Text(SharedString),
    Number(f64),
    Date(DateTime<Utc>),
}

impl CellValue {
    /// Build a text value; `None` becomes `Empty`
    pub fn text(value: Option<impl Into<SharedString>>) -> Self {
        match value {
            Some(v) => CellValue::Text(v.into()),
            None => CellValue::Empty,
        }
    }

    /// Parse an ISO-8601 string into a date value.
    ///
    /// Blank input is `Empty`; anything unparseable is kept as text so it still sorts.
    pub fn from_iso(value: &str) -> Self {
        if value.trim().is_empty() {
            return CellValue::Empty;
        }
        match parse_iso(value) {
            Some(dt) => CellValue::Date(dt),
            None => CellValue::Text(SharedString::from(value.to_string())),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            CellValue::Empty => 0,
            CellValue::Number(_) => 1,
            CellValue::Date(_) => 2,
            CellValue::Text(_) => 3,
        }
    }

    /// Total ordering used by column sorting
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (CellValue::Text(a), CellValue::Text(b)) => compare_alphanumeric(a, b),
            (CellValue::Number(a), CellValue::Number(b)) => a.total_cmp(b),
            (CellValue::Date(a), CellValue::Date(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    /// Default display text for accessor columns without a custom cell
    pub fn display(&self) -> SharedString {
        match self {
            CellValue::Empty => MISSING_PLACEHOLDER.into(),
            CellValue::Text(s) if s.trim().is_empty() => MISSING_PLACEHOLDER.into(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => n.to_string().into(),
            CellValue::Date(dt) => format_utc(dt, false).into(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(SharedString::from(value.to_string()))
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value.into())
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<DateTime<Utc>> for CellValue {
    fn from(value: DateTime<Utc>) -> Self {
        CellValue::Date(value)
    }
}

/// Case-insensitive natural ordering: digit runs compare by numeric value
fn compare_alphanumeric(a: &str, b: &str) -> Ordering {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let ln = take_digits(&mut left);
                let rn = take_digits(&mut right);
                let ord = compare_digit_runs(&ln, &rn);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(l), Some(r)) => {
                if l != r {
                    return l.cmp(&r);
                }
                left.next();
                right.next();
            }
        }
    }
}

fn take_digits(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.peek().copied() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
