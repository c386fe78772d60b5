//! Calendar-date normalization for values coming off the backend.
//!
//! Backend payloads mix bare `YYYY-MM-DD` strings, full RFC 3339
//! timestamps, and missing values. Everything is reduced to a stable
//! `YYYY-MM-DD` string (or a `DD/MM/YYYY` display form) without letting a
//! timezone conversion shift the calendar day.

use anyhow::{anyhow, Result};
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, Utc};

/// A date as a form or payload may hand it over.
#[derive(Debug, Clone)]
pub enum DateValue {
    Empty,
    Text(String),
    Instant(DateTime<Local>),
    Day(NaiveDate),
}

impl From<&str> for DateValue {
    fn from(s: &str) -> Self {
        DateValue::Text(s.to_string())
    }
}

impl From<String> for DateValue {
    fn from(s: String) -> Self {
        DateValue::Text(s)
    }
}

impl From<NaiveDate> for DateValue {
    fn from(d: NaiveDate) -> Self {
        DateValue::Day(d)
    }
}

impl From<DateTime<Local>> for DateValue {
    fn from(dt: DateTime<Local>) -> Self {
        DateValue::Instant(dt)
    }
}

impl From<DateTime<Utc>> for DateValue {
    fn from(dt: DateTime<Utc>) -> Self {
        DateValue::Instant(dt.with_timezone(&Local))
    }
}

impl<T> From<Option<T>> for DateValue
where
    T: Into<DateValue>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => DateValue::Empty,
        }
    }
}

// Leading `YYYY-MM-DD` prefix, returned exactly as written. This is what
// keeps "2024-03-15T00:00:00Z" on the 15th in every timezone: the written
// calendar date wins over any instant arithmetic.
fn leading_iso_date(s: &str) -> Option<&str> {
    let b = s.as_bytes();
    if b.len() < 10 {
        return None;
    }
    let shaped = b[..4].iter().all(u8::is_ascii_digit)
        && b[4] == b'-'
        && b[5..7].iter().all(u8::is_ascii_digit)
        && b[7] == b'-'
        && b[8..10].iter().all(u8::is_ascii_digit);
    shaped.then(|| &s[..10])
}

// RFC 3339 first, then the two bare forms seen in practice.
fn parse_day(s: &str) -> Result<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Local).date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt.date());
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%d/%m/%Y") {
        return Ok(d);
    }
    Err(anyhow!("unrecognized date value '{}'", s))
}

fn format_ymd(year: i32, month: u32, day: u32) -> String {
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Reduces `input` to a zero-padded `YYYY-MM-DD` string.
///
/// Empty or unparseable input degrades to `"-"` when `dash_fallback` is
/// set, `""` otherwise. For chrono values the **local** calendar
/// components are used, never the UTC ones. Never panics.
pub fn to_iso_date(input: impl Into<DateValue>, dash_fallback: bool) -> String {
    let fallback = || {
        if dash_fallback {
            "-".to_string()
        } else {
            String::new()
        }
    };

    match input.into() {
        DateValue::Empty => fallback(),
        DateValue::Text(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return fallback();
            }
            if let Some(prefix) = leading_iso_date(trimmed) {
                return prefix.to_string();
            }
            match parse_day(trimmed) {
                Ok(day) => format_ymd(day.year(), day.month(), day.day()),
                Err(err) => {
                    tracing::warn!("dropping unparseable date: {err}");
                    fallback()
                }
            }
        }
        DateValue::Instant(dt) => format_ymd(dt.year(), dt.month(), dt.day()),
        DateValue::Day(d) => format_ymd(d.year(), d.month(), d.day()),
    }
}

/// Human form of [`to_iso_date`]: `DD/MM/YYYY`, with `"-"` standing in for
/// anything that does not normalize to a three-part date.
pub fn to_display_date(input: impl Into<DateValue>) -> String {
    let iso = to_iso_date(input, true);
    if iso.is_empty() || iso == "-" {
        return "-".to_string();
    }
    let parts: Vec<&str> = iso.split('-').collect();
    match parts.as_slice() {
        [year, month, day] if !year.is_empty() && !month.is_empty() && !day.is_empty() => {
            format!("{day}/{month}/{year}")
        }
        _ => "-".to_string(),
    }
}
