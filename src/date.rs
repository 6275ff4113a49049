use chrono::{Duration, Local, NaiveDate};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("expected a YYYY-MM-DD date, got {0:?}")]
    Malformed(String),

    #[error("date arithmetic out of range: {0} {1:+} days")]
    OutOfRange(String, i64),
}

pub fn today_iso() -> String {
    date_key(Local::now().date_naive())
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parses a calendar-date identifier.
///
/// Only the fixed-width, zero-padded form is accepted: the rest of the crate
/// orders identifiers as plain strings, which is chronological only for that
/// shape. `2026-1-5` parses under chrono's `%m`/`%d` but is rejected here.
pub fn parse_date(iso: &str) -> Result<NaiveDate, DateError> {
    if !has_key_shape(iso) {
        return Err(DateError::Malformed(iso.to_string()));
    }
    NaiveDate::parse_from_str(iso, "%Y-%m-%d").map_err(|_| DateError::Malformed(iso.to_string()))
}

pub fn is_date_key(iso: &str) -> bool {
    parse_date(iso).is_ok()
}

pub fn add_days(iso: &str, days: i64) -> Result<String, DateError> {
    let date = parse_date(iso)?;
    Duration::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .map(date_key)
        .ok_or_else(|| DateError::OutOfRange(iso.to_string(), days))
}

/// Whole calendar days from `start` to `end`; negative when `end` is earlier.
pub fn days_between(start: &str, end: &str) -> Result<i64, DateError> {
    Ok((parse_date(end)? - parse_date(start)?).num_days())
}

pub fn format_pretty(iso: &str) -> Result<String, DateError> {
    Ok(parse_date(iso)?.format("%b %-d").to_string())
}

fn has_key_shape(iso: &str) -> bool {
    let bytes = iso.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(idx, b)| match idx {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
