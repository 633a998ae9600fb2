// src/core/codec.rs
use anyhow::{bail, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::path::Path;

use crate::models::Structure;

/// Recovers a file's date from its path relative to the input root.
///
/// Leading components of `relative_dir` are consumed as year/month/day
/// according to `structure`; the remainder of the date (and, when
/// `parse_time` is set, a 4-digit `HHmm` token) comes from the filename stem,
/// split on `-` or `_`. Surplus trailing tokens such as a title slug are
/// ignored.
///
/// Returns `None` for anything that does not match the expected grammar:
/// non-numeric or out-of-range fields, missing path components or tokens,
/// and dates the calendar rejects (e.g. April 31). Malformed input is a
/// per-file condition, never an error.
#[must_use]
pub fn decode_file_date(
    relative_dir: &Path,
    filename: &str,
    structure: Structure,
    parse_time: bool,
) -> Option<NaiveDateTime> {
    let stem = Path::new(filename).file_stem()?.to_str()?;
    let mut tokens = stem.split(['-', '_']);
    let mut dirs = relative_dir.iter().filter_map(|c| c.to_str());

    let (year, month, day) = match structure {
        Structure::Flat => (
            parse_year(tokens.next()?)?,
            parse_field(tokens.next()?, 12)?,
            parse_field(tokens.next()?, 31)?,
        ),
        Structure::Year => (
            parse_year(dirs.next()?)?,
            parse_field(tokens.next()?, 12)?,
            parse_field(tokens.next()?, 31)?,
        ),
        Structure::Month => (
            parse_year(dirs.next()?)?,
            parse_field(dirs.next()?, 12)?,
            parse_field(tokens.next()?, 31)?,
        ),
        Structure::Day => (
            parse_year(dirs.next()?)?,
            parse_field(dirs.next()?, 12)?,
            parse_field(dirs.next()?, 31)?,
        ),
    };

    let (hour, minute) = if parse_time {
        parse_clock(tokens.next()?)?
    } else {
        (0, 0)
    };

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
    Some(date.and_time(time))
}

/// Formats the date fragment of an output filename for the given structure.
///
/// Emits exactly the components the directory nesting does not already
/// imply: `YYYY-MM-DD` under a flat layout, `MM-DD` under yearly
/// directories, `DD` under monthly ones.
///
/// # Errors
///
/// Returns an error for the `day` structure, where the full date is already
/// implied by the directory path and a date fragment would be redundant.
/// Callers validate this once at configuration time, not per file.
pub fn date_fragment(date: NaiveDate, structure: Structure) -> Result<String> {
    match structure {
        Structure::Flat => Ok(date.format("%Y-%m-%d").to_string()),
        Structure::Year => Ok(date.format("%m-%d").to_string()),
        Structure::Month => Ok(date.format("%d").to_string()),
        Structure::Day => {
            bail!("a 'date' filename field is redundant when the directory structure is 'day'")
        }
    }
}

/// A year is exactly four digits.
fn parse_year(token: &str) -> Option<i32> {
    if token.len() != 4 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// A month or day field: one or two digits in `1..=max`.
fn parse_field(token: &str, max: u32) -> Option<u32> {
    if token.is_empty() || token.len() > 2 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: u32 = token.parse().ok()?;
    (1..=max).contains(&value).then_some(value)
}

/// A clock token: exactly `HHmm`, hour 0-23, minute 0-59.
fn parse_clock(token: &str) -> Option<(u32, u32)> {
    if token.len() != 4 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hour: u32 = token[..2].parse().ok()?;
    let minute: u32 = token[2..].parse().ok()?;
    (hour <= 23 && minute <= 59).then_some((hour, minute))
}
