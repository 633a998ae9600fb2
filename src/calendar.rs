// src/calendar.rs
use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate, NaiveDateTime};

/// Format used when echoing resolved bounds back to the user.
pub const BOUND_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Source of "now" for date-range defaulting.
///
/// The walker only ever asks a clock for the current wall-clock time; hosts
/// that need a specific timezone implement this with their own zone-bound
/// clock and the rest of the library stays timezone-agnostic.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Clock reading the system's local wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock pinned to a fixed instant, for reproducible runs and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Parses a user-supplied range bound.
///
/// Accepts `YYYY-MM-DD` (interpreted as midnight) or `YYYY-MM-DDTHH:MM`.
///
/// # Errors
///
/// Returns an error when the string matches neither form, naming the value
/// so the caller can point at the offending flag.
pub fn parse_bound(value: &str) -> Result<NaiveDateTime> {
    if let Ok(at) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M") {
        return Ok(at);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|d| d.and_hms_opt(0, 0, 0).unwrap_or_default())
        .map_err(|_| {
            anyhow!("invalid date '{value}': expected YYYY-MM-DD or YYYY-MM-DDTHH:MM")
        })
}
