// src/core/filter.rs
use anyhow::{bail, Result};
use chrono::{Duration, NaiveDateTime};

use crate::calendar::{Clock, BOUND_DISPLAY_FORMAT};
use crate::models::DateRange;

/// Width of the rolling default window when no explicit start is given.
pub const DEFAULT_WINDOW_DAYS: i64 = 31;

/// Resolves the effective date window for a run.
///
/// `end` defaults to the clock's "now" and `start` to 31 days before `end`;
/// either bound, when supplied, overrides its own default independently.
///
/// # Errors
///
/// Returns an error when the resolved `end` falls before the resolved
/// `start`, naming both bounds in calendar form rather than producing a
/// silently empty range.
pub fn resolve_range(
    clock: &dyn Clock,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
) -> Result<DateRange> {
    let end = end.unwrap_or_else(|| clock.now());
    let start = start.unwrap_or_else(|| end - Duration::days(DEFAULT_WINDOW_DAYS));
    if end < start {
        bail!(
            "date range end ({}) is before its start ({})",
            end.format(BOUND_DISPLAY_FORMAT),
            start.format(BOUND_DISPLAY_FORMAT),
        );
    }
    Ok(DateRange { start, end })
}

/// Tests window membership; an absent range accepts everything.
///
/// The start bound is inclusive and the end bound exclusive.
#[must_use]
pub fn is_in_range(at: NaiveDateTime, range: Option<&DateRange>) -> bool {
    range.is_none_or(|r| r.contains(at))
}
