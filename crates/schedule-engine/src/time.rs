//! Wall-clock time normalization.
//!
//! Schedule entries carry their times as `HH:MM:SS` text, the way the REST API
//! returns them. Everything that compares times goes through
//! [`minutes_since_midnight`] first, so comparisons are integer comparisons on
//! the same scale.

use chrono::{NaiveTime, Timelike};

use crate::error::{Result, ScheduleError};

/// Minutes in a full day. Valid offsets are `0..MINUTES_PER_DAY`.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Convert an `HH:MM` or `HH:MM:SS` time-of-day into minutes since 00:00.
///
/// The seconds component is truncated, not rounded: `"09:59:59"` is 599.
///
/// # Errors
/// Returns `ScheduleError::InvalidTimeFormat` if the string is not a valid
/// time of day (non-numeric parts, hour > 23, minute > 59, extra components).
pub fn minutes_since_midnight(time: &str) -> Result<u32> {
    let trimmed = time.trim();
    let parsed = NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|_| ScheduleError::InvalidTimeFormat(time.to_string()))?;

    Ok(parsed.hour() * 60 + parsed.minute())
}

/// Render a minute offset back as `HH:MM`.
///
/// Offsets at or past midnight are clamped to `24:00`, which only shows up as
/// the closing edge of a window that runs to the end of the day.
pub fn format_minutes(minutes: u32) -> String {
    let minutes = minutes.min(MINUTES_PER_DAY);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
