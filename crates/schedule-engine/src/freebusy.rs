//! Compute free slots for one room or teacher on one day.
//!
//! Sorts the day's bookings by start time, merges overlapping busy periods,
//! then computes the gaps between merged periods within the bookable window.

use serde::{Deserialize, Serialize};

use crate::entry::{DayOfWeek, ScheduleEntry};
use crate::error::{Result, ScheduleError};
use crate::interval::MinuteRange;
use crate::time::{format_minutes, minutes_since_midnight, MINUTES_PER_DAY};

/// The bookable part of a campus day, `[start, end)` in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    range: MinuteRange,
}

impl DayWindow {
    /// # Errors
    /// Returns `ScheduleError::InvalidWindow` if `start >= end` or `end` is
    /// past midnight.
    pub fn new(start: u32, end: u32) -> Result<Self> {
        if start >= end || end > MINUTES_PER_DAY {
            return Err(ScheduleError::InvalidWindow(format!(
                "{}-{}",
                format_minutes(start),
                format_minutes(end)
            )));
        }
        Ok(Self {
            range: MinuteRange::new(start, end),
        })
    }

    /// Build a window from `HH:MM[:SS]` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::new(minutes_since_midnight(start)?, minutes_since_midnight(end)?)
    }

    /// The whole day.
    pub fn full_day() -> Self {
        Self {
            range: MinuteRange::new(0, MINUTES_PER_DAY),
        }
    }

    pub fn start(&self) -> u32 {
        self.range.start
    }

    pub fn end(&self) -> u32 {
        self.range.end
    }
}

/// A free slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeSlot {
    /// `HH:MM`
    pub start: String,
    /// `HH:MM`
    pub end: String,
    pub duration_minutes: u32,
}

impl FreeSlot {
    fn from_range(start: u32, end: u32) -> Self {
        Self {
            start: format_minutes(start),
            end: format_minutes(end),
            duration_minutes: end - start,
        }
    }
}

/// Entries booked in the given room.
pub fn entries_for_room<'a>(entries: &'a [ScheduleEntry], room_id: &str) -> Vec<&'a ScheduleEntry> {
    entries.iter().filter(|e| e.room_id == room_id).collect()
}

/// Entries taught by the given teacher.
pub fn entries_for_teacher<'a>(
    entries: &'a [ScheduleEntry],
    teacher_id: &str,
) -> Vec<&'a ScheduleEntry> {
    entries.iter().filter(|e| e.teacher_id == teacher_id).collect()
}

/// Merge overlapping or adjacent busy periods of `day`, clipped to the window.
///
/// Returns a sorted, non-overlapping list of intervals.
fn merge_busy_periods(
    entries: &[&ScheduleEntry],
    day: DayOfWeek,
    window: DayWindow,
) -> Result<Vec<MinuteRange>> {
    // Collect bookings clipped to the window, discarding those entirely outside.
    let mut intervals = Vec::new();
    for entry in entries.iter().filter(|e| e.day_of_week == day) {
        let booked = entry.minute_range()?;
        if booked.is_empty() || booked.start >= window.end() || booked.end <= window.start() {
            continue;
        }
        intervals.push(MinuteRange::new(
            booked.start.max(window.start()),
            booked.end.min(window.end()),
        ));
    }

    intervals.sort();

    let mut merged: Vec<MinuteRange> = Vec::new();
    for interval in intervals {
        if let Some(last) = merged.last_mut() {
            if interval.start <= last.end {
                last.end = last.end.max(interval.end);
                continue;
            }
        }
        merged.push(interval);
    }

    Ok(merged)
}

/// Find free slots on `day` within `window`, given the bookings of a single
/// room or teacher (see [`entries_for_room`] and [`entries_for_teacher`]).
///
/// Bookings on other days are ignored. Returns slots sorted by start time.
///
/// # Errors
/// Returns `ScheduleError::InvalidTimeFormat` if a same-day booking has an
/// unparseable time.
pub fn find_free_slots(
    entries: &[&ScheduleEntry],
    day: DayOfWeek,
    window: DayWindow,
) -> Result<Vec<FreeSlot>> {
    let merged = merge_busy_periods(entries, day, window)?;

    let mut free_slots = Vec::new();
    let mut cursor = window.start();

    for busy in &merged {
        if cursor < busy.start {
            free_slots.push(FreeSlot::from_range(cursor, busy.start));
        }
        cursor = cursor.max(busy.end);
    }

    // Trailing free slot after the last busy period.
    if cursor < window.end() {
        free_slots.push(FreeSlot::from_range(cursor, window.end()));
    }

    Ok(free_slots)
}

/// Find the first free slot of at least `min_duration_minutes` on `day`.
pub fn find_first_free_slot(
    entries: &[&ScheduleEntry],
    day: DayOfWeek,
    window: DayWindow,
    min_duration_minutes: u32,
) -> Result<Option<FreeSlot>> {
    Ok(find_free_slots(entries, day, window)?
        .into_iter()
        .find(|slot| slot.duration_minutes >= min_duration_minutes))
}
