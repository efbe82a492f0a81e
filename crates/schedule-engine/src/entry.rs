//! The weekly class slot and its day-of-week.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::interval::MinuteRange;
use crate::time::minutes_since_midnight;

/// Teaching days. Classes are never scheduled on Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 6] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "MONDAY",
            DayOfWeek::Tuesday => "TUESDAY",
            DayOfWeek::Wednesday => "WEDNESDAY",
            DayOfWeek::Thursday => "THURSDAY",
            DayOfWeek::Friday => "FRIDAY",
            DayOfWeek::Saturday => "SATURDAY",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayOfWeek {
    type Err = ScheduleError;

    /// Accepts the API form (`MONDAY`), any casing of it, and three-letter
    /// abbreviations (`Mon`).
    fn from_str(s: &str) -> Result<Self> {
        let upper = s.trim().to_ascii_uppercase();
        let day = match upper.as_str() {
            "MONDAY" | "MON" => DayOfWeek::Monday,
            "TUESDAY" | "TUE" => DayOfWeek::Tuesday,
            "WEDNESDAY" | "WED" => DayOfWeek::Wednesday,
            "THURSDAY" | "THU" => DayOfWeek::Thursday,
            "FRIDAY" | "FRI" => DayOfWeek::Friday,
            "SATURDAY" | "SAT" => DayOfWeek::Saturday,
            _ => return Err(ScheduleError::InvalidDay(s.to_string())),
        };
        Ok(day)
    }
}

/// One weekly recurring class slot, in the shape the REST API returns.
///
/// The foreign ids are opaque comparison keys; nothing here checks that the
/// subject, teacher, room or section actually exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    /// Absent on a candidate that has not been saved yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub subject_id: String,
    pub teacher_id: String,
    pub room_id: String,
    pub section_id: String,
    pub day_of_week: DayOfWeek,
    /// `HH:MM:SS`
    pub start_time: String,
    /// `HH:MM:SS`
    pub end_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ScheduleEntry {
    /// The entry's `[start, end)` in minutes since midnight.
    ///
    /// The range is returned as-is even when inverted; callers decide whether
    /// an empty range is an error.
    pub fn minute_range(&self) -> Result<MinuteRange> {
        let start = minutes_since_midnight(&self.start_time)?;
        let end = minutes_since_midnight(&self.end_time)?;
        Ok(MinuteRange::new(start, end))
    }
}
