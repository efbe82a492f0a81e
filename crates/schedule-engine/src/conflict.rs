//! Detect double-booked rooms and teachers for a proposed class slot.
//!
//! A candidate collides with an existing entry when both fall on the same day,
//! their `[start, end)` ranges overlap, and they share a room or a teacher.
//! Back-to-back slots (one ends exactly when the other starts) are NOT
//! conflicts. Sections are not compared.
//!
//! The check is advisory: it only sees the snapshot it is given, so two
//! clients validating against stale snapshots can still both pass.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entry::{DayOfWeek, ScheduleEntry};
use crate::error::Result;
use crate::interval::MinuteRange;

/// Whether the candidate is new or replaces an entry with the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckMode {
    /// Nothing in the snapshot is skipped; any candidate id is ignored.
    #[default]
    Create,
    /// Snapshot entries with the candidate's id are its own stale copy and
    /// are skipped.
    Update,
}

/// What went wrong with a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConflictKind {
    /// The candidate ends at or before it starts.
    InvalidInterval,
    /// The room is already booked during an overlapping slot.
    Room {
        room_id: String,
        day: DayOfWeek,
        start_time: String,
        end_time: String,
    },
    /// The teacher is already booked during an overlapping slot.
    Teacher {
        teacher_id: String,
        day: DayOfWeek,
        start_time: String,
        end_time: String,
    },
}

impl fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConflictKind::InvalidInterval => f.write_str("End time must be after start time."),
            ConflictKind::Room {
                room_id,
                day,
                start_time,
                end_time,
            } => write!(
                f,
                "Conflict: Room {} is booked on {} from {} to {}.",
                room_id, day, start_time, end_time
            ),
            ConflictKind::Teacher {
                teacher_id,
                day,
                start_time,
                end_time,
            } => write!(
                f,
                "Conflict: Teacher {} is booked on {} from {} to {}.",
                teacher_id, day, start_time, end_time
            ),
        }
    }
}

/// A detected conflict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    pub kind: ConflictKind,
    /// Id of the booked entry the candidate collides with. `None` for
    /// `InvalidInterval` and for snapshot entries that carry no id.
    pub entry_id: Option<String>,
    /// Minutes shared by the candidate and the booked entry.
    pub overlap_minutes: u32,
}

impl Conflict {
    fn invalid_interval() -> Self {
        Self {
            kind: ConflictKind::InvalidInterval,
            entry_id: None,
            overlap_minutes: 0,
        }
    }

    /// User-facing validation text, shown verbatim by the dashboard.
    pub fn reason(&self) -> String {
        self.kind.to_string()
    }
}

/// Verdict of [`check_conflict`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictResult {
    NoConflict,
    Conflict(Conflict),
}

impl ConflictResult {
    pub fn is_conflict(&self) -> bool {
        matches!(self, ConflictResult::Conflict(_))
    }

    pub fn reason(&self) -> Option<String> {
        match self {
            ConflictResult::NoConflict => None,
            ConflictResult::Conflict(c) => Some(c.reason()),
        }
    }
}

/// Check a candidate against a snapshot of existing entries, stopping at the
/// first collision in snapshot order.
///
/// An empty or inverted candidate range is reported as
/// `ConflictKind::InvalidInterval` before the snapshot is looked at. For each
/// overlapping entry the room is checked before the teacher, so an entry that
/// shares both reports the room.
///
/// # Errors
/// Returns `ScheduleError::InvalidTimeFormat` if the candidate or any same-day
/// snapshot entry has an unparseable time. Entries skipped by mode or day are
/// never parsed.
pub fn check_conflict(
    candidate: &ScheduleEntry,
    existing: &[ScheduleEntry],
    mode: CheckMode,
) -> Result<ConflictResult> {
    let range = candidate.minute_range()?;
    if range.is_empty() {
        debug!(
            start = %candidate.start_time,
            end = %candidate.end_time,
            "candidate interval is empty"
        );
        return Ok(ConflictResult::Conflict(Conflict::invalid_interval()));
    }

    for entry in existing {
        if let Some(conflict) = collide(candidate, range, entry, mode)? {
            debug!(reason = %conflict.kind, "conflict found");
            return Ok(ConflictResult::Conflict(conflict));
        }
    }

    debug!(checked = existing.len(), "no conflict");
    Ok(ConflictResult::NoConflict)
}

/// Like [`check_conflict`] but collects one conflict per colliding entry, in
/// snapshot order.
///
/// An invalid candidate interval yields exactly one `InvalidInterval`
/// conflict and nothing else.
pub fn find_all_conflicts(
    candidate: &ScheduleEntry,
    existing: &[ScheduleEntry],
    mode: CheckMode,
) -> Result<Vec<Conflict>> {
    let range = candidate.minute_range()?;
    if range.is_empty() {
        return Ok(vec![Conflict::invalid_interval()]);
    }

    let mut conflicts = Vec::new();
    for entry in existing {
        if let Some(conflict) = collide(candidate, range, entry, mode)? {
            conflicts.push(conflict);
        }
    }

    debug!(found = conflicts.len(), checked = existing.len(), "collected conflicts");
    Ok(conflicts)
}

fn collide(
    candidate: &ScheduleEntry,
    range: MinuteRange,
    entry: &ScheduleEntry,
    mode: CheckMode,
) -> Result<Option<Conflict>> {
    if mode == CheckMode::Update && entry.id.is_some() && entry.id == candidate.id {
        return Ok(None);
    }
    if entry.day_of_week != candidate.day_of_week {
        return Ok(None);
    }

    let booked = entry.minute_range()?;
    if !range.overlaps(&booked) {
        return Ok(None);
    }

    let kind = if entry.room_id == candidate.room_id {
        ConflictKind::Room {
            room_id: entry.room_id.clone(),
            day: entry.day_of_week,
            start_time: entry.start_time.clone(),
            end_time: entry.end_time.clone(),
        }
    } else if entry.teacher_id == candidate.teacher_id {
        ConflictKind::Teacher {
            teacher_id: entry.teacher_id.clone(),
            day: entry.day_of_week,
            start_time: entry.start_time.clone(),
            end_time: entry.end_time.clone(),
        }
    } else {
        return Ok(None);
    };

    Ok(Some(Conflict {
        kind,
        entry_id: entry.id.clone(),
        overlap_minutes: range.overlap_minutes(&booked),
    }))
}
