//! # schedule-engine
//!
//! Conflict detection for weekly class timetables.
//!
//! An academic dashboard lets admins, deans and teachers book a subject,
//! teacher, room and section into a weekly slot. Before a slot is saved it is
//! checked against the current timetable: no room and no teacher may be
//! booked twice in overlapping time on the same day.
//!
//! ## Modules
//!
//! - [`time`] — `HH:MM:SS` text → minutes since midnight
//! - [`interval`] — Half-open minute ranges and their overlap test
//! - [`entry`] — `ScheduleEntry` and `DayOfWeek`
//! - [`conflict`] — Room/teacher double-booking checks
//! - [`freebusy`] — Free slots for one room or teacher on one day
//! - [`color`] — Stable label colors for calendar rendering
//! - [`role`] — Dashboard roles parsed from API authority strings
//! - [`error`] — Error types

pub mod color;
pub mod conflict;
pub mod entry;
pub mod error;
pub mod freebusy;
pub mod interval;
pub mod role;
pub mod time;

pub use color::color_for;
pub use conflict::{
    check_conflict, find_all_conflicts, CheckMode, Conflict, ConflictKind, ConflictResult,
};
pub use entry::{DayOfWeek, ScheduleEntry};
pub use error::ScheduleError;
pub use freebusy::{
    entries_for_room, entries_for_teacher, find_first_free_slot, find_free_slots, DayWindow,
    FreeSlot,
};
pub use role::{parse_roles, Role};
pub use time::minutes_since_midnight;
