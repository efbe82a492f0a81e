//! Tests for room/teacher double-booking detection.

use schedule_engine::{
    check_conflict, find_all_conflicts, CheckMode, ConflictKind, ConflictResult, DayOfWeek,
    ScheduleEntry, ScheduleError,
};

/// Helper to create a schedule entry on a given day and time range.
fn entry(
    id: Option<&str>,
    room: &str,
    teacher: &str,
    day: DayOfWeek,
    start: &str,
    end: &str,
) -> ScheduleEntry {
    ScheduleEntry {
        id: id.map(str::to_string),
        subject_id: "SUBJ-1".to_string(),
        teacher_id: teacher.to_string(),
        room_id: room.to_string(),
        section_id: "SEC-1".to_string(),
        day_of_week: day,
        start_time: start.to_string(),
        end_time: end.to_string(),
        created_at: None,
        updated_at: None,
    }
}

fn reason(result: &ConflictResult) -> String {
    result.reason().expect("expected a conflict")
}

// ── Scenarios ───────────────────────────────────────────────────────────────

#[test]
fn empty_snapshot_no_conflict() {
    let candidate = entry(None, "R1", "T1", DayOfWeek::Monday, "09:00:00", "10:00:00");

    let result = check_conflict(&candidate, &[], CheckMode::Create).unwrap();

    assert_eq!(result, ConflictResult::NoConflict);
}

#[test]
fn room_booked_in_overlapping_slot() {
    let existing = vec![entry(Some("a"), "R1", "T2", DayOfWeek::Monday, "09:30:00", "10:30:00")];
    let candidate = entry(None, "R1", "T1", DayOfWeek::Monday, "09:00:00", "10:00:00");

    let result = check_conflict(&candidate, &existing, CheckMode::Create).unwrap();

    assert_eq!(
        reason(&result),
        "Conflict: Room R1 is booked on MONDAY from 09:30:00 to 10:30:00."
    );
    match result {
        ConflictResult::Conflict(c) => {
            assert_eq!(c.entry_id.as_deref(), Some("a"));
            assert_eq!(c.overlap_minutes, 30);
        }
        ConflictResult::NoConflict => unreachable!(),
    }
}

#[test]
fn same_slot_on_another_day_no_conflict() {
    let existing = vec![entry(Some("a"), "R1", "T2", DayOfWeek::Monday, "09:30:00", "10:30:00")];
    let candidate = entry(None, "R1", "T1", DayOfWeek::Tuesday, "09:00:00", "10:00:00");

    let result = check_conflict(&candidate, &existing, CheckMode::Create).unwrap();

    assert_eq!(result, ConflictResult::NoConflict);
}

#[test]
fn update_skips_own_stale_copy() {
    let existing = vec![entry(Some("a"), "R1", "T1", DayOfWeek::Monday, "09:00:00", "10:00:00")];
    let candidate = entry(Some("a"), "R1", "T1", DayOfWeek::Monday, "09:00:00", "11:00:00");

    let result = check_conflict(&candidate, &existing, CheckMode::Update).unwrap();

    assert_eq!(result, ConflictResult::NoConflict);
}

#[test]
fn create_ignores_candidate_id() {
    // Same id, but in create mode nothing is skipped.
    let existing = vec![entry(Some("a"), "R1", "T1", DayOfWeek::Monday, "09:00:00", "10:00:00")];
    let candidate = entry(Some("a"), "R1", "T1", DayOfWeek::Monday, "09:00:00", "11:00:00");

    let result = check_conflict(&candidate, &existing, CheckMode::Create).unwrap();

    assert!(result.is_conflict());
}

#[test]
fn end_before_start_is_rejected() {
    let candidate = entry(None, "R1", "T1", DayOfWeek::Monday, "10:00:00", "09:00:00");

    let result = check_conflict(&candidate, &[], CheckMode::Create).unwrap();

    assert_eq!(reason(&result), "End time must be after start time.");
}

// ── Properties ──────────────────────────────────────────────────────────────

#[test]
fn back_to_back_slots_do_not_conflict() {
    let existing = vec![entry(Some("a"), "R1", "T1", DayOfWeek::Monday, "09:00:00", "10:00:00")];

    let after = entry(None, "R1", "T1", DayOfWeek::Monday, "10:00:00", "11:00:00");
    let before = entry(None, "R1", "T1", DayOfWeek::Monday, "08:00:00", "09:00:00");

    assert_eq!(
        check_conflict(&after, &existing, CheckMode::Create).unwrap(),
        ConflictResult::NoConflict
    );
    assert_eq!(
        check_conflict(&before, &existing, CheckMode::Create).unwrap(),
        ConflictResult::NoConflict
    );
}

#[test]
fn zero_length_candidate_wins_over_everything() {
    let existing = vec![entry(Some("a"), "R1", "T1", DayOfWeek::Monday, "09:00:00", "10:00:00")];
    let candidate = entry(None, "R1", "T1", DayOfWeek::Monday, "09:30:00", "09:30:00");

    let with_snapshot = check_conflict(&candidate, &existing, CheckMode::Create).unwrap();
    let without = check_conflict(&candidate, &[], CheckMode::Create).unwrap();

    assert_eq!(reason(&with_snapshot), "End time must be after start time.");
    assert_eq!(with_snapshot, without);
}

#[test]
fn room_reported_before_teacher() {
    let existing = vec![entry(Some("a"), "R1", "T1", DayOfWeek::Friday, "13:00:00", "14:00:00")];
    let candidate = entry(None, "R1", "T1", DayOfWeek::Friday, "13:30:00", "14:30:00");

    let result = check_conflict(&candidate, &existing, CheckMode::Create).unwrap();

    let text = reason(&result);
    assert!(text.contains("Room"), "got: {text}");
    assert!(!text.contains("Teacher"), "got: {text}");
}

#[test]
fn teacher_booked_in_another_room() {
    let existing = vec![entry(Some("a"), "R2", "T1", DayOfWeek::Wednesday, "08:00:00", "09:30:00")];
    let candidate = entry(None, "R1", "T1", DayOfWeek::Wednesday, "09:00:00", "10:00:00");

    let result = check_conflict(&candidate, &existing, CheckMode::Create).unwrap();

    assert_eq!(
        reason(&result),
        "Conflict: Teacher T1 is booked on WEDNESDAY from 08:00:00 to 09:30:00."
    );
}

#[test]
fn overlap_with_unrelated_room_and_teacher_is_fine() {
    let existing = vec![entry(Some("a"), "R2", "T2", DayOfWeek::Monday, "09:00:00", "10:00:00")];
    let candidate = entry(None, "R1", "T1", DayOfWeek::Monday, "09:00:00", "10:00:00");

    let result = check_conflict(&candidate, &existing, CheckMode::Create).unwrap();

    assert_eq!(result, ConflictResult::NoConflict);
}

#[test]
fn sections_are_not_compared() {
    let mut booked = entry(Some("a"), "R2", "T2", DayOfWeek::Monday, "09:00:00", "10:00:00");
    booked.section_id = "SEC-9".to_string();
    let mut candidate = entry(None, "R1", "T1", DayOfWeek::Monday, "09:00:00", "10:00:00");
    candidate.section_id = "SEC-9".to_string();

    let result = check_conflict(&candidate, &[booked], CheckMode::Create).unwrap();

    assert_eq!(result, ConflictResult::NoConflict);
}

#[test]
fn candidate_containing_booking_conflicts() {
    let existing = vec![entry(Some("a"), "R1", "T2", DayOfWeek::Monday, "10:00:00", "11:00:00")];
    let candidate = entry(None, "R1", "T1", DayOfWeek::Monday, "09:00:00", "12:00:00");

    let result = check_conflict(&candidate, &existing, CheckMode::Create).unwrap();

    assert!(result.is_conflict());
}

#[test]
fn first_conflict_in_snapshot_order_wins() {
    let existing = vec![
        entry(Some("a"), "R9", "T1", DayOfWeek::Monday, "09:00:00", "10:00:00"),
        entry(Some("b"), "R1", "T9", DayOfWeek::Monday, "09:00:00", "10:00:00"),
    ];
    let candidate = entry(None, "R1", "T1", DayOfWeek::Monday, "09:00:00", "10:00:00");

    let result = check_conflict(&candidate, &existing, CheckMode::Create).unwrap();

    assert_eq!(
        reason(&result),
        "Conflict: Teacher T1 is booked on MONDAY from 09:00:00 to 10:00:00."
    );
}

#[test]
fn update_still_sees_other_entries() {
    let existing = vec![
        entry(Some("a"), "R1", "T1", DayOfWeek::Monday, "09:00:00", "10:00:00"),
        entry(Some("b"), "R1", "T2", DayOfWeek::Monday, "10:30:00", "11:30:00"),
    ];
    let candidate = entry(Some("a"), "R1", "T1", DayOfWeek::Monday, "09:00:00", "11:00:00");

    let result = check_conflict(&candidate, &existing, CheckMode::Update).unwrap();

    assert_eq!(
        reason(&result),
        "Conflict: Room R1 is booked on MONDAY from 10:30:00 to 11:30:00."
    );
}

#[test]
fn times_without_seconds_are_accepted() {
    let existing = vec![entry(Some("a"), "R1", "T2", DayOfWeek::Monday, "09:30", "10:30")];
    let candidate = entry(None, "R1", "T1", DayOfWeek::Monday, "09:00:00", "10:00:00");

    let result = check_conflict(&candidate, &existing, CheckMode::Create).unwrap();

    assert!(result.is_conflict());
}

// ── Errors ──────────────────────────────────────────────────────────────────

#[test]
fn malformed_candidate_time_is_an_error() {
    let candidate = entry(None, "R1", "T1", DayOfWeek::Monday, "nine", "10:00:00");

    let err = check_conflict(&candidate, &[], CheckMode::Create).unwrap_err();

    assert_eq!(err, ScheduleError::InvalidTimeFormat("nine".to_string()));
}

#[test]
fn malformed_same_day_entry_is_an_error_not_a_pass() {
    let existing = vec![entry(Some("a"), "R2", "T2", DayOfWeek::Monday, "9h", "10:00:00")];
    let candidate = entry(None, "R1", "T1", DayOfWeek::Monday, "09:00:00", "10:00:00");

    let result = check_conflict(&candidate, &existing, CheckMode::Create);

    assert!(matches!(result, Err(ScheduleError::InvalidTimeFormat(_))));
}

#[test]
fn malformed_entry_on_other_day_is_never_parsed() {
    let existing = vec![entry(Some("a"), "R1", "T1", DayOfWeek::Saturday, "bogus", "bogus")];
    let candidate = entry(None, "R1", "T1", DayOfWeek::Monday, "09:00:00", "10:00:00");

    let result = check_conflict(&candidate, &existing, CheckMode::Create).unwrap();

    assert_eq!(result, ConflictResult::NoConflict);
}

// ── find_all_conflicts ──────────────────────────────────────────────────────

#[test]
fn all_conflicts_collected_in_order() {
    let existing = vec![
        entry(Some("a"), "R1", "T2", DayOfWeek::Monday, "08:30:00", "09:30:00"),
        entry(Some("b"), "R3", "T3", DayOfWeek::Monday, "09:00:00", "10:00:00"),
        entry(Some("c"), "R2", "T1", DayOfWeek::Monday, "09:45:00", "11:00:00"),
        entry(Some("d"), "R1", "T1", DayOfWeek::Tuesday, "09:00:00", "10:00:00"),
    ];
    let candidate = entry(None, "R1", "T1", DayOfWeek::Monday, "09:00:00", "10:00:00");

    let conflicts = find_all_conflicts(&candidate, &existing, CheckMode::Create).unwrap();

    assert_eq!(conflicts.len(), 2);
    assert_eq!(conflicts[0].entry_id.as_deref(), Some("a"));
    assert!(matches!(conflicts[0].kind, ConflictKind::Room { .. }));
    assert_eq!(conflicts[0].overlap_minutes, 30);
    assert_eq!(conflicts[1].entry_id.as_deref(), Some("c"));
    assert!(matches!(conflicts[1].kind, ConflictKind::Teacher { .. }));
    assert_eq!(conflicts[1].overlap_minutes, 15);
}

#[test]
fn all_conflicts_for_invalid_interval_is_single_entry() {
    let existing = vec![entry(Some("a"), "R1", "T1", DayOfWeek::Monday, "09:00:00", "10:00:00")];
    let candidate = entry(None, "R1", "T1", DayOfWeek::Monday, "11:00:00", "10:00:00");

    let conflicts = find_all_conflicts(&candidate, &existing, CheckMode::Create).unwrap();

    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].kind, ConflictKind::InvalidInterval);
}

#[test]
fn all_conflicts_agrees_with_first_conflict() {
    let existing = vec![
        entry(Some("a"), "R1", "T2", DayOfWeek::Thursday, "14:00:00", "15:00:00"),
        entry(Some("b"), "R2", "T1", DayOfWeek::Thursday, "14:30:00", "16:00:00"),
    ];
    let candidate = entry(None, "R1", "T1", DayOfWeek::Thursday, "14:15:00", "15:15:00");

    let first = check_conflict(&candidate, &existing, CheckMode::Create).unwrap();
    let all = find_all_conflicts(&candidate, &existing, CheckMode::Create).unwrap();

    assert_eq!(first, ConflictResult::Conflict(all[0].clone()));
}
