//! WASM bindings for schedule-engine.
//!
//! Exposes conflict checks, free-slot search, label colors and role parsing to the
//! dashboard via `wasm-bindgen`. Schedule entries cross the boundary as JSON
//! strings in the same camelCase shape the REST API returns, so the frontend
//! can pass API responses through untouched.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p schedule-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/schedule-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/schedule_engine_wasm.wasm
//! ```

use schedule_engine::freebusy::{find_free_slots as engine_free_slots, DayWindow};
use schedule_engine::{CheckMode, ConflictResult, DayOfWeek, ScheduleEntry};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct VerdictDto {
    conflict: bool,
    reason: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConflictDto {
    reason: String,
    entry_id: Option<String>,
    overlap_minutes: u32,
}

// ---------------------------------------------------------------------------
// JSON-in/JSON-out implementations, kept free of `JsValue` so they run natively
// ---------------------------------------------------------------------------

fn parse_mode(mode: &str) -> Result<CheckMode, String> {
    match mode.trim().to_ascii_lowercase().as_str() {
        "create" => Ok(CheckMode::Create),
        "update" => Ok(CheckMode::Update),
        other => Err(format!("Invalid mode '{}': expected 'create' or 'update'", other)),
    }
}

fn parse_candidate(json: &str) -> Result<ScheduleEntry, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid candidate JSON: {}", e))
}

fn parse_entries(json: &str) -> Result<Vec<ScheduleEntry>, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid schedule JSON: {}", e))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

fn check_conflict_json(candidate: &str, existing: &str, mode: &str) -> Result<String, String> {
    let mode = parse_mode(mode)?;
    let candidate = parse_candidate(candidate)?;
    let existing = parse_entries(existing)?;

    let verdict = match schedule_engine::check_conflict(&candidate, &existing, mode)
        .map_err(|e| e.to_string())?
    {
        ConflictResult::NoConflict => VerdictDto {
            conflict: false,
            reason: None,
        },
        ConflictResult::Conflict(c) => VerdictDto {
            conflict: true,
            reason: Some(c.reason()),
        },
    };

    to_json(&verdict)
}

fn find_all_conflicts_json(candidate: &str, existing: &str, mode: &str) -> Result<String, String> {
    let mode = parse_mode(mode)?;
    let candidate = parse_candidate(candidate)?;
    let existing = parse_entries(existing)?;

    let dtos: Vec<ConflictDto> = schedule_engine::find_all_conflicts(&candidate, &existing, mode)
        .map_err(|e| e.to_string())?
        .into_iter()
        .map(|c| ConflictDto {
            reason: c.reason(),
            entry_id: c.entry_id,
            overlap_minutes: c.overlap_minutes,
        })
        .collect();

    to_json(&dtos)
}

fn find_free_slots_json(entries: &str, day: &str, from: &str, to: &str) -> Result<String, String> {
    let entries = parse_entries(entries)?;
    let day: DayOfWeek = day.parse().map_err(|e: schedule_engine::ScheduleError| e.to_string())?;
    let window = DayWindow::parse(from, to).map_err(|e| e.to_string())?;

    let refs: Vec<&ScheduleEntry> = entries.iter().collect();
    let slots = engine_free_slots(&refs, day, window).map_err(|e| e.to_string())?;

    to_json(&slots)
}

fn parse_roles_json(roles: &str) -> Result<String, String> {
    let raw: Vec<String> =
        serde_json::from_str(roles).map_err(|e| format!("Invalid roles JSON: {}", e))?;
    let roles = schedule_engine::parse_roles(&raw).map_err(|e| e.to_string())?;

    to_json(&roles)
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Check a candidate schedule entry against the existing timetable.
///
/// `candidate_json` is one entry object, `existing_json` an array of entries,
/// `mode` is `"create"` or `"update"`. Returns a JSON string
/// `{"conflict": bool, "reason": string | null}`; `reason` is the text to show
/// under the form.
#[wasm_bindgen(js_name = "checkConflict")]
pub fn check_conflict(
    candidate_json: &str,
    existing_json: &str,
    mode: &str,
) -> Result<String, JsValue> {
    check_conflict_json(candidate_json, existing_json, mode).map_err(|e| JsValue::from_str(&e))
}

/// Like `checkConflict` but returns every clash as a JSON array of
/// `{reason, entryId, overlapMinutes}` objects, for highlighting table rows.
#[wasm_bindgen(js_name = "findAllConflicts")]
pub fn find_all_conflicts(
    candidate_json: &str,
    existing_json: &str,
    mode: &str,
) -> Result<String, JsValue> {
    find_all_conflicts_json(candidate_json, existing_json, mode).map_err(|e| JsValue::from_str(&e))
}

/// Free slots on `day` between `from` and `to` (`HH:MM`) for the given
/// entries, which should already be narrowed to one room or one teacher.
///
/// Returns a JSON array of `{start, end, duration_minutes}` objects.
#[wasm_bindgen(js_name = "findFreeSlots")]
pub fn find_free_slots(entries_json: &str, day: &str, from: &str, to: &str) -> Result<String, JsValue> {
    find_free_slots_json(entries_json, day, from, to).map_err(|e| JsValue::from_str(&e))
}

/// Normalize the API's role strings (`["[ROLE_ADMIN]"]`, `["ROLE_DEAN"]`, ...)
/// into a JSON array of `"admin"`, `"dean"` and `"teacher"`.
#[wasm_bindgen(js_name = "parseRoles")]
pub fn parse_roles(roles_json: &str) -> Result<String, JsValue> {
    parse_roles_json(roles_json).map_err(|e| JsValue::from_str(&e))
}

/// Stable `#rrggbb` color for a calendar label.
#[wasm_bindgen(js_name = "colorFor")]
pub fn color_for(label: &str) -> String {
    schedule_engine::color_for(label)
}
