//! WASM bindings for slot-engine.
//!
//! Exposes slot feasibility checks and free-slot enumeration to JavaScript via
//! `wasm-bindgen`. All complex types are passed as JSON strings using the same
//! field names as the Rust model (`include`, `weekday`, `range`, `durationM`,
//! `buffer.before`, ...).
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/slot-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! ```

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::DeserializeOwned;
use slot_engine::{Attendee, Availability, Event, Interval, Slot};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Helpers: JSON and datetime parsing at the boundary
// ---------------------------------------------------------------------------

/// Parse an ISO 8601 datetime string into `DateTime<Utc>`.
///
/// Accepts both RFC 3339 (with offset, e.g., "2026-03-16T09:00:00+00:00") and
/// naive time (e.g., "2026-03-16T09:00:00"), which is interpreted as UTC.
fn parse_datetime(s: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map(|ndt| ndt.and_utc())
        .map_err(|e| format!("Invalid datetime '{}': {}", s, e))
}

fn parse_json<T: DeserializeOwned>(json: &str, what: &str) -> Result<T, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid {} JSON: {}", what, e))
}

fn parse_availability(json: &str) -> Result<Availability, String> {
    let availability: Availability = parse_json(json, "availability")?;
    availability.validate().map_err(|e| e.to_string())?;
    Ok(availability)
}

fn parse_events(json: &str) -> Result<Vec<Event>, String> {
    let events: Vec<Event> = parse_json(json, "events")?;
    for event in &events {
        event.validate().map_err(|e| e.to_string())?;
    }
    Ok(events)
}

fn parse_slot(json: &str) -> Result<Slot, String> {
    let slot: Slot = parse_json(json, "slot")?;
    slot.validate().map_err(|e| e.to_string())?;
    Ok(slot)
}

fn parse_attendees(json: &str) -> Result<Vec<Attendee>, String> {
    let attendees: Vec<Attendee> = parse_json(json, "attendees")?;
    for attendee in &attendees {
        attendee.validate().map_err(|e| e.to_string())?;
    }
    Ok(attendees)
}

fn parse_range(range_start: &str, range_end: &str) -> Result<Interval, String> {
    Interval::new(parse_datetime(range_start)?, parse_datetime(range_end)?)
        .map_err(|e| e.to_string())
}

fn slots_to_json(slots: impl Iterator<Item = Slot>) -> Result<String, String> {
    let slots: Vec<Slot> = slots.collect();
    serde_json::to_string(&slots).map_err(|e| format!("Serialization error: {}", e))
}

// ---------------------------------------------------------------------------
// Pure entry points (native-testable; the exports below wrap them)
// ---------------------------------------------------------------------------

fn slot_available(availability_json: &str, slot_json: &str) -> Result<bool, String> {
    let availability = parse_availability(availability_json)?;
    let slot = parse_slot(slot_json)?;
    Ok(slot_engine::is_slot_available(&availability, &slot))
}

fn slot_available_with_events(
    availability_json: &str,
    events_json: &str,
    slot_json: &str,
    honor_buffers: bool,
) -> Result<bool, String> {
    let availability = parse_availability(availability_json)?;
    let events = parse_events(events_json)?;
    let slot = parse_slot(slot_json)?;
    Ok(if honor_buffers {
        slot_engine::is_slot_available_with_buffer(&availability, &events, &slot)
    } else {
        slot_engine::is_slot_available_with_events(&availability, &events, &slot)
    })
}

fn available_slots(
    availability_json: &str,
    events_json: &str,
    range_start: &str,
    range_end: &str,
    duration_m: u32,
) -> Result<String, String> {
    let availability = parse_availability(availability_json)?;
    let events = parse_events(events_json)?;
    let range = parse_range(range_start, range_end)?;
    let slots = slot_engine::list_available_slots(&availability, &events, range, duration_m)
        .map_err(|e| e.to_string())?;
    slots_to_json(slots)
}

fn common_slots(
    attendees_json: &str,
    range_start: &str,
    range_end: &str,
    duration_m: u32,
) -> Result<String, String> {
    let attendees = parse_attendees(attendees_json)?;
    let range = parse_range(range_start, range_end)?;
    let slots = slot_engine::list_common_slots(&attendees, range, duration_m)
        .map_err(|e| e.to_string())?;
    slots_to_json(slots)
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

fn to_js(message: String) -> JsValue {
    JsValue::from_str(&message)
}

/// Is the slot inside one of the availability windows for its weekday?
///
/// `availability_json` is `{include: [{weekday, range: [{hours, minutes}, {hours, minutes}]}]}`;
/// `slot_json` is `{start, durationM}`.
#[wasm_bindgen(js_name = "isSlotAvailable")]
pub fn is_slot_available(availability_json: &str, slot_json: &str) -> Result<bool, JsValue> {
    slot_available(availability_json, slot_json).map_err(to_js)
}

/// Like `isSlotAvailable`, and the slot must not overlap any event (buffers ignored).
#[wasm_bindgen(js_name = "isSlotAvailableWithEvents")]
pub fn is_slot_available_with_events(
    availability_json: &str,
    events_json: &str,
    slot_json: &str,
) -> Result<bool, JsValue> {
    slot_available_with_events(availability_json, events_json, slot_json, false).map_err(to_js)
}

/// Like `isSlotAvailableWithEvents`, with each event widened by its buffer.
#[wasm_bindgen(js_name = "isSlotAvailableWithBuffer")]
pub fn is_slot_available_with_buffer(
    availability_json: &str,
    events_json: &str,
    slot_json: &str,
) -> Result<bool, JsValue> {
    slot_available_with_events(availability_json, events_json, slot_json, true).map_err(to_js)
}

/// Every feasible slot of `duration_m` minutes between `range_start` and
/// `range_end`. Returns a JSON array of `{start, durationM}`.
#[wasm_bindgen(js_name = "listAvailableSlots")]
pub fn list_available_slots(
    availability_json: &str,
    events_json: &str,
    range_start: &str,
    range_end: &str,
    duration_m: u32,
) -> Result<String, JsValue> {
    available_slots(availability_json, events_json, range_start, range_end, duration_m)
        .map_err(to_js)
}

/// Every slot all attendees can make. `attendees_json` is an array of
/// `{availability, events}`. Returns a JSON array of `{start, durationM}`.
#[wasm_bindgen(js_name = "listCommonSlots")]
pub fn list_common_slots(
    attendees_json: &str,
    range_start: &str,
    range_end: &str,
    duration_m: u32,
) -> Result<String, JsValue> {
    common_slots(attendees_json, range_start, range_end, duration_m).map_err(to_js)
}
