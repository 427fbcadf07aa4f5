//! Tests for weekly availability windows and single-attendee feasibility.
//!
//! 2026-03-15 is a Sunday, so 2026-03-16 is Monday (weekday 1) and 2026-03-17
//! is Tuesday (weekday 2).

use chrono::{DateTime, Utc};
use slot_engine::{
    is_feasible, is_within_availability, Attendee, Availability, Slot, TimeOfDay, WeekdayRange,
};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn at(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

fn window(weekday: u8, start: (u8, u8), end: (u8, u8)) -> WeekdayRange {
    WeekdayRange::new(
        weekday,
        TimeOfDay::new(start.0, start.1).unwrap(),
        TimeOfDay::new(end.0, end.1).unwrap(),
    )
    .unwrap()
}

fn monday_nine_to_five() -> Availability {
    Availability::new(vec![window(1, (9, 0), (17, 0))])
}

fn slot(start: &str, minutes: u32) -> Slot {
    Slot::new(at(start), minutes).unwrap()
}

// ── Containment boundaries ──────────────────────────────────────────────────

#[test]
fn slot_at_window_start_is_available() {
    let attendee = Attendee::new(monday_nine_to_five(), vec![]);
    assert!(is_feasible(&attendee, &slot("2026-03-16T09:00:00Z", 30)));
}

#[test]
fn slot_before_window_start_is_unavailable() {
    let attendee = Attendee::new(monday_nine_to_five(), vec![]);
    assert!(!is_feasible(&attendee, &slot("2026-03-16T08:30:00Z", 30)));
}

#[test]
fn slot_ending_at_window_end_is_available() {
    let attendee = Attendee::new(monday_nine_to_five(), vec![]);
    assert!(is_feasible(&attendee, &slot("2026-03-16T16:30:00Z", 30)));
}

#[test]
fn slot_one_minute_past_window_end_is_unavailable() {
    let attendee = Attendee::new(monday_nine_to_five(), vec![]);
    assert!(!is_feasible(&attendee, &slot("2026-03-16T16:31:00Z", 30)));
}

// ── Weekday isolation ───────────────────────────────────────────────────────

#[test]
fn matching_time_on_other_weekday_is_unavailable() {
    let availability = monday_nine_to_five();
    // Tuesday at 10:00 would fit Monday's window by time of day alone.
    let tuesday = slot("2026-03-17T10:00:00Z", 30);
    assert!(!is_within_availability(&availability, &tuesday.interval()));
}

#[test]
fn weekday_without_entries_fails_closed() {
    let attendee = Attendee::new(Availability::default(), vec![]);
    assert!(!is_feasible(&attendee, &slot("2026-03-16T10:00:00Z", 30)));
}

#[test]
fn sunday_is_weekday_zero() {
    let availability = Availability::new(vec![window(0, (10, 0), (12, 0))]);
    let sunday = slot("2026-03-15T10:00:00Z", 60);
    assert!(is_within_availability(&availability, &sunday.interval()));
}

// ── Multiple windows per day ────────────────────────────────────────────────

#[test]
fn any_window_on_the_day_may_contain_the_slot() {
    let availability = Availability::new(vec![
        window(1, (13, 0), (17, 0)),
        window(1, (9, 0), (12, 0)),
    ]);
    assert!(is_within_availability(
        &availability,
        &slot("2026-03-16T09:30:00Z", 60).interval()
    ));
    assert!(is_within_availability(
        &availability,
        &slot("2026-03-16T14:00:00Z", 60).interval()
    ));
}

#[test]
fn slot_spanning_gap_between_windows_is_unavailable() {
    let availability = Availability::new(vec![
        window(1, (9, 0), (12, 0)),
        window(1, (12, 30), (17, 0)),
    ]);
    // 11:45-12:45 straddles the lunch gap, contained in neither window.
    assert!(!is_within_availability(
        &availability,
        &slot("2026-03-16T11:45:00Z", 60).interval()
    ));
}

// ── Midnight ────────────────────────────────────────────────────────────────

#[test]
fn slot_spanning_midnight_is_unavailable() {
    let availability = Availability::new(vec![
        window(1, (22, 0), (23, 59)),
        window(2, (0, 0), (2, 0)),
    ]);
    // Monday 23:45 + 30 min runs into Tuesday.
    assert!(!is_within_availability(
        &availability,
        &slot("2026-03-16T23:45:00Z", 30).interval()
    ));
    // The same length fits on either side of midnight.
    assert!(is_within_availability(
        &availability,
        &slot("2026-03-16T23:00:00Z", 30).interval()
    ));
    assert!(is_within_availability(
        &availability,
        &slot("2026-03-17T00:00:00Z", 30).interval()
    ));
}

// ── Validation ──────────────────────────────────────────────────────────────

#[test]
fn malformed_windows_are_rejected_by_validate() {
    let parsed: Availability = serde_json::from_str(
        r#"{"include":[{"weekday":7,"range":[{"hours":9,"minutes":0},{"hours":10,"minutes":0}]}]}"#,
    )
    .unwrap();
    assert!(parsed.validate().is_err());

    let reversed: Availability = serde_json::from_str(
        r#"{"include":[{"weekday":1,"range":[{"hours":10,"minutes":0},{"hours":9,"minutes":0}]}]}"#,
    )
    .unwrap();
    assert!(reversed.validate().is_err());
    // Unvalidated, a reversed window still never admits anything.
    assert!(!is_within_availability(
        &reversed,
        &slot("2026-03-16T09:15:00Z", 15).interval()
    ));
}

#[test]
fn availability_parses_from_json() {
    let parsed: Availability = serde_json::from_str(
        r#"{"include":[{"weekday":1,"range":[{"hours":9,"minutes":0},{"hours":17,"minutes":0}]}]}"#,
    )
    .unwrap();
    assert_eq!(parsed, monday_nine_to_five());
    assert!(parsed.validate().is_ok());
}
