//! Tests for buffered event conflicts and the reasons a slot is rejected.

use chrono::{DateTime, TimeZone, Utc};
use slot_engine::{check, conflicts, Attendee, Availability, Buffer, Event, Rejection, Slot};
use slot_engine::{TimeOfDay, WeekdayRange};

/// Helper: an instant on Monday 2026-03-16.
fn mon(hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 16, hour, min, 0).unwrap()
}

fn event(start: (u32, u32), end: (u32, u32)) -> Event {
    Event::new(mon(start.0, start.1), mon(end.0, end.1)).unwrap()
}

fn slot(hour: u32, min: u32, minutes: u32) -> Slot {
    Slot::new(mon(hour, min), minutes).unwrap()
}

fn workday() -> Availability {
    Availability::new(vec![WeekdayRange::new(
        1,
        TimeOfDay::new(9, 0).unwrap(),
        TimeOfDay::new(17, 0).unwrap(),
    )
    .unwrap()])
}

#[test]
fn before_buffer_widens_busy_interval() {
    // Event 10:00-10:30 with 15 minutes before → busy 09:45-10:30.
    let e = event((10, 0), (10, 30)).with_buffer(Buffer::new(15, 0));

    assert!(conflicts(&e, &slot(9, 45, 15)), "09:45-10:00 hits the buffer");
    assert!(!conflicts(&e, &slot(9, 30, 15)), "09:30-09:45 ends as buffer starts");
}

#[test]
fn after_buffer_widens_busy_interval() {
    // Event 10:00-10:30 with 10 minutes after → busy 10:00-10:40.
    let e = event((10, 0), (10, 30)).with_buffer(Buffer::new(0, 10));

    assert!(conflicts(&e, &slot(10, 30, 30)));
    assert!(!conflicts(&e, &slot(10, 40, 20)));
}

#[test]
fn unbuffered_event_adjacent_slots_do_not_conflict() {
    let e = event((10, 0), (11, 0));
    assert!(!conflicts(&e, &slot(9, 30, 30)));
    assert!(!conflicts(&e, &slot(11, 0, 30)));
    assert!(conflicts(&e, &slot(10, 30, 60)));
}

#[test]
fn slot_covering_event_conflicts() {
    let e = event((10, 15), (10, 45));
    assert!(conflicts(&e, &slot(10, 0, 60)));
}

#[test]
fn check_reports_first_conflicting_event() {
    let attendee = Attendee::new(
        workday(),
        vec![
            event((9, 0), (9, 30)),
            event((11, 0), (12, 0)),
            event((11, 30), (12, 30)),
        ],
    );

    assert_eq!(
        check(&attendee, &slot(11, 30, 30)),
        Err(Rejection::Conflict { event_index: 1 })
    );
    assert_eq!(check(&attendee, &slot(10, 0, 60)), Ok(()));
}

#[test]
fn check_reports_availability_before_events() {
    // The slot is outside the window and also overlaps an event; the window wins.
    let attendee = Attendee::new(workday(), vec![event((17, 0), (18, 0))]);
    assert_eq!(
        check(&attendee, &slot(17, 0, 30)),
        Err(Rejection::OutsideAvailability)
    );
}

#[test]
fn rejection_serializes_with_reason_tag() {
    let json = serde_json::to_value(Rejection::Conflict { event_index: 2 }).unwrap();
    assert_eq!(json["reason"], "conflict");
    assert_eq!(json["event_index"], 2);
}
