//! The caller-facing entry points, from the simplest check to multi-attendee
//! enumeration.

use crate::availability::{is_within_availability, Availability};
use crate::enumerator::enumerate_slots_for;
use crate::error::Result;
use crate::event::Event;
use crate::feasibility::{check_slot, Attendee};
use crate::interval::{overlaps, Interval};
use crate::resolver::enumerate_common_slots;
use crate::slot::Slot;

/// Is `slot` inside one of the availability windows for its weekday?
pub fn is_slot_available(availability: &Availability, slot: &Slot) -> bool {
    slot.checked_end().is_some() && is_within_availability(availability, &slot.interval())
}

/// Like [`is_slot_available`], and the slot must not overlap any event.
///
/// Events are compared by their own `[start, end)`; buffers are ignored here.
/// Use [`is_slot_available_with_buffer`] to honor them.
pub fn is_slot_available_with_events(
    availability: &Availability,
    events: &[Event],
    slot: &Slot,
) -> bool {
    let interval = slot.interval();
    is_slot_available(availability, slot)
        && !events.iter().any(|e| overlaps(&e.interval(), &interval))
}

/// Like [`is_slot_available_with_events`], with each event widened by its buffer.
pub fn is_slot_available_with_buffer(
    availability: &Availability,
    events: &[Event],
    slot: &Slot,
) -> bool {
    check_slot(availability, events, slot).is_ok()
}

/// Every feasible `duration_m`-minute slot in `search_range`.
///
/// # Errors
/// `SlotError::InvalidDuration` for a zero duration, `SlotError::InvalidInterval`
/// for a reversed range.
pub fn list_available_slots<'a>(
    availability: &'a Availability,
    events: &'a [Event],
    search_range: Interval,
    duration_m: u32,
) -> Result<impl Iterator<Item = Slot> + 'a> {
    enumerate_slots_for(availability, events, search_range, duration_m)
}

/// Every `duration_m`-minute slot in `search_range` that all attendees can make.
///
/// # Errors
/// `SlotError::NoAttendees` for an empty list, plus the errors of
/// [`list_available_slots`].
pub fn list_common_slots(
    attendees: &[Attendee],
    search_range: Interval,
    duration_m: u32,
) -> Result<impl Iterator<Item = Slot> + '_> {
    enumerate_common_slots(attendees, search_range, duration_m)
}
