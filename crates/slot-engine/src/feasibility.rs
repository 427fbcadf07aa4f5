//! Single-slot feasibility for one attendee.
//!
//! A slot is feasible when it sits inside one of the attendee's availability
//! windows and conflicts with none of their (buffered) events. Weekdays with no
//! declared window are unavailable: absence of a window never means "free".

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::availability::{is_within_availability, Availability};
use crate::event::{conflicts, Event};
use crate::slot::Slot;

/// One participant's availability and existing events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    pub availability: Availability,
    /// Busy events, in any order. Missing means none.
    #[serde(default)]
    pub events: Vec<Event>,
}

impl Attendee {
    pub fn new(availability: Availability, events: Vec<Event>) -> Self {
        Self {
            availability,
            events,
        }
    }

    /// Validate availability windows and every event.
    pub fn validate(&self) -> crate::error::Result<()> {
        self.availability.validate()?;
        self.events.iter().try_for_each(Event::validate)
    }
}

/// Why a slot was turned down.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Rejection {
    #[error("slot is outside every availability window")]
    OutsideAvailability,

    /// `event_index` points at the first conflicting event in the attendee's list.
    #[error("slot conflicts with event #{event_index}")]
    Conflict { event_index: usize },
}

/// Check `slot` against an availability and an event list, reporting the first
/// reason it fails.
///
/// A slot whose end is past the last representable instant fits no window.
pub fn check_slot(
    availability: &Availability,
    events: &[Event],
    slot: &Slot,
) -> Result<(), Rejection> {
    if slot.checked_end().is_none() || !is_within_availability(availability, &slot.interval()) {
        return Err(Rejection::OutsideAvailability);
    }
    match events.iter().position(|event| conflicts(event, slot)) {
        Some(event_index) => Err(Rejection::Conflict { event_index }),
        None => Ok(()),
    }
}

/// [`check_slot`] on an [`Attendee`].
pub fn check(attendee: &Attendee, slot: &Slot) -> Result<(), Rejection> {
    check_slot(&attendee.availability, &attendee.events, slot)
}

pub fn is_feasible(attendee: &Attendee, slot: &Slot) -> bool {
    check(attendee, slot).is_ok()
}
