//! # slot-engine
//!
//! Deterministic meeting-slot feasibility for calendar owners.
//!
//! Given each attendee's recurring weekly availability and their existing
//! events (optionally padded by buffers), the engine answers two questions:
//! "is this slot free?" and "which slots in this range are free for everyone?".
//! All instants live on a single reference clock (UTC) and every comparison is
//! half-open, so back-to-back meetings never conflict.
//!
//! ## Modules
//!
//! - [`interval`]: Half-open intervals, `overlaps` and `contains`
//! - [`availability`]: Per-weekday windows and `is_within_availability`
//! - [`event`]: Buffered events and `conflicts`
//! - [`slot`]: Candidate meeting placements
//! - [`feasibility`]: One slot, one attendee
//! - [`enumerator`]: Lazy candidate generation over a search range
//! - [`resolver`]: N-way intersection across attendees
//! - [`api`]: Caller-facing entry points
//! - [`error`]: Error types

pub mod api;
pub mod availability;
pub mod enumerator;
pub mod error;
pub mod event;
pub mod feasibility;
pub mod interval;
pub mod resolver;
pub mod slot;

pub use api::{
    is_slot_available, is_slot_available_with_buffer, is_slot_available_with_events,
    list_available_slots, list_common_slots,
};
pub use availability::{is_within_availability, Availability, TimeOfDay, WeekdayRange};
pub use enumerator::{enumerate_slots, Candidates};
pub use error::SlotError;
pub use event::{conflicts, Buffer, Event};
pub use feasibility::{check, is_feasible, Attendee, Rejection};
pub use interval::{contains, overlaps, Interval};
pub use resolver::{enumerate_common_slots, first_common_slot, is_free_for_all};
pub use slot::{Slot, DEFAULT_SLOT_MINUTES};
