//! Discretize a search range into fixed-length candidate slots and keep the
//! feasible ones.
//!
//! A cursor starts at the beginning of the range and advances in steps of the
//! slot duration while it is still before the end of the range. The range only
//! bounds how many candidates are generated; whether a candidate is emitted is
//! decided by [`crate::feasibility`] alone. Everything is lazy: dropping the
//! iterator stops the enumeration.

use std::iter::FusedIterator;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, trace};

use crate::availability::Availability;
use crate::error::{Result, SlotError};
use crate::event::Event;
use crate::feasibility::{check_slot, Attendee};
use crate::interval::Interval;
use crate::slot::Slot;

/// Every candidate slot in a search range, feasible or not.
#[derive(Debug, Clone)]
pub struct Candidates {
    cursor: DateTime<Utc>,
    end: DateTime<Utc>,
    duration_m: u32,
}

/// Build the candidate generator for `search_range` stepped at `duration_m`.
///
/// # Errors
/// Returns `SlotError::InvalidDuration` for a zero duration and
/// `SlotError::InvalidInterval` when the range ends before it starts.
pub fn candidates(search_range: Interval, duration_m: u32) -> Result<Candidates> {
    if duration_m == 0 {
        return Err(SlotError::InvalidDuration(duration_m));
    }
    if search_range.end < search_range.start {
        return Err(SlotError::InvalidInterval {
            start: search_range.start,
            end: search_range.end,
        });
    }
    Ok(Candidates {
        cursor: search_range.start,
        end: search_range.end,
        duration_m,
    })
}

impl Candidates {
    fn step(&self) -> Duration {
        Duration::minutes(i64::from(self.duration_m))
    }

    fn remaining(&self) -> usize {
        if self.cursor >= self.end {
            return 0;
        }
        let step_ms = i64::from(self.duration_m) * 60_000;
        let total = self.end - self.cursor;
        let whole = total.num_milliseconds() / step_ms;
        // A partial step at the tail still yields one more candidate.
        let n = if Duration::milliseconds(whole * step_ms) < total {
            whole + 1
        } else {
            whole
        };
        usize::try_from(n).unwrap_or(usize::MAX)
    }
}

impl Iterator for Candidates {
    type Item = Slot;

    fn next(&mut self) -> Option<Slot> {
        if self.cursor >= self.end {
            return None;
        }
        let slot = Slot {
            start: self.cursor,
            duration_m: self.duration_m,
        };
        self.cursor = self
            .cursor
            .checked_add_signed(self.step())
            .unwrap_or(self.end);
        Some(slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for Candidates {}

impl FusedIterator for Candidates {}

/// Feasible slots for one availability/event pair, lazily.
///
/// # Errors
/// Same as [`candidates`].
pub fn enumerate_slots_for<'a>(
    availability: &'a Availability,
    events: &'a [Event],
    search_range: Interval,
    duration_m: u32,
) -> Result<impl Iterator<Item = Slot> + 'a> {
    let candidates = candidates(search_range, duration_m)?;
    debug!(
        start = %search_range.start,
        end = %search_range.end,
        duration_m,
        candidates = candidates.len(),
        events = events.len(),
        "enumerating slots"
    );
    Ok(candidates.filter(move |slot| match check_slot(availability, events, slot) {
        Ok(()) => true,
        Err(reason) => {
            trace!(start = %slot.start, %reason, "candidate rejected");
            false
        }
    }))
}

/// Feasible slots for one attendee, lazily.
///
/// # Errors
/// Same as [`candidates`].
pub fn enumerate_slots(
    attendee: &Attendee,
    search_range: Interval,
    duration_m: u32,
) -> Result<impl Iterator<Item = Slot> + '_> {
    enumerate_slots_for(
        &attendee.availability,
        &attendee.events,
        search_range,
        duration_m,
    )
}
