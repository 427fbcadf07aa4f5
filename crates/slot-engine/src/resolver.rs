//! Multi-attendee resolution: a candidate survives only if it is feasible for
//! every attendee.
//!
//! This is a conjunction, never a union. Attendee order changes how early the
//! check short-circuits, not which slots come out.

use tracing::{debug, trace};

use crate::enumerator::candidates;
use crate::error::{Result, SlotError};
use crate::feasibility::{check, Attendee};
use crate::interval::Interval;
use crate::slot::Slot;

/// True iff `slot` is feasible for each attendee. Stops at the first attendee
/// who cannot make it.
pub fn is_free_for_all(attendees: &[Attendee], slot: &Slot) -> bool {
    attendees.iter().enumerate().all(|(i, attendee)| match check(attendee, slot) {
        Ok(()) => true,
        Err(reason) => {
            trace!(start = %slot.start, attendee = i, %reason, "candidate rejected");
            false
        }
    })
}

/// Slots in `search_range` that every attendee can make, lazily.
///
/// # Errors
/// Returns `SlotError::NoAttendees` for an empty attendee list, otherwise the
/// same errors as [`crate::enumerator::candidates`].
pub fn enumerate_common_slots(
    attendees: &[Attendee],
    search_range: Interval,
    duration_m: u32,
) -> Result<impl Iterator<Item = Slot> + '_> {
    if attendees.is_empty() {
        return Err(SlotError::NoAttendees);
    }
    let candidates = candidates(search_range, duration_m)?;
    debug!(
        start = %search_range.start,
        end = %search_range.end,
        duration_m,
        candidates = candidates.len(),
        attendees = attendees.len(),
        "enumerating common slots"
    );
    Ok(candidates.filter(move |slot| is_free_for_all(attendees, slot)))
}

/// The earliest slot every attendee can make, if any.
///
/// # Errors
/// Same as [`enumerate_common_slots`].
pub fn first_common_slot(
    attendees: &[Attendee],
    search_range: Interval,
    duration_m: u32,
) -> Result<Option<Slot>> {
    Ok(enumerate_common_slots(attendees, search_range, duration_m)?.next())
}
