//! Candidate meeting placements.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::interval::Interval;

/// Default candidate length used when a caller does not choose one.
pub const DEFAULT_SLOT_MINUTES: u32 = 30;

/// A meeting placement: `[start, start + duration_m)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    /// First instant of the meeting.
    pub start: DateTime<Utc>,
    /// Length in minutes; serialized as `durationM`. Must be positive.
    pub duration_m: u32,
}

impl Slot {
    /// # Errors
    /// Returns `SlotError::InvalidDuration` when `duration_m` is zero.
    pub fn new(start: DateTime<Utc>, duration_m: u32) -> Result<Self> {
        let slot = Self { start, duration_m };
        slot.validate()?;
        Ok(slot)
    }

    pub fn validate(&self) -> Result<()> {
        if self.duration_m == 0 {
            return Err(SlotError::InvalidDuration(self.duration_m));
        }
        Ok(())
    }

    /// `start + duration_m`, or `None` when that lies past `DateTime::<Utc>::MAX_UTC`.
    pub fn checked_end(&self) -> Option<DateTime<Utc>> {
        self.start
            .checked_add_signed(Duration::minutes(i64::from(self.duration_m)))
    }

    /// `start + duration_m`, saturating at `DateTime::<Utc>::MAX_UTC`.
    pub fn end(&self) -> DateTime<Utc> {
        self.checked_end().unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    pub fn interval(&self) -> Interval {
        Interval {
            start: self.start,
            end: self.end(),
        }
    }
}
