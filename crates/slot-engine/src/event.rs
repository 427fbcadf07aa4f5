//! Existing commitments and their buffered busy intervals.
//!
//! [`Event::busy_interval`] is the only place buffer padding is applied;
//! everything above this module asks [`conflicts`] instead of re-deriving it.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::interval::{overlaps, Interval};
use crate::slot::Slot;

/// Padding around an event, in minutes. Missing fields mean zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Buffer {
    /// Minutes blocked before the event starts.
    #[serde(default)]
    pub before: u32,
    /// Minutes blocked after the event ends.
    #[serde(default)]
    pub after: u32,
}

impl Buffer {
    pub fn new(before: u32, after: u32) -> Self {
        Self { before, after }
    }
}

/// An existing commitment on an attendee's calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub start: DateTime<Utc>,
    /// Exclusive; must follow `start`.
    pub end: DateTime<Utc>,
    /// Padding around the event. `None` means no padding on either side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer: Option<Buffer>,
}

impl Event {
    /// # Errors
    /// Returns `SlotError::InvalidInterval` unless `start < end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        let event = Self {
            start,
            end,
            buffer: None,
        };
        event.validate()?;
        Ok(event)
    }

    pub fn with_buffer(mut self, buffer: Buffer) -> Self {
        self.buffer = Some(buffer);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.start >= self.end {
            return Err(SlotError::InvalidInterval {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// The raw `[start, end)` of the event, ignoring any buffer.
    pub fn interval(&self) -> Interval {
        Interval {
            start: self.start,
            end: self.end,
        }
    }

    /// `[start - before, end + after)`, clamped to the representable range.
    pub fn busy_interval(&self) -> Interval {
        let buffer = self.buffer.unwrap_or_default();
        Interval {
            start: self
                .start
                .checked_sub_signed(Duration::minutes(i64::from(buffer.before)))
                .unwrap_or(DateTime::<Utc>::MIN_UTC),
            end: self
                .end
                .checked_add_signed(Duration::minutes(i64::from(buffer.after)))
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        }
    }
}

/// True iff `slot` overlaps the event's buffered busy interval.
pub fn conflicts(event: &Event, slot: &Slot) -> bool {
    overlaps(&event.busy_interval(), &slot.interval())
}
