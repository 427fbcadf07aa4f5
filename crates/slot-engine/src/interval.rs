//! Half-open time intervals and the overlap/containment predicates every
//! higher-level check is built on.
//!
//! All intervals are `[start, end)`: an interval that ends exactly when another
//! starts does NOT overlap it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// A half-open interval `[start, end)` on the reference clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    /// Inclusive.
    pub start: DateTime<Utc>,
    /// Exclusive.
    pub end: DateTime<Utc>,
}

impl Interval {
    /// Build an interval, rejecting `end < start`. Zero-length intervals are allowed.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidInterval` when `end` precedes `start`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if end < start {
            return Err(SlotError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// See [`overlaps`].
    pub fn overlaps(&self, other: &Interval) -> bool {
        overlaps(self, other)
    }

    /// See [`contains`].
    pub fn contains(&self, inner: &Interval) -> bool {
        contains(self, inner)
    }
}

/// True iff `a.start < b.end && b.start < a.end`.
///
/// A zero-length interval overlaps nothing, even when it sits strictly inside
/// the other interval.
pub fn overlaps(a: &Interval, b: &Interval) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.start < b.end && b.start < a.end
}

/// True iff `inner` lies entirely within `outer` (boundaries inclusive).
pub fn contains(outer: &Interval, inner: &Interval) -> bool {
    inner.start >= outer.start && inner.end <= outer.end
}
