//! Error types for slot-engine operations.
//!
//! Predicates (`is_feasible`, `conflicts`, ...) never fail: malformed
//! availability simply evaluates to "not available". Errors are raised only
//! where a caller hands the engine a value that violates a model invariant.

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    /// An interval whose end precedes its start (or, for events, does not
    /// strictly follow it).
    #[error("Invalid interval: {start} .. {end}")]
    InvalidInterval {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    /// A slot or step duration of zero minutes.
    #[error("Invalid duration: {0} minutes (must be positive)")]
    InvalidDuration(u32),

    #[error("Invalid time of day: {hours:02}:{minutes:02}")]
    InvalidTimeOfDay { hours: u8, minutes: u8 },

    #[error("Invalid weekday: {0} (expected 0-6, 0 = Sunday)")]
    InvalidWeekday(u8),

    /// A weekday window whose start does not strictly precede its end.
    #[error("Invalid availability window on weekday {weekday}: start must precede end")]
    InvalidWindow { weekday: u8 },

    #[error("No attendees given")]
    NoAttendees,
}

pub type Result<T> = std::result::Result<T, SlotError>;
