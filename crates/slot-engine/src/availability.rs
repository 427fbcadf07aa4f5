//! Recurring weekly availability: the per-weekday windows an owner can be
//! booked in.
//!
//! Windows are wall-clock `TimeOfDay` pairs that get materialized onto a
//! concrete calendar day of the reference clock (UTC) before any comparison.
//! A window never crosses midnight, so a slot that spans two calendar days can
//! never be contained in one.

use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::interval::{contains, Interval};

/// Wall-clock time of day, weekday-relative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeOfDay {
    /// 0-23.
    pub hours: u8,
    /// 0-59.
    pub minutes: u8,
}

impl TimeOfDay {
    /// # Errors
    /// Returns `SlotError::InvalidTimeOfDay` unless `hours <= 23 && minutes <= 59`.
    pub fn new(hours: u8, minutes: u8) -> Result<Self> {
        let tod = Self { hours, minutes };
        tod.validate()?;
        Ok(tod)
    }

    pub fn validate(&self) -> Result<()> {
        if self.hours > 23 || self.minutes > 59 {
            return Err(SlotError::InvalidTimeOfDay {
                hours: self.hours,
                minutes: self.minutes,
            });
        }
        Ok(())
    }

    fn to_naive_time(self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(u32::from(self.hours), u32::from(self.minutes), 0)
    }
}

/// One open window on one weekday. Weekday 0 is Sunday, 6 is Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekdayRange {
    /// 0 = Sunday through 6 = Saturday.
    pub weekday: u8,
    /// `[start, end]` on that weekday; `start` must precede `end`.
    pub range: [TimeOfDay; 2],
}

impl WeekdayRange {
    /// # Errors
    /// Returns `SlotError::InvalidWeekday` for `weekday > 6`, and
    /// `SlotError::InvalidWindow` unless `start` strictly precedes `end`.
    pub fn new(weekday: u8, start: TimeOfDay, end: TimeOfDay) -> Result<Self> {
        let range = Self {
            weekday,
            range: [start, end],
        };
        range.validate()?;
        Ok(range)
    }

    pub fn start(&self) -> TimeOfDay {
        self.range[0]
    }

    pub fn end(&self) -> TimeOfDay {
        self.range[1]
    }

    pub fn validate(&self) -> Result<()> {
        if self.weekday > 6 {
            return Err(SlotError::InvalidWeekday(self.weekday));
        }
        self.start().validate()?;
        self.end().validate()?;
        if self.start() >= self.end() {
            return Err(SlotError::InvalidWindow {
                weekday: self.weekday,
            });
        }
        Ok(())
    }

    /// Anchor this window onto `date`, producing fresh instants.
    ///
    /// Returns `None` when the window is malformed (unrepresentable time or
    /// `start >= end`), which callers treat as "no window".
    pub fn materialize(&self, date: NaiveDate) -> Option<Interval> {
        let start = date.and_time(self.start().to_naive_time()?).and_utc();
        let end = date.and_time(self.end().to_naive_time()?).and_utc();
        if start >= end {
            return None;
        }
        Interval::new(start, end).ok()
    }
}

/// The set of weekly windows an owner is reachable in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    /// Open windows, in any order. Several may share a weekday.
    pub include: Vec<WeekdayRange>,
}

impl Availability {
    pub fn new(include: Vec<WeekdayRange>) -> Self {
        Self { include }
    }

    /// Validate every window. The predicates below never call this; they fail
    /// closed on malformed windows instead.
    pub fn validate(&self) -> Result<()> {
        self.include.iter().try_for_each(WeekdayRange::validate)
    }

    /// All windows open on `date`, materialized onto that day.
    pub fn windows_on(&self, date: NaiveDate) -> impl Iterator<Item = Interval> + '_ {
        let weekday = weekday_index(date);
        self.include
            .iter()
            .filter(move |r| r.weekday == weekday)
            .filter_map(move |r| r.materialize(date))
    }
}

/// Day-of-week index with Sunday as 0.
pub fn weekday_index(date: NaiveDate) -> u8 {
    // num_days_from_sunday() is always 0..=6
    date.weekday().num_days_from_sunday() as u8
}

/// True iff `interval` fits entirely inside one window declared for the
/// weekday of `interval.start`.
///
/// Windows are materialized on the calendar day of `interval.start`; an
/// interval running past midnight cannot be contained in any of them.
pub fn is_within_availability(availability: &Availability, interval: &Interval) -> bool {
    availability
        .windows_on(interval.start.date_naive())
        .any(|window| contains(&window, interval))
}
