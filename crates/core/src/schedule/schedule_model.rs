//! Schedule domain models and calendar arithmetic.

use chrono::{Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Unit of recurrence for a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Periodicity {
    Days,
    Weeks,
    Months,
    Years,
}

/// A recurrence rule: step a date by `interval` units of `periodicity`.
///
/// Immutable once constructed; replacing a schedule means constructing a
/// new value. `interval >= 1` is enforced at construction, so every step
/// strictly moves the date in the requested direction.
///
/// Stepping is a pure function of (periodicity, interval, date): no hidden
/// state and no dependency on the current time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawSchedule")]
pub struct Schedule {
    periodicity: Periodicity,
    interval: u32,
}

/// Unvalidated mirror of [`Schedule`] so deserialization goes through
/// [`Schedule::new`] and cannot smuggle in a zero interval.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSchedule {
    periodicity: Periodicity,
    interval: u32,
}

impl TryFrom<RawSchedule> for Schedule {
    type Error = Error;

    fn try_from(raw: RawSchedule) -> Result<Self> {
        Schedule::new(raw.periodicity, raw.interval)
    }
}

impl Schedule {
    /// Creates a schedule, rejecting a zero interval.
    pub fn new(periodicity: Periodicity, interval: u32) -> Result<Self> {
        if interval < 1 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Schedule interval must be at least 1".to_string(),
            )));
        }
        Ok(Schedule {
            periodicity,
            interval,
        })
    }

    pub fn periodicity(&self) -> Periodicity {
        self.periodicity
    }

    pub fn interval(&self) -> u32 {
        self.interval
    }

    /// The occurrence one step after `date`.
    ///
    /// Month and year steps keep the anchor day-of-month, clamped to the
    /// last valid day of the target month (Jan 31 + 1 month = Feb 28/29).
    /// Because of the clamping, `next(previous(d))` does not always return
    /// `d` when `d` sits past the 28th of a month; the anchor day is not
    /// recoverable once clamped.
    pub fn next(&self, date: NaiveDate) -> NaiveDate {
        self.shift(date, true)
    }

    /// The occurrence one step before `date`. Same clamping rules as
    /// [`Schedule::next`].
    pub fn previous(&self, date: NaiveDate) -> NaiveDate {
        self.shift(date, false)
    }

    fn shift(&self, date: NaiveDate, forward: bool) -> NaiveDate {
        let shifted = match self.periodicity {
            Periodicity::Days => Self::shift_days(date, i64::from(self.interval), forward),
            Periodicity::Weeks => Self::shift_days(date, i64::from(self.interval) * 7, forward),
            Periodicity::Months => Self::shift_months(date, self.interval, forward),
            Periodicity::Years => {
                Self::shift_months(date, self.interval.saturating_mul(12), forward)
            }
        };

        // Saturate at the calendar bounds instead of falling back towards
        // `date`, so a step never reverses direction.
        shifted.unwrap_or(if forward {
            NaiveDate::MAX
        } else {
            NaiveDate::MIN
        })
    }

    fn shift_days(date: NaiveDate, days: i64, forward: bool) -> Option<NaiveDate> {
        let delta = Duration::days(days);
        if forward {
            date.checked_add_signed(delta)
        } else {
            date.checked_sub_signed(delta)
        }
    }

    fn shift_months(date: NaiveDate, months: u32, forward: bool) -> Option<NaiveDate> {
        let delta = Months::new(months);
        if forward {
            date.checked_add_months(delta)
        } else {
            date.checked_sub_months(delta)
        }
    }
}
