// Rust guideline compliant 2026-10-12

//! Emergency slot generation.
//!
//! Urgent bookings are offered whole-hour start times that are at least
//! [`EMERGENCY_LEAD_TIME_HOURS`] away and at most [`EMERGENCY_WINDOW_HOURS`]
//! away from `now`, restricted to business hours on each calendar date.
//! The window always ends on the next calendar date, so candidates are
//! tagged either "today" or "tomorrow".

use crate::{Error, Result};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::FusedIterator;

/// Minimum notice for an urgent booking.
pub const EMERGENCY_LEAD_TIME_HOURS: i64 = 2;

/// How far ahead urgent bookings may be placed.
pub const EMERGENCY_WINDOW_HOURS: i64 = 24;

/// Opening and closing hour (both inclusive) for slot start times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessHours {
    open_hour: u32,
    close_hour: u32,
}

impl BusinessHours {
    /// 08:00 to 22:00.
    pub const DEFAULT: BusinessHours = BusinessHours {
        open_hour: 8,
        close_hour: 22,
    };

    /// Creates business hours.
    ///
    /// # Errors
    ///
    /// Returns a validation error unless `open_hour < close_hour <= 23`.
    pub fn new(open_hour: u32, close_hour: u32) -> Result<Self> {
        if open_hour >= close_hour || close_hour > 23 {
            return Err(Error::Validation(format!(
                "Business hours must satisfy open < close <= 23, got {}-{}",
                open_hour, close_hour
            )));
        }
        Ok(Self {
            open_hour,
            close_hour,
        })
    }

    /// First hour a slot may start.
    pub fn open_hour(&self) -> u32 {
        self.open_hour
    }

    /// Last hour a slot may start.
    pub fn close_hour(&self) -> u32 {
        self.close_hour
    }

    /// Returns true if `hour` is within opening hours.
    pub fn contains(&self, hour: u32) -> bool {
        (self.open_hour..=self.close_hour).contains(&hour)
    }

    fn opening_on(&self, date: NaiveDate) -> Option<NaiveDateTime> {
        date.and_hms_opt(self.open_hour, 0, 0)
    }
}

impl Default for BusinessHours {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Display label for a slot's date. Carries no scheduling meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotDay {
    /// Same calendar date as `now`.
    Today,
    /// The following calendar date.
    Tomorrow,
}

impl fmt::Display for SlotDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotDay::Today => f.write_str("today"),
            SlotDay::Tomorrow => f.write_str("tomorrow"),
        }
    }
}

/// A candidate start time for an urgent booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Calendar date.
    pub date: NaiveDate,
    /// Whole-hour start time.
    pub time: NaiveTime,
    /// Today/tomorrow label.
    pub day: SlotDay,
}

impl Slot {
    /// Returns the combined date and time.
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}

/// Iterator over emergency slots, earliest first.
///
/// Created by [`emergency_slots`]. It is finite and yields each slot once.
#[derive(Debug, Clone)]
pub struct EmergencySlots {
    next: Option<NaiveDateTime>,
    window_end: NaiveDateTime,
    today: NaiveDate,
    hours: BusinessHours,
}

impl Iterator for EmergencySlots {
    type Item = Slot;

    fn next(&mut self) -> Option<Slot> {
        let candidate = self.next?;
        let hour = candidate.hour();

        let candidate = if hour < self.hours.open_hour {
            self.hours.opening_on(candidate.date())
        } else if hour > self.hours.close_hour {
            candidate
                .date()
                .succ_opt()
                .and_then(|date| self.hours.opening_on(date))
        } else {
            Some(candidate)
        };

        let Some(candidate) = candidate.filter(|c| *c <= self.window_end) else {
            self.next = None;
            return None;
        };

        self.next = candidate.checked_add_signed(Duration::hours(1));

        let day = if candidate.date() == self.today {
            SlotDay::Today
        } else {
            SlotDay::Tomorrow
        };
        Some(Slot {
            date: candidate.date(),
            time: candidate.time(),
            day,
        })
    }
}

impl FusedIterator for EmergencySlots {}

/// Generates the urgent-booking slots available at `now`.
///
/// Every yielded slot satisfies `now + 2h <= slot <= now + 24h` and starts
/// within `hours` on its date. When `now + 2h` is not on the hour, the first
/// candidate is the next whole hour.
///
/// # Arguments
///
/// * `now` - Current local time
/// * `hours` - Business hours applied to each date
///
/// # Returns
///
/// A finite iterator of slots in chronological order.
pub fn emergency_slots(now: NaiveDateTime, hours: BusinessHours) -> EmergencySlots {
    let earliest = now.checked_add_signed(Duration::hours(EMERGENCY_LEAD_TIME_HOURS));
    let window_end = now
        .checked_add_signed(Duration::hours(EMERGENCY_WINDOW_HOURS))
        .unwrap_or(NaiveDateTime::MAX);

    EmergencySlots {
        next: earliest.and_then(ceil_to_hour),
        window_end,
        today: now.date(),
        hours,
    }
}

/// Returns true if `(date, time)` is one of the slots offered at `now`.
pub fn is_emergency_slot(
    now: NaiveDateTime,
    hours: BusinessHours,
    date: NaiveDate,
    time: NaiveTime,
) -> bool {
    emergency_slots(now, hours).any(|slot| slot.date == date && slot.time == time)
}

fn ceil_to_hour(instant: NaiveDateTime) -> Option<NaiveDateTime> {
    let truncated = instant
        .date()
        .and_hms_opt(instant.hour(), 0, 0)?;
    if truncated == instant {
        Some(truncated)
    } else {
        truncated.checked_add_signed(Duration::hours(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn ceil_keeps_whole_hours() {
        assert_eq!(ceil_to_hour(dt(2024, 1, 15, 13, 0)), Some(dt(2024, 1, 15, 13, 0)));
        assert_eq!(ceil_to_hour(dt(2024, 1, 15, 13, 1)), Some(dt(2024, 1, 15, 14, 0)));
        assert_eq!(ceil_to_hour(dt(2024, 1, 15, 23, 30)), Some(dt(2024, 1, 16, 0, 0)));
    }

    #[test]
    fn business_hours_bounds() {
        assert!(BusinessHours::new(8, 22).is_ok());
        assert!(BusinessHours::new(22, 8).is_err());
        assert!(BusinessHours::new(8, 8).is_err());
        assert!(BusinessHours::new(8, 24).is_err());
        assert!(BusinessHours::DEFAULT.contains(22));
        assert!(!BusinessHours::DEFAULT.contains(23));
    }

    #[test]
    fn exhausted_iterator_stays_exhausted() {
        let mut slots = emergency_slots(dt(2024, 1, 15, 11, 0), BusinessHours::DEFAULT);
        assert_eq!(slots.by_ref().count(), 14);
        assert!(slots.next().is_none());
        assert!(slots.next().is_none());
    }
}
