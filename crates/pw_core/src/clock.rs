//! Wall-clock access for the time-dependent rules.
//!
//! Rules 9, 22 and 36 look at the player's local time. The evaluator never
//! calls `chrono::Local` directly; it takes a [`Clock`] so tests can pin the
//! instant.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Source of the current local date and time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the host's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Build from calendar parts. Out-of-range parts fall back to chrono's
    /// defaults (1970-01-01, midnight).
    pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        let date = NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default();
        let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default();
        Self(NaiveDateTime::new(date, time))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike, Weekday};

    #[test]
    fn test_fixed_clock_parts() {
        let clock = FixedClock::at(2024, 3, 15, 9, 5);
        let now = clock.now();
        assert_eq!(now.weekday(), Weekday::Fri);
        assert_eq!(now.hour(), 9);
        assert_eq!(now.minute(), 5);
    }

    #[test]
    fn test_fixed_clock_invalid_parts_do_not_panic() {
        let clock = FixedClock::at(2024, 13, 40, 25, 61);
        assert_eq!(clock.now().date(), NaiveDate::default());
    }
}
