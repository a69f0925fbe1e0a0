//! Time-unit configuration and the `TimeOfDay` value.
//!
//! A calendar declares how many hours make a day, minutes an hour, and
//! seconds a minute.  Everything else in the crate works in whole seconds
//! and converts through [`TimeUnits`].

use alm_core::{ensure, ensure_config};
use alm_core::errors::Result;
use serde::{Deserialize, Serialize};

/// The size of a calendar's clock units.
///
/// Defaults to the familiar 24/60/60 clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimeUnits {
    /// Hours in one day.
    pub hours_per_day: u32,
    /// Minutes in one hour.
    pub minutes_per_hour: u32,
    /// Seconds in one minute.
    pub seconds_per_minute: u32,
}

impl Default for TimeUnits {
    fn default() -> Self {
        Self {
            hours_per_day: 24,
            minutes_per_hour: 60,
            seconds_per_minute: 60,
        }
    }
}

impl TimeUnits {
    /// Seconds in one hour.
    pub fn seconds_per_hour(&self) -> i64 {
        self.minutes_per_hour as i64 * self.seconds_per_minute as i64
    }

    /// Seconds in one day.
    pub fn seconds_per_day(&self) -> i64 {
        self.hours_per_day as i64 * self.seconds_per_hour()
    }

    /// Decompose a seconds-of-day offset into a [`TimeOfDay`].
    ///
    /// `seconds` must already be reduced into `[0, seconds_per_day)`.
    pub fn time_of_day(&self, seconds: i64) -> TimeOfDay {
        debug_assert!(
            (0..self.seconds_per_day()).contains(&seconds),
            "seconds-of-day {seconds} not reduced into [0, {})",
            self.seconds_per_day()
        );
        let hour = seconds.div_euclid(self.seconds_per_hour());
        let rem = seconds.rem_euclid(self.seconds_per_hour());
        let minute = rem.div_euclid(self.seconds_per_minute as i64);
        let second = rem.rem_euclid(self.seconds_per_minute as i64);
        TimeOfDay {
            hour: hour as u32,
            minute: minute as u32,
            second: second as u32,
        }
    }

    /// Compose a [`TimeOfDay`] back into a seconds-of-day offset.
    pub fn seconds_of(&self, time: TimeOfDay) -> i64 {
        time.hour as i64 * self.seconds_per_hour()
            + time.minute as i64 * self.seconds_per_minute as i64
            + time.second as i64
    }

    /// Check that a [`TimeOfDay`] fits within these units.
    pub fn check(&self, time: TimeOfDay) -> Result<()> {
        ensure!(
            time.hour < self.hours_per_day,
            "hour {} out of range [0, {})",
            time.hour,
            self.hours_per_day
        );
        ensure!(
            time.minute < self.minutes_per_hour,
            "minute {} out of range [0, {})",
            time.minute,
            self.minutes_per_hour
        );
        ensure!(
            time.second < self.seconds_per_minute,
            "second {} out of range [0, {})",
            time.second,
            self.seconds_per_minute
        );
        Ok(())
    }

    pub(crate) fn validate(&self) -> Result<()> {
        ensure_config!(self.hours_per_day >= 1, "hoursPerDay must be >= 1");
        ensure_config!(self.minutes_per_hour >= 1, "minutesPerHour must be >= 1");
        ensure_config!(self.seconds_per_minute >= 1, "secondsPerMinute must be >= 1");
        Ok(())
    }
}

/// A clock reading within one day.
///
/// Bounds depend on the owning calendar's [`TimeUnits`]; an absent time on a
/// date means the start of the day.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct TimeOfDay {
    /// Hour of the day (0-based).
    pub hour: u32,
    /// Minute of the hour (0-based).
    pub minute: u32,
    /// Second of the minute (0-based).
    pub second: u32,
}

impl TimeOfDay {
    /// Create a time-of-day reading.
    pub fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_clock() {
        let units = TimeUnits::default();
        assert_eq!(units.seconds_per_hour(), 3600);
        assert_eq!(units.seconds_per_day(), 86_400);
    }

    #[test]
    fn decompose_compose_roundtrip() {
        let units = TimeUnits::default();
        for &s in &[0, 1, 59, 60, 3599, 3600, 86_399] {
            let t = units.time_of_day(s);
            assert_eq!(units.seconds_of(t), s, "roundtrip failed for {s}");
        }
        assert_eq!(units.time_of_day(3_661), TimeOfDay::new(1, 1, 1));
    }

    #[test]
    fn nonstandard_clock() {
        // Ten-hour days with hundred-minute hours
        let units = TimeUnits {
            hours_per_day: 10,
            minutes_per_hour: 100,
            seconds_per_minute: 100,
        };
        assert_eq!(units.seconds_per_day(), 100_000);
        let t = units.time_of_day(12_345);
        assert_eq!(t, TimeOfDay::new(1, 23, 45));
        assert_eq!(units.seconds_of(t), 12_345);
    }

    #[test]
    fn check_bounds() {
        let units = TimeUnits::default();
        assert!(units.check(TimeOfDay::new(23, 59, 59)).is_ok());
        assert!(units.check(TimeOfDay::new(24, 0, 0)).is_err());
        assert!(units.check(TimeOfDay::new(0, 60, 0)).is_err());
        assert!(units.check(TimeOfDay::new(0, 0, 60)).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(TimeOfDay::new(9, 5, 0).to_string(), "09:05:00");
    }
}
