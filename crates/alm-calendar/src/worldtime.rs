//! World-time conversion: a scalar count of seconds ↔ a dated clock reading.
//!
//! World time is the host application's single source of truth for "now":
//! a monotonically increasing, possibly fractional count of seconds.  What
//! second 0 *means* depends on the calendar's
//! [`WorldTimeInterpretation`](crate::definition::WorldTimeInterpretation):
//! the first instant of the epoch year (the default), or the first instant
//! of the configured current year.  The latter exists for ecosystems that
//! treat world time as elapsed time from "now" — without the re-basing
//! offset those calendars would come out thousands of years adrift.

use alm_core::errors::Result;

use crate::date::CalendarDate;
use crate::definition::{CalendarDefinition, WorldTimeInterpretation};

impl CalendarDefinition {
    /// Day-count offset applied when converting world time, per the
    /// calendar's interpretation policy.
    ///
    /// Epoch-based calendars need none.  Real-time-based calendars shift by
    /// the exact number of days in the years between the epoch and the
    /// current year, summed with this calendar's own year lengths — never a
    /// mean-year approximation.
    pub fn interpretation_offset_days(&self) -> i64 {
        match self.world_time_interpretation {
            WorldTimeInterpretation::EpochBased => 0,
            WorldTimeInterpretation::RealTimeBased => {
                self.days_between_years(self.year.epoch, self.year.current_year)
            }
        }
    }

    /// Convert a world-time value to a full calendar date with time of day.
    ///
    /// Fractional seconds are floored; negative values resolve to dates
    /// before the zero instant.
    pub fn world_time_to_date(&self, world_time: f64) -> CalendarDate {
        let total_seconds = world_time.floor() as i64;
        let seconds_per_day = self.time_units.seconds_per_day();
        let day_count = total_seconds.div_euclid(seconds_per_day);
        let remainder = total_seconds.rem_euclid(seconds_per_day);
        let mut date = self.day_count_to_date(day_count + self.interpretation_offset_days());
        date.time = Some(self.time_units.time_of_day(remainder));
        date
    }

    /// Convert a calendar date (with optional time of day) back to world
    /// time; the exact inverse of
    /// [`CalendarDefinition::world_time_to_date`] for whole seconds.
    ///
    /// # Errors
    /// Returns [`Error::Date`](alm_core::errors::Error::Date) if the date
    /// or its time of day is out of range for this calendar.
    pub fn date_to_world_time(&self, date: &CalendarDate) -> Result<f64> {
        let day_count = self.date_to_day_count(date)? - self.interpretation_offset_days();
        let seconds = match date.time {
            Some(time) => {
                self.time_units.check(time)?;
                self.time_units.seconds_of(time)
            }
            None => 0,
        };
        Ok((day_count * self.time_units.seconds_per_day() + seconds) as f64)
    }
}
