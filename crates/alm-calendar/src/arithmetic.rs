//! Calendar arithmetic: day counts, leap years, weekdays, and date stepping.
//!
//! Everything here is a pure method on [`CalendarDefinition`], anchored at
//! the calendar's epoch: day count 0 is the first day of the epoch year,
//! negative day counts lie before it.
//!
//! A year is walked as a sequence of *segments*: each month, followed by the
//! intercalary blocks declared after it.  Intercalary blocks are first-class
//! segments with their own offset range, never extra days tacked onto a
//! month, so a day offset that lands inside a block can never surface as an
//! out-of-range day of an adjacent month.

use alm_core::ensure;
use alm_core::errors::{Error, Result};

use crate::date::CalendarDate;
use crate::definition::{CalendarDefinition, IntercalaryRule, LeapYearRule};

impl CalendarDefinition {
    // ── Year-level queries ───────────────────────────────────────────────────

    /// Whether `year` is a leap year under this calendar's rule.
    ///
    /// The custom rule is anchored at year 0: every year divisible by the
    /// configured interval is a leap year, regardless of the epoch.
    pub fn is_leap_year(&self, year: i64) -> bool {
        match &self.leap_year_rule {
            LeapYearRule::None => false,
            LeapYearRule::Gregorian { .. } => {
                year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
            }
            LeapYearRule::Custom { interval, .. } => year.rem_euclid(*interval) == 0,
        }
    }

    /// Month lengths for `year`, leap extension applied to the target month.
    ///
    /// Intercalary days are not part of any month and do not appear here.
    pub fn month_lengths(&self, year: i64) -> Vec<u32> {
        let mut lengths: Vec<u32> = self.months.iter().map(|m| m.days).collect();
        if self.is_leap_year(year) {
            if let Some(target) = self.leap_year_rule.target_month() {
                if let Some(index) = self.month_index(target) {
                    lengths[(index - 1) as usize] += self.leap_year_rule.extra_days();
                }
            }
        }
        lengths
    }

    /// Total days in `year`: months, leap extension, and every intercalary
    /// block that occurs in it.
    pub fn year_length(&self, year: i64) -> i64 {
        let months: i64 = self.month_lengths(year).iter().map(|&d| d as i64).sum();
        let leap = self.is_leap_year(year);
        let blocks: i64 = self
            .intercalary_days
            .iter()
            .filter(|r| self.month_index(&r.after_month).is_some())
            .filter(|r| !r.leap_year_only || leap)
            .map(|r| r.days as i64)
            .sum();
        months + blocks
    }

    /// Days in `year` that advance the weekday cycle.
    pub(crate) fn weekday_year_length(&self, year: i64) -> i64 {
        let months: i64 = self.month_lengths(year).iter().map(|&d| d as i64).sum();
        let leap = self.is_leap_year(year);
        let blocks: i64 = self
            .intercalary_days
            .iter()
            .filter(|r| self.month_index(&r.after_month).is_some())
            .filter(|r| (!r.leap_year_only || leap) && r.counts_for_weekdays)
            .map(|r| r.days as i64)
            .sum();
        months + blocks
    }

    /// Signed number of days in the years `[from, to)`; negative when
    /// `to < from`.
    pub(crate) fn days_between_years(&self, from: i64, to: i64) -> i64 {
        if to >= from {
            (from..to).map(|y| self.year_length(y)).sum()
        } else {
            -(to..from).map(|y| self.year_length(y)).sum::<i64>()
        }
    }

    fn weekday_days_between_years(&self, from: i64, to: i64) -> i64 {
        if to >= from {
            (from..to).map(|y| self.weekday_year_length(y)).sum()
        } else {
            -(to..from).map(|y| self.weekday_year_length(y)).sum::<i64>()
        }
    }

    /// The intercalary blocks that occur in `year`, in walk order, paired
    /// with the 1-based index of the month each follows.
    pub fn intercalary_days_in(&self, year: i64) -> Vec<(u32, &IntercalaryRule)> {
        let leap = self.is_leap_year(year);
        let mut blocks = Vec::new();
        for m in 1..=self.month_count() {
            for rule in self.intercalary_after(m) {
                if rule.leap_year_only && !leap {
                    continue;
                }
                blocks.push((m, rule));
            }
        }
        blocks
    }

    // ── Date validation ──────────────────────────────────────────────────────

    /// Fail fast on out-of-range input rather than clamping; a silently
    /// clamped day corrupts every downstream day count.
    fn check_date(&self, date: &CalendarDate) -> Result<()> {
        let month_count = self.month_count();
        ensure!(
            date.month >= 1 && date.month <= month_count,
            "month {} out of range [1, {month_count}]",
            date.month
        );
        ensure!(date.day >= 1, "day {} must be >= 1", date.day);
        match &date.intercalary {
            None => {
                let len = self.month_lengths(date.year)[(date.month - 1) as usize];
                ensure!(
                    date.day <= len,
                    "day {} out of range [1, {len}] for month `{}` of year {}",
                    date.day,
                    self.months[(date.month - 1) as usize].name,
                    date.year
                );
            }
            Some(name) => {
                let rule = self
                    .intercalary_after(date.month)
                    .find(|r| r.name == *name)
                    .ok_or_else(|| {
                        Error::Date(format!(
                            "no intercalary block `{name}` after month `{}`",
                            self.months[(date.month - 1) as usize].name
                        ))
                    })?;
                ensure!(
                    !rule.leap_year_only || self.is_leap_year(date.year),
                    "intercalary block `{name}` does not occur in year {}",
                    date.year
                );
                ensure!(
                    date.day <= rule.days,
                    "day {} out of range [1, {}] for intercalary block `{name}`",
                    date.day,
                    rule.days
                );
            }
        }
        Ok(())
    }

    // ── Date ↔ day count ─────────────────────────────────────────────────────

    /// Walk from the epoch to `date`, counting either every day or only the
    /// weekday-advancing ones.  Assumes `check_date` has passed.
    fn walk_day_count(&self, date: &CalendarDate, weekdays_only: bool) -> i64 {
        let leap = self.is_leap_year(date.year);
        let lengths = self.month_lengths(date.year);
        let mut days = if weekdays_only {
            self.weekday_days_between_years(self.year.epoch, date.year)
        } else {
            self.days_between_years(self.year.epoch, date.year)
        };
        for m in 1..date.month {
            days += lengths[(m - 1) as usize] as i64;
            for rule in self.intercalary_after(m) {
                if rule.leap_year_only && !leap {
                    continue;
                }
                if weekdays_only && !rule.counts_for_weekdays {
                    continue;
                }
                days += rule.days as i64;
            }
        }
        match &date.intercalary {
            None => days += (date.day - 1) as i64,
            Some(name) => {
                days += lengths[(date.month - 1) as usize] as i64;
                for rule in self.intercalary_after(date.month) {
                    if rule.name == *name {
                        if !weekdays_only || rule.counts_for_weekdays {
                            days += (date.day - 1) as i64;
                        }
                        break;
                    }
                    if rule.leap_year_only && !leap {
                        continue;
                    }
                    if weekdays_only && !rule.counts_for_weekdays {
                        continue;
                    }
                    days += rule.days as i64;
                }
            }
        }
        days
    }

    /// Absolute day index of `date`, anchored at day 0 = first day of the
    /// epoch year.
    ///
    /// # Errors
    /// Returns [`Error::Date`] if the month, day, or intercalary block is
    /// out of range for this calendar.
    pub fn date_to_day_count(&self, date: &CalendarDate) -> Result<i64> {
        self.check_date(date)?;
        Ok(self.walk_day_count(date, false))
    }

    /// The date at an absolute day index; the exact inverse of
    /// [`CalendarDefinition::date_to_day_count`].
    ///
    /// Negative day counts resolve to dates before the epoch year.  The
    /// returned date carries its derived weekday and no time of day.
    pub fn day_count_to_date(&self, day_count: i64) -> CalendarDate {
        let mut year = self.year.epoch;
        let mut remaining = day_count;
        // Weekday-cycle position at the start of the located year.
        let mut wdays = self.year.start_day as i64;
        if remaining >= 0 {
            loop {
                let len = self.year_length(year);
                if remaining < len {
                    break;
                }
                remaining -= len;
                wdays += self.weekday_year_length(year);
                year += 1;
            }
        } else {
            while remaining < 0 {
                year -= 1;
                remaining += self.year_length(year);
                wdays -= self.weekday_year_length(year);
            }
        }

        let leap = self.is_leap_year(year);
        let lengths = self.month_lengths(year);
        let week = self.week_length() as i64;
        for m in 1..=self.month_count() {
            let len = lengths[(m - 1) as usize] as i64;
            if remaining < len {
                let mut date = CalendarDate::new(year, m, (remaining + 1) as u32);
                date.weekday = (wdays + remaining).rem_euclid(week) as u32;
                return date;
            }
            remaining -= len;
            wdays += len;
            for rule in self.intercalary_after(m) {
                if rule.leap_year_only && !leap {
                    continue;
                }
                let block = rule.days as i64;
                if remaining < block {
                    let mut date =
                        CalendarDate::intercalary(year, m, rule.name.clone(), (remaining + 1) as u32);
                    // A non-counting block holds the cycle position; its
                    // days all report the weekday the next counting day
                    // will carry.
                    date.weekday = if rule.counts_for_weekdays {
                        (wdays + remaining).rem_euclid(week) as u32
                    } else {
                        wdays.rem_euclid(week) as u32
                    };
                    return date;
                }
                remaining -= block;
                if rule.counts_for_weekdays {
                    wdays += block;
                }
            }
        }
        unreachable!("day offset {remaining} exceeded the segments of year {year}")
    }

    // ── Weekdays ─────────────────────────────────────────────────────────────

    /// The 0-based weekday index of `date`.
    ///
    /// Intercalary blocks with `counts_for_weekdays: false` are excluded
    /// from the running count, so the day after such a block continues the
    /// cycle from the day before it.
    ///
    /// # Errors
    /// Returns [`Error::Date`] for out-of-range input.
    pub fn weekday_of(&self, date: &CalendarDate) -> Result<u32> {
        self.check_date(date)?;
        let count = self.walk_day_count(date, true);
        let week = self.week_length() as i64;
        Ok((self.year.start_day as i64 + count).rem_euclid(week) as u32)
    }

    /// The weekday of the regular date `year`/`month`/`day`.
    ///
    /// # Errors
    /// Returns [`Error::Date`] for out-of-range input.
    pub fn calculate_weekday(&self, year: i64, month: u32, day: u32) -> Result<u32> {
        self.weekday_of(&CalendarDate::new(year, month, day))
    }

    // ── Stepping ─────────────────────────────────────────────────────────────

    /// Advance `date` by `n` days (negative `n` steps backwards).  The time
    /// of day is preserved.
    ///
    /// # Errors
    /// Returns [`Error::Date`] if `date` is out of range.
    pub fn add_days(&self, date: &CalendarDate, n: i64) -> Result<CalendarDate> {
        let mut out = self.day_count_to_date(self.date_to_day_count(date)? + n);
        out.time = date.time;
        Ok(out)
    }

    /// Advance `date` by `n` months, carrying overflow into the year and
    /// clamping the day to the target month's length.
    ///
    /// An intercalary date re-enters the regular month sequence: the result
    /// is a regular day of the block's anchor month shifted by `n`.
    ///
    /// # Errors
    /// Returns [`Error::Date`] if `date` is out of range.
    pub fn add_months(&self, date: &CalendarDate, n: i64) -> Result<CalendarDate> {
        self.check_date(date)?;
        let month_count = self.month_count() as i64;
        let total = date.month as i64 - 1 + n;
        let year = date.year + total.div_euclid(month_count);
        let month = (total.rem_euclid(month_count) + 1) as u32;
        let len = self.month_lengths(year)[(month - 1) as usize];
        let mut out = CalendarDate::new(year, month, date.day.min(len));
        out.weekday = self.weekday_of(&out)?;
        out.time = date.time;
        Ok(out)
    }

    /// Advance `date` by `n` years, clamping the day where the target
    /// year's month is shorter (leap-dependent lengths).
    ///
    /// An intercalary date stays inside its block when the block occurs in
    /// the target year; a leap-only block missing there falls back to the
    /// last day of its anchor month.
    ///
    /// # Errors
    /// Returns [`Error::Date`] if `date` is out of range.
    pub fn add_years(&self, date: &CalendarDate, n: i64) -> Result<CalendarDate> {
        self.check_date(date)?;
        let year = date.year + n;
        let mut out = match &date.intercalary {
            Some(name) => {
                let rule = self.intercalary_after(date.month).find(|r| r.name == *name);
                match rule {
                    Some(rule) if !rule.leap_year_only || self.is_leap_year(year) => {
                        CalendarDate::intercalary(year, date.month, name.clone(), date.day)
                    }
                    _ => {
                        let len = self.month_lengths(year)[(date.month - 1) as usize];
                        CalendarDate::new(year, date.month, len)
                    }
                }
            }
            None => {
                let len = self.month_lengths(year)[(date.month - 1) as usize];
                CalendarDate::new(year, date.month, date.day.min(len))
            }
        };
        out.weekday = self.weekday_of(&out)?;
        out.time = date.time;
        Ok(out)
    }
}
