//! The `CalendarDate` value type.
//!
//! A structured date produced and consumed by the conversion engine.  The
//! value is plain data: it knows nothing about any particular calendar and
//! carries no reference to one.  The `weekday` field is derived by the
//! engine and deliberately excluded from equality and hashing, since it can
//! never vary independently of the other fields for a valid date.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::time_units::TimeOfDay;

/// An immutable calendar date, with optional time-of-day.
///
/// For a regular date, `day` is the 1-based day of `month`.  When
/// `intercalary` is set, the date falls inside the named intercalary block
/// following `month`, and `day` is the 1-based index within that block.
///
/// Ordering is lexicographic by `(year, month, day)`, with intercalary
/// blocks sorting between the month they follow and the next month.  Blocks
/// following the same month compare by name; for the exact in-year walk
/// order of such blocks, compare day counts via the owning calendar
/// definition instead.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDate {
    /// Year, relative to the calendar's own era.  May be negative.
    pub year: i64,
    /// 1-based month index; for intercalary dates, the month the block
    /// follows.
    pub month: u32,
    /// 1-based day of month, or index within the intercalary block.
    pub day: u32,
    /// Derived 0-based weekday index.  Set by the engine; ignored by
    /// equality, hashing, and ordering.
    #[serde(default)]
    pub weekday: u32,
    /// Name of the intercalary block this date falls within, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intercalary: Option<String>,
    /// Time of day; absent means start of day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<TimeOfDay>,
}

impl CalendarDate {
    /// Create a regular date at the start of the day.
    pub fn new(year: i64, month: u32, day: u32) -> Self {
        Self {
            year,
            month,
            day,
            weekday: 0,
            intercalary: None,
            time: None,
        }
    }

    /// Create a date inside the named intercalary block following `month`.
    pub fn intercalary(year: i64, month: u32, name: impl Into<String>, day: u32) -> Self {
        Self {
            year,
            month,
            day,
            weekday: 0,
            intercalary: Some(name.into()),
            time: None,
        }
    }

    /// Attach a time of day.
    pub fn with_time(mut self, time: TimeOfDay) -> Self {
        self.time = Some(time);
        self
    }

    /// Return `true` if this date falls inside an intercalary block.
    pub fn is_intercalary(&self) -> bool {
        self.intercalary.is_some()
    }

    /// The same date with the time of day stripped.
    pub fn date_only(&self) -> Self {
        Self {
            time: None,
            ..self.clone()
        }
    }

    fn ordering_key(&self) -> (i64, u32, bool, u32, &str, Option<TimeOfDay>) {
        (
            self.year,
            self.month,
            self.intercalary.is_some(),
            self.day,
            self.intercalary.as_deref().unwrap_or(""),
            self.time,
        )
    }
}

// Structural equality over (year, month, day, intercalary, time); the
// derived weekday is excluded.
impl PartialEq for CalendarDate {
    fn eq(&self, other: &Self) -> bool {
        self.year == other.year
            && self.month == other.month
            && self.day == other.day
            && self.intercalary == other.intercalary
            && self.time == other.time
    }
}

impl Hash for CalendarDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.year.hash(state);
        self.month.hash(state);
        self.day.hash(state);
        self.intercalary.hash(state);
        self.time.hash(state);
    }
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordering_key().cmp(&other.ordering_key())
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.intercalary {
            Some(name) => write!(f, "{} {} of year {}", name, self.day, self.year)?,
            None => write!(f, "{}-{:02}-{:02}", self.year, self.month, self.day)?,
        }
        if let Some(time) = self.time {
            write!(f, " {time}")?;
        }
        Ok(())
    }
}
