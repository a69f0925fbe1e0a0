//! The calendar definition data model.
//!
//! A [`CalendarDefinition`] is a validated, immutable description of one
//! calendar system: its months, weekdays, leap-year rule, intercalary
//! blocks, clock units, and world-time interpretation.  It is loaded once
//! (usually from the JSON interchange schema via [`CalendarDefinition::from_json`]),
//! validated, and then shared read-only by every conversion call.
//!
//! Field names in the serialized form are camelCase, matching the schema
//! used by calendar-authoring tools.

use alm_core::ensure_config;
use alm_core::errors::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::time_units::TimeUnits;

// ── Months and weekdays ──────────────────────────────────────────────────────

/// One month of a calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Month {
    /// Month name; referenced by leap-year and intercalary rules.
    pub name: String,
    /// Optional short form for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,
    /// Number of days in the month (before any leap extension).
    pub days: u32,
    /// Optional flavour text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Month {
    /// Create a month with a name and a base length.
    pub fn new(name: impl Into<String>, days: u32) -> Self {
        Self {
            name: name.into(),
            abbreviation: None,
            days,
            description: None,
        }
    }
}

/// One weekday of a calendar.  The number of weekdays defines the week
/// length; their order defines the 0-based weekday index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weekday {
    /// Weekday name.
    pub name: String,
    /// Optional short form for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,
}

impl Weekday {
    /// Create a weekday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            abbreviation: None,
        }
    }
}

// ── Year configuration ───────────────────────────────────────────────────────

/// Epoch and current-year configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearConfig {
    /// Reference year: day count 0 is the first day of this year.
    pub epoch: i64,
    /// The calendar's default "now" year; also the zero point of
    /// real-time-based world-time interpretation.
    pub current_year: i64,
    /// Weekday index of day 1 of the epoch year.
    #[serde(default)]
    pub start_day: u32,
}

// ── Leap-year rule ───────────────────────────────────────────────────────────

fn default_extra_days() -> u32 {
    1
}

/// How leap years are determined and where their extra days land.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "camelCase")]
pub enum LeapYearRule {
    /// No leap years.
    None,
    /// The Gregorian test: divisible by 4, except centuries not divisible
    /// by 400.
    #[serde(rename_all = "camelCase")]
    Gregorian {
        /// Month that receives the extra days in leap years.
        target_month: String,
        /// Days added to the target month (default 1).
        #[serde(default = "default_extra_days")]
        extra_days: u32,
    },
    /// A fixed cycle: every `interval`-th year is a leap year.
    #[serde(rename_all = "camelCase")]
    Custom {
        /// Cycle length in years; years divisible by it are leap years.
        interval: i64,
        /// Month that receives the extra days in leap years.
        target_month: String,
        /// Days added to the target month (default 1).
        #[serde(default = "default_extra_days")]
        extra_days: u32,
    },
}

impl Default for LeapYearRule {
    fn default() -> Self {
        LeapYearRule::None
    }
}

impl LeapYearRule {
    /// The month receiving leap days, if the rule has one.
    pub fn target_month(&self) -> Option<&str> {
        match self {
            LeapYearRule::None => None,
            LeapYearRule::Gregorian { target_month, .. }
            | LeapYearRule::Custom { target_month, .. } => Some(target_month),
        }
    }

    /// Days added to the target month in a leap year (0 for `None`).
    pub fn extra_days(&self) -> u32 {
        match self {
            LeapYearRule::None => 0,
            LeapYearRule::Gregorian { extra_days, .. }
            | LeapYearRule::Custom { extra_days, .. } => *extra_days,
        }
    }
}

// ── Intercalary rules ────────────────────────────────────────────────────────

/// A block of one or more days inserted after a month, outside the regular
/// day-of-month sequence.  Festival days, typically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntercalaryRule {
    /// Block name; carried on dates that fall inside the block.
    pub name: String,
    /// Name of the month the block follows.  Several blocks may follow the
    /// same month; declaration order is their order in the year.
    pub after_month: String,
    /// Length of the block in days (default 1).
    #[serde(default = "default_extra_days")]
    pub days: u32,
    /// If set, the block only occurs in leap years.
    #[serde(default)]
    pub leap_year_only: bool,
    /// Whether the block's days advance the weekday cycle (default true).
    /// When false, the day after the block lands on the weekday right after
    /// the day before it.
    #[serde(default = "default_counts_for_weekdays")]
    pub counts_for_weekdays: bool,
    /// Optional flavour text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn default_counts_for_weekdays() -> bool {
    true
}

impl IntercalaryRule {
    /// Create a single-day, weekday-counting block after the named month.
    pub fn new(name: impl Into<String>, after_month: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            after_month: after_month.into(),
            days: 1,
            leap_year_only: false,
            counts_for_weekdays: true,
            description: None,
        }
    }
}

// ── World-time interpretation ────────────────────────────────────────────────

/// What world-time zero means for this calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum WorldTimeInterpretation {
    /// World time 0 is the first instant of the epoch year.  The default,
    /// and what legacy definitions without the field get.
    #[default]
    EpochBased,
    /// World time 0 is the first instant of the configured current year.
    /// Used by ecosystems that treat world time as "seconds elapsed since
    /// now" rather than since the calendar's narrative epoch.
    RealTimeBased,
}

// ── The definition itself ────────────────────────────────────────────────────

/// A complete, immutable calendar description.
///
/// Construct with [`CalendarDefinition::from_json`] or build in code and call
/// [`CalendarDefinition::validate`] once.  All conversion and arithmetic
/// operations live in the `arithmetic` and `worldtime` modules as methods on
/// this type; none of them mutate it, so one instance can be shared freely
/// across threads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDefinition {
    /// Calendar name, for display and diagnostics.
    #[serde(default)]
    pub name: String,
    /// Ordered months; the month index used throughout the crate is 1-based.
    pub months: Vec<Month>,
    /// Ordered weekdays; the weekday index is 0-based.
    pub weekdays: Vec<Weekday>,
    /// Epoch and current-year configuration.
    #[serde(rename = "yearConfig")]
    pub year: YearConfig,
    /// Leap-year rule (default: no leap years).
    #[serde(default)]
    pub leap_year_rule: LeapYearRule,
    /// Intercalary blocks, in declaration order.
    #[serde(default)]
    pub intercalary_days: Vec<IntercalaryRule>,
    /// Clock-unit sizes (default 24/60/60).
    #[serde(default)]
    pub time_units: TimeUnits,
    /// What world-time zero means (default epoch-based).
    #[serde(default)]
    pub world_time_interpretation: WorldTimeInterpretation,
}

impl CalendarDefinition {
    /// Deserialize a definition from the JSON interchange schema and
    /// validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let definition: CalendarDefinition =
            serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        definition.validate()?;
        Ok(definition)
    }

    /// Check every structural invariant of the definition.
    ///
    /// The arithmetic operations assume a validated definition; run this
    /// once at load time, not per call.
    pub fn validate(&self) -> Result<()> {
        ensure_config!(!self.months.is_empty(), "a calendar needs at least one month");
        ensure_config!(
            !self.weekdays.is_empty(),
            "a calendar needs at least one weekday"
        );
        for month in &self.months {
            ensure_config!(
                month.days >= 1,
                "month `{}` must have at least one day",
                month.name
            );
        }
        ensure_config!(
            (self.year.start_day as usize) < self.weekdays.len(),
            "startDay {} out of range [0, {})",
            self.year.start_day,
            self.weekdays.len()
        );
        if let Some(target) = self.leap_year_rule.target_month() {
            ensure_config!(
                self.month_index(target).is_some(),
                "leap-year target month `{target}` does not exist"
            );
        }
        if let LeapYearRule::Custom { interval, .. } = &self.leap_year_rule {
            ensure_config!(*interval >= 1, "leap-year interval must be >= 1");
        }
        for rule in &self.intercalary_days {
            ensure_config!(
                self.month_index(&rule.after_month).is_some(),
                "intercalary block `{}` follows unknown month `{}`",
                rule.name,
                rule.after_month
            );
            ensure_config!(
                rule.days >= 1,
                "intercalary block `{}` must have at least one day",
                rule.name
            );
        }
        self.time_units.validate()?;
        Ok(())
    }

    /// Number of months in a year (intercalary blocks excluded).
    pub fn month_count(&self) -> u32 {
        self.months.len() as u32
    }

    /// Number of weekdays in a week.
    pub fn week_length(&self) -> u32 {
        self.weekdays.len() as u32
    }

    /// 1-based index of the month with the given name.
    pub fn month_index(&self, name: &str) -> Option<u32> {
        self.months
            .iter()
            .position(|m| m.name == name)
            .map(|i| i as u32 + 1)
    }

    /// The month at a 1-based index.
    pub fn month(&self, index: u32) -> Result<&Month> {
        self.months
            .get(index.checked_sub(1).ok_or(Error::IndexOutOfRange {
                index: 0,
                size: self.months.len(),
            })? as usize)
            .ok_or(Error::IndexOutOfRange {
                index: index as usize,
                size: self.months.len(),
            })
    }

    /// Intercalary rules that follow the month at the given 1-based index,
    /// in declaration order.
    pub fn intercalary_after(&self, month: u32) -> impl Iterator<Item = &IntercalaryRule> {
        self.intercalary_days
            .iter()
            .filter(move |r| self.month_index(&r.after_month) == Some(month))
    }
}
