//! # alm-calendar
//!
//! A data-driven calendar engine: months, weekdays, leap-year rules, and
//! intercalary days are all described by an immutable
//! [`CalendarDefinition`], and pure methods on it convert between a flat
//! world-time second count and structured [`CalendarDate`] values.
//!
//! The engine holds no global state and performs no I/O; hosts load a
//! definition once (see [`CalendarDefinition::from_json`]), share it by
//! reference, and call the conversion methods from any thread.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Calendar arithmetic: day counts, leap years, weekdays, date stepping.
pub mod arithmetic;

/// Built-in calendar definitions.
pub mod calendars;

/// `CalendarDate` — the structured date value.
pub mod date;

/// The `CalendarDefinition` data model and its JSON schema.
pub mod definition;

/// Clock-unit configuration and `TimeOfDay`.
pub mod time_units;

/// World-time ↔ date conversion.
pub mod worldtime;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::CalendarDate;
pub use definition::{
    CalendarDefinition, IntercalaryRule, LeapYearRule, Month, Weekday, WorldTimeInterpretation,
    YearConfig,
};
pub use time_units::{TimeOfDay, TimeUnits};
