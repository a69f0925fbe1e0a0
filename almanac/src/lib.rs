//! # almanac
//!
//! A data-driven calendar engine for games and worldbuilding tools: an
//! arbitrary calendar system — variable month lengths, any week length,
//! leap-year rules, intercalary festival days — described as data, with
//! exact bidirectional conversion between a flat world-time second count
//! and structured dates.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates.  Application code should depend on this
//! crate rather than the individual `alm-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! almanac = "0.1"
//! ```
//!
//! ```rust
//! use almanac::calendar::calendars::gregorian;
//!
//! let cal = gregorian();
//! let date = cal.world_time_to_date(86_400.0);
//! assert_eq!((date.year, date.month, date.day), (2024, 1, 2));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core type aliases and error definitions.
pub use alm_core as core;

/// Calendar definitions, date values, and world-time conversion.
pub use alm_calendar as calendar;
