//! Error types for almanac-rs.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum.  The two main variants separate the
//! operator-facing failure classes: [`Error::Config`] means the calendar
//! definition itself is malformed, [`Error::Date`] means a caller asked the
//! engine for an out-of-range date.

use thiserror::Error;

/// The top-level error type used throughout almanac-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// The calendar definition is malformed (dangling month references,
    /// non-positive lengths, out-of-range start weekday, …).
    #[error("calendar configuration error: {0}")]
    Config(String),

    /// A date-domain input was out of range (month outside the calendar,
    /// day past the end of its month, unknown intercalary block, …).
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument to a low-level helper.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Index out of range.
    #[error("index ({index}) out of range [0, {size})")]
    IndexOutOfRange {
        /// The index that was out of range.
        index: usize,
        /// The size of the container.
        size: usize,
    },
}

/// Shorthand `Result` type used throughout almanac-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Check a date-domain precondition at an arithmetic entry point.
///
/// Returns `Err(Error::Date(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use alm_core::{ensure, errors::Error};
/// fn month_in_range(month: u32, count: u32) -> alm_core::errors::Result<u32> {
///     ensure!(month >= 1 && month <= count, "month {month} out of range [1, {count}]");
///     Ok(month)
/// }
/// assert!(month_in_range(3, 12).is_ok());
/// assert!(month_in_range(13, 12).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Date(
                format!($($msg)*)
            ));
        }
    };
}

/// Check a calendar-configuration invariant at validation time.
///
/// Returns `Err(Error::Config(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use alm_core::{ensure_config, errors::Error};
/// fn week_length(weekdays: &[&str]) -> alm_core::errors::Result<usize> {
///     ensure_config!(!weekdays.is_empty(), "a calendar needs at least one weekday");
///     Ok(weekdays.len())
/// }
/// assert!(week_length(&["Festag"]).is_ok());
/// assert!(week_length(&[]).is_err());
/// ```
#[macro_export]
macro_rules! ensure_config {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Config(
                format!($($msg)*)
            ));
        }
    };
}

/// Bail out of a function with `Error::InvalidArgument`.
///
/// # Example
/// ```
/// use alm_core::{fail, errors::Error};
/// fn always_err() -> alm_core::errors::Result<()> {
///     fail!("unsupported operation");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::InvalidArgument(format!($($msg)*)))
    };
}
