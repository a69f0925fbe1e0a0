//! Built-in calendar definitions.
//!
//! Each module builds one ready-to-use [`CalendarDefinition`](crate::definition::CalendarDefinition).
//! They double as worked examples of the data model: a plain civil calendar,
//! one with a fixed leap cycle and a re-based world-time zero, and one with
//! festival days outside the weekday cycle.

mod golarion;
mod gregorian;
mod old_world;

pub use golarion::golarion;
pub use gregorian::gregorian;
pub use old_world::old_world;
