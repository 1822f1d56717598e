//! Core abstractions for gymtrack.
//!
//! Duration parsing, history date handling, and the traits shared by the
//! timer and statistics code.

pub mod datetime;
pub mod duration;
mod traits;

pub use datetime::{format_record_date, parse_record_date, start_of_week, RECORD_DATE_FORMAT};
pub use duration::{format_seconds, parse_leading_number, parse_minutes, to_seconds};
#[cfg(test)]
pub use traits::MockClock;
pub use traits::{Clock, SystemClock, WorkoutEntry};
