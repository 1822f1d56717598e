//! Workout statistics.
//!
//! Reduces history records to `{count, minutes, calories}` totals, either
//! over all time or for the current week.

mod aggregate;
mod report;

pub use aggregate::{total_stats, weekly_stats, WorkoutTotals};
pub use report::StatsReport;
