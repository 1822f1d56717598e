//! Output formatting for gymtrack.
//!
//! This module provides formatters for displaying workout data in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::GymError;
use crate::features::history::HistoryRecord;
use crate::features::plans::WorkoutPlan;

pub use json::*;
pub use pretty::*;

/// Format history records based on output format
///
/// # Errors
///
/// Returns `GymError::Parse` if JSON serialization fails.
pub fn format_history(records: &[HistoryRecord], format: OutputFormat) -> Result<String, GymError> {
    match format {
        OutputFormat::Pretty => Ok(format_history_pretty(records)),
        OutputFormat::Json => format_history_json(records),
    }
}

/// Format workout plans based on output format
///
/// # Errors
///
/// Returns `GymError::Parse` if JSON serialization fails.
pub fn format_plans(plans: &[WorkoutPlan], format: OutputFormat) -> Result<String, GymError> {
    match format {
        OutputFormat::Pretty => Ok(format_plans_pretty(plans)),
        OutputFormat::Json => format_plans_json(plans),
    }
}
