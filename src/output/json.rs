//! JSON output formatting for gymtrack.

use serde::Serialize;
use serde_json::json;

use crate::error::GymError;
use crate::features::history::HistoryRecord;
use crate::features::plans::WorkoutPlan;

/// Format history records as JSON
///
/// # Errors
///
/// Returns `GymError::Parse` if JSON serialization fails.
pub fn format_history_json(records: &[HistoryRecord]) -> Result<String, GymError> {
    let output = json!({
        "count": records.len(),
        "items": records
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format workout plans as JSON
///
/// # Errors
///
/// Returns `GymError::Parse` if JSON serialization fails.
pub fn format_plans_json(plans: &[WorkoutPlan]) -> Result<String, GymError> {
    let output = json!({
        "count": plans.len(),
        "items": plans
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `GymError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, GymError> {
    Ok(serde_json::to_string_pretty(value)?)
}
