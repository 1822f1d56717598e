//! Completed workout records.

use serde::{Deserialize, Serialize};

use crate::core::WorkoutEntry;

/// One completed workout session.
///
/// Text fields are stored as shown to the user. Parsing happens in the
/// stats code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Row id.
    pub id: i64,
    /// Owning user.
    pub user_id: i64,
    /// Workout title.
    pub title: String,
    /// Duration text, e.g. `"30 min"`.
    pub duration: String,
    /// Completion time, e.g. `"Mar 04, 2025 18:30"`.
    pub date: String,
    /// Calories text, e.g. `"120 kcal"`.
    pub calories: String,
}

impl WorkoutEntry for HistoryRecord {
    fn duration_text(&self) -> &str {
        &self.duration
    }

    fn calories_text(&self) -> &str {
        &self.calories
    }

    fn date_text(&self) -> &str {
        &self.date
    }
}

/// A record that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHistoryRecord {
    /// Workout title.
    pub title: String,
    /// Duration text.
    pub duration: String,
    /// Completion time in history date format.
    pub date: String,
    /// Calories text.
    pub calories: String,
}
