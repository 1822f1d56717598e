//! Shared traits for workout data.

use chrono::{Local, NaiveDateTime};

/// A completed workout as seen by the statistics code.
///
/// Fields are the raw text stored with the record; parsing and fallback
/// handling happen in the aggregator.
pub trait WorkoutEntry {
    /// Duration text, e.g. `"30 min"`.
    fn duration_text(&self) -> &str;

    /// Calories text, e.g. `"120 kcal"`.
    fn calories_text(&self) -> &str;

    /// Completion date in the history date format.
    fn date_text(&self) -> &str;
}

/// Source of the current local time.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    /// Current local wall-clock time.
    fn now(&self) -> NaiveDateTime;
}

/// [`Clock`] backed by the system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
