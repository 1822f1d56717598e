//! Weekly goals and progress toward them.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::GymError;
use crate::features::stats::WorkoutTotals;

/// Workouts per week suggested when no goal is set.
pub const DEFAULT_WORKOUT_TARGET: i64 = 3;
/// Calories per week suggested when no goal is set.
pub const DEFAULT_CALORIE_TARGET: i64 = 500;
/// Accepted workouts-per-week targets.
pub const WORKOUT_TARGET_RANGE: RangeInclusive<i64> = 1..=14;
/// Accepted calories-per-week targets.
pub const CALORIE_TARGET_RANGE: RangeInclusive<i64> = 100..=5000;

/// A stored weekly goal. At most one per user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    /// Row id.
    pub id: i64,
    /// Owning user.
    pub user_id: i64,
    /// Workouts per week.
    pub weekly_workout_target: i64,
    /// Calories per week.
    pub weekly_calorie_target: i64,
}

/// Validated weekly targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GoalTargets {
    /// Workouts per week.
    pub workouts: i64,
    /// Calories per week.
    pub calories: i64,
}

impl GoalTargets {
    /// Check both targets against their accepted ranges.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if either target is out of range.
    pub fn new(workouts: i64, calories: i64) -> Result<Self, GymError> {
        if !WORKOUT_TARGET_RANGE.contains(&workouts) {
            return Err(GymError::InvalidInput(format!(
                "Workout target must be between {} and {}, got {workouts}",
                WORKOUT_TARGET_RANGE.start(),
                WORKOUT_TARGET_RANGE.end()
            )));
        }
        if !CALORIE_TARGET_RANGE.contains(&calories) {
            return Err(GymError::InvalidInput(format!(
                "Calorie target must be between {} and {}, got {calories}",
                CALORIE_TARGET_RANGE.start(),
                CALORIE_TARGET_RANGE.end()
            )));
        }
        Ok(Self { workouts, calories })
    }

    /// Targets from a stored goal, or the suggested defaults.
    #[must_use]
    pub fn or_default(goal: Option<&Goal>) -> Self {
        goal.map_or(
            Self {
                workouts: DEFAULT_WORKOUT_TARGET,
                calories: DEFAULT_CALORIE_TARGET,
            },
            |g| Self {
                workouts: g.weekly_workout_target,
                calories: g.weekly_calorie_target,
            },
        )
    }
}

/// `current / target` clamped to `[0, 1]`, or `0` for a zero target.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn progress_fraction(current: i64, target: i64) -> f64 {
    if target == 0 {
        return 0.0;
    }
    (current as f64 / target as f64).clamp(0.0, 1.0)
}

/// Progress toward one target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TargetProgress {
    /// Amount achieved this week.
    pub current: i64,
    /// Weekly target.
    pub target: i64,
    /// `current / target`, clamped.
    pub fraction: f64,
}

impl TargetProgress {
    fn new(current: i64, target: i64) -> Self {
        Self {
            current,
            target,
            fraction: progress_fraction(current, target),
        }
    }
}

/// Progress toward both weekly targets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeeklyProgress {
    /// Whether the targets come from a stored goal.
    pub goal_set: bool,
    /// Workouts done versus target.
    pub workouts: TargetProgress,
    /// Calories burned versus target.
    pub calories: TargetProgress,
}

impl WeeklyProgress {
    /// Compare this week's totals against a goal, or the defaults if unset.
    #[must_use]
    pub fn new(goal: Option<&Goal>, week: &WorkoutTotals) -> Self {
        let targets = GoalTargets::or_default(goal);
        Self {
            goal_set: goal.is_some(),
            workouts: TargetProgress::new(
                i64::try_from(week.count).unwrap_or(i64::MAX),
                targets.workouts,
            ),
            calories: TargetProgress::new(week.calories, targets.calories),
        }
    }
}
