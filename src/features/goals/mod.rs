//! Weekly workout and calorie goals.

mod goal;
mod storage;

pub use goal::{
    progress_fraction, Goal, GoalTargets, TargetProgress, WeeklyProgress, CALORIE_TARGET_RANGE,
    DEFAULT_CALORIE_TARGET, DEFAULT_WORKOUT_TARGET, WORKOUT_TARGET_RANGE,
};
pub use storage::GoalStore;
