//! Weekly goal storage.

use rusqlite::{params, OptionalExtension, Row};

use super::goal::{Goal, GoalTargets};
use crate::error::GymError;
use crate::storage::{Database, Subscription};

/// Storage for weekly goals.
pub struct GoalStore<'db> {
    db: &'db Database,
}

impl<'db> GoalStore<'db> {
    /// Create a store over an open database.
    #[must_use]
    pub const fn new(db: &'db Database) -> Self {
        Self { db }
    }

    /// The user's goal, if one has been set.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get(&self, user_id: i64) -> Result<Option<Goal>, GymError> {
        get(self.db, user_id)
    }

    /// Set the user's goal, replacing any existing one.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn set(&self, user_id: i64, targets: GoalTargets) -> Result<Goal, GymError> {
        self.db.execute(
            r"INSERT INTO goals (user_id, weekly_workout_target, weekly_calorie_target)
              VALUES (?1, ?2, ?3)
              ON CONFLICT(user_id) DO UPDATE SET
                weekly_workout_target = excluded.weekly_workout_target,
                weekly_calorie_target = excluded.weekly_calorie_target",
            params![user_id, targets.workouts, targets.calories],
        )?;
        log::debug!(
            "goal for user {user_id}: {} workouts, {} kcal",
            targets.workouts,
            targets.calories
        );
        self.get(user_id)?
            .ok_or_else(|| GymError::Database(format!("Goal for user {user_id} missing after write")))
    }

    /// Live view of the user's goal (zero or one item).
    #[must_use]
    pub fn watch(&self, user_id: i64) -> Subscription<'db, Goal> {
        Subscription::new(self.db, move |db| {
            get(db, user_id).map(|goal| goal.into_iter().collect())
        })
    }
}

fn get(db: &Database, user_id: i64) -> Result<Option<Goal>, GymError> {
    db.connection()
        .query_row(
            r"SELECT id, user_id, weekly_workout_target, weekly_calorie_target
              FROM goals WHERE user_id = ?1",
            [user_id],
            row_to_goal,
        )
        .optional()
        .map_err(|e| GymError::Database(format!("Failed to query goal: {e}")))
}

fn row_to_goal(row: &Row<'_>) -> rusqlite::Result<Goal> {
    Ok(Goal {
        id: row.get(0)?,
        user_id: row.get(1)?,
        weekly_workout_target: row.get(2)?,
        weekly_calorie_target: row.get(3)?,
    })
}
