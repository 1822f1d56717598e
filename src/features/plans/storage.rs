//! Workout plan storage.

use rusqlite::{params, Row};

use super::plan::{Level, NewPlan, WorkoutPlan};
use crate::error::GymError;
use crate::storage::{Database, Subscription};

/// Storage for user-authored workout plans.
pub struct PlanStore<'db> {
    db: &'db Database,
}

impl<'db> PlanStore<'db> {
    /// Create a store over an open database.
    #[must_use]
    pub const fn new(db: &'db Database) -> Self {
        Self { db }
    }

    /// Store a plan for `user_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create(&self, user_id: i64, plan: &NewPlan) -> Result<WorkoutPlan, GymError> {
        let id = self.db.insert(
            r"INSERT INTO workout_plans (user_id, title, duration, level, color_hex)
              VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                user_id,
                plan.title(),
                plan.duration(),
                plan.level().as_str(),
                plan.color().hex(),
            ],
        )?;
        log::debug!("stored plan {id} for user {user_id}");

        Ok(WorkoutPlan {
            id,
            user_id,
            title: plan.title().to_string(),
            duration: plan.duration().to_string(),
            level: plan.level(),
            color_hex: plan.color().hex().to_string(),
        })
    }

    /// All plans for a user, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_for_user(&self, user_id: i64) -> Result<Vec<WorkoutPlan>, GymError> {
        list_for_user(self.db, user_id)
    }

    /// Delete one of the user's plans.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the user has no plan with that id.
    pub fn delete(&self, user_id: i64, id: i64) -> Result<(), GymError> {
        let changed = self.db.execute(
            "DELETE FROM workout_plans WHERE id = ?1 AND user_id = ?2",
            params![id, user_id],
        )?;
        if changed == 0 {
            return Err(GymError::NotFound(format!("Workout plan with ID: {id}")));
        }
        Ok(())
    }

    /// Live view of the user's plans.
    #[must_use]
    pub fn watch(&self, user_id: i64) -> Subscription<'db, WorkoutPlan> {
        Subscription::new(self.db, move |db| list_for_user(db, user_id))
    }
}

fn list_for_user(db: &Database, user_id: i64) -> Result<Vec<WorkoutPlan>, GymError> {
    let mut stmt = db
        .connection()
        .prepare(
            r"SELECT id, user_id, title, duration, level, color_hex
              FROM workout_plans
              WHERE user_id = ?1
              ORDER BY id DESC",
        )
        .map_err(|e| GymError::Database(format!("Failed to prepare query: {e}")))?;

    let plans = stmt
        .query_map([user_id], row_to_plan)
        .map_err(|e| GymError::Database(format!("Failed to query plans: {e}")))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| GymError::Database(format!("Failed to read plan row: {e}")))?;

    Ok(plans)
}

fn row_to_plan(row: &Row<'_>) -> rusqlite::Result<WorkoutPlan> {
    let level: String = row.get(4)?;
    Ok(WorkoutPlan {
        id: row.get(0)?,
        user_id: row.get(1)?,
        title: row.get(2)?,
        duration: row.get(3)?,
        level: level.parse().unwrap_or_else(|_| {
            log::warn!("unknown plan level {level:?}, showing as Beginner");
            Level::Beginner
        }),
        color_hex: row.get(5)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::account::AccountStore;
    use crate::features::plans::PlanColor;

    fn new_plan(title: &str) -> NewPlan {
        NewPlan::new(title, "25", Level::Intermediate, PlanColor::Teal).unwrap()
    }

    #[test]
    fn test_create_and_list() {
        let db = Database::open_in_memory().unwrap();
        let user = AccountStore::new(&db).sign_up("ana", "pw").unwrap();
        let store = PlanStore::new(&db);

        let created = store.create(user.id, &new_plan("Legs")).unwrap();
        store.create(user.id, &new_plan("Arms")).unwrap();

        let plans = store.list_for_user(user.id).unwrap();
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].title, "Arms");
        assert_eq!(plans[1], created);
        assert_eq!(plans[1].duration, "25 min");
        assert_eq!(plans[1].color_hex, "#009688");
    }

    #[test]
    fn test_delete_is_scoped() {
        let db = Database::open_in_memory().unwrap();
        let accounts = AccountStore::new(&db);
        let ana = accounts.sign_up("ana", "pw").unwrap();
        let bo = accounts.sign_up("bo", "pw").unwrap();
        let store = PlanStore::new(&db);

        let plan = store.create(ana.id, &new_plan("Legs")).unwrap();
        assert!(matches!(store.delete(bo.id, plan.id), Err(GymError::NotFound(_))));
        store.delete(ana.id, plan.id).unwrap();
        assert!(store.list_for_user(ana.id).unwrap().is_empty());
    }

    #[test]
    fn test_watch_plans() {
        let db = Database::open_in_memory().unwrap();
        let user = AccountStore::new(&db).sign_up("ana", "pw").unwrap();
        let store = PlanStore::new(&db);
        let mut watch = store.watch(user.id);

        assert_eq!(watch.next_snapshot().unwrap(), Some(vec![]));
        let plan = store.create(user.id, &new_plan("Legs")).unwrap();
        assert_eq!(watch.next_snapshot().unwrap(), Some(vec![plan]));
        assert_eq!(watch.next_snapshot().unwrap(), None);
    }
}
