//! Workout history storage.

use rusqlite::{params, Row};

use super::record::{HistoryRecord, NewHistoryRecord};
use crate::core::{format_record_date, Clock};
use crate::error::GymError;
use crate::features::session::Completion;
use crate::storage::{Database, Subscription};

/// Storage for completed workouts.
pub struct HistoryStore<'db> {
    db: &'db Database,
}

impl<'db> HistoryStore<'db> {
    /// Create a store over an open database.
    #[must_use]
    pub const fn new(db: &'db Database) -> Self {
        Self { db }
    }

    /// Insert a record for `user_id` and return it with its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, including when the user does
    /// not exist.
    pub fn insert(&self, user_id: i64, record: &NewHistoryRecord) -> Result<HistoryRecord, GymError> {
        let id = self.db.insert(
            r"INSERT INTO history (user_id, title, duration, date, calories)
              VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                user_id,
                record.title,
                record.duration,
                record.date,
                record.calories,
            ],
        )?;
        log::debug!("stored history record {id} for user {user_id}");

        Ok(HistoryRecord {
            id,
            user_id,
            title: record.title.clone(),
            duration: record.duration.clone(),
            date: record.date.clone(),
            calories: record.calories.clone(),
        })
    }

    /// Store a finished session, dated now.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn record_completion(
        &self,
        user_id: i64,
        completion: &Completion,
        calories: &str,
        clock: &dyn Clock,
    ) -> Result<HistoryRecord, GymError> {
        self.insert(
            user_id,
            &NewHistoryRecord {
                title: completion.title.clone(),
                duration: completion.duration_text.clone(),
                date: format_record_date(clock.now()),
                calories: calories.to_string(),
            },
        )
    }

    /// All records for a user, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_for_user(&self, user_id: i64) -> Result<Vec<HistoryRecord>, GymError> {
        list_for_user(self.db, user_id)
    }

    /// Delete one of the user's records.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the user has no record with that id.
    pub fn delete(&self, user_id: i64, id: i64) -> Result<(), GymError> {
        let changed = self.db.execute(
            "DELETE FROM history WHERE id = ?1 AND user_id = ?2",
            params![id, user_id],
        )?;
        if changed == 0 {
            return Err(GymError::NotFound(format!("History record with ID: {id}")));
        }
        Ok(())
    }

    /// Live view of the user's history.
    #[must_use]
    pub fn watch(&self, user_id: i64) -> Subscription<'db, HistoryRecord> {
        Subscription::new(self.db, move |db| list_for_user(db, user_id))
    }
}

fn list_for_user(db: &Database, user_id: i64) -> Result<Vec<HistoryRecord>, GymError> {
    let mut stmt = db
        .connection()
        .prepare(
            r"SELECT id, user_id, title, duration, date, calories
              FROM history
              WHERE user_id = ?1
              ORDER BY id DESC",
        )
        .map_err(|e| GymError::Database(format!("Failed to prepare query: {e}")))?;

    let records = stmt
        .query_map([user_id], row_to_record)
        .map_err(|e| GymError::Database(format!("Failed to query history: {e}")))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| GymError::Database(format!("Failed to read history row: {e}")))?;

    Ok(records)
}

fn row_to_record(row: &Row<'_>) -> rusqlite::Result<HistoryRecord> {
    Ok(HistoryRecord {
        id: row.get(0)?,
        user_id: row.get(1)?,
        title: row.get(2)?,
        duration: row.get(3)?,
        date: row.get(4)?,
        calories: row.get(5)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MockClock;
    use crate::features::account::AccountStore;
    use chrono::NaiveDate;

    fn record(title: &str) -> NewHistoryRecord {
        NewHistoryRecord {
            title: title.to_string(),
            duration: "30 min".to_string(),
            date: "Mar 04, 2025 18:30".to_string(),
            calories: "120 kcal".to_string(),
        }
    }

    #[test]
    fn test_insert_and_list_newest_first() {
        let db = Database::open_in_memory().unwrap();
        let user = AccountStore::new(&db).sign_up("ana", "pw").unwrap();
        let store = HistoryStore::new(&db);

        store.insert(user.id, &record("first")).unwrap();
        store.insert(user.id, &record("second")).unwrap();

        let titles: Vec<_> = store
            .list_for_user(user.id)
            .unwrap()
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(titles, ["second", "first"]);
    }

    #[test]
    fn test_records_are_scoped_per_user() {
        let db = Database::open_in_memory().unwrap();
        let accounts = AccountStore::new(&db);
        let ana = accounts.sign_up("ana", "pw").unwrap();
        let bo = accounts.sign_up("bo", "pw").unwrap();
        let store = HistoryStore::new(&db);

        let mine = store.insert(ana.id, &record("mine")).unwrap();
        store.insert(bo.id, &record("theirs")).unwrap();

        assert_eq!(store.list_for_user(ana.id).unwrap().len(), 1);
        // bo cannot delete ana's record
        assert!(matches!(store.delete(bo.id, mine.id), Err(GymError::NotFound(_))));
        store.delete(ana.id, mine.id).unwrap();
        assert!(store.list_for_user(ana.id).unwrap().is_empty());
    }

    #[test]
    fn test_insert_for_missing_user_fails() {
        let db = Database::open_in_memory().unwrap();
        let store = HistoryStore::new(&db);
        assert!(matches!(store.insert(42, &record("x")), Err(GymError::Database(_))));
    }

    #[test]
    fn test_record_completion_uses_clock() {
        let db = Database::open_in_memory().unwrap();
        let user = AccountStore::new(&db).sign_up("ana", "pw").unwrap();
        let store = HistoryStore::new(&db);

        let mut clock = MockClock::new();
        clock.expect_now().returning(|| {
            NaiveDate::from_ymd_opt(2025, 3, 4)
                .unwrap()
                .and_hms_opt(18, 30, 0)
                .unwrap()
        });

        let completion = Completion {
            title: "Core Training".to_string(),
            duration_text: "30 min".to_string(),
            finished_early: true,
            elapsed_seconds: 600,
        };
        let stored = store
            .record_completion(user.id, &completion, "120 kcal", &clock)
            .unwrap();

        assert_eq!(stored.title, "Core Training");
        assert_eq!(stored.duration, "30 min");
        assert_eq!(stored.date, "Mar 04, 2025 18:30");
        assert_eq!(stored.calories, "120 kcal");
    }

    #[test]
    fn test_watch_sees_inserts_and_deletes() {
        let db = Database::open_in_memory().unwrap();
        let user = AccountStore::new(&db).sign_up("ana", "pw").unwrap();
        let store = HistoryStore::new(&db);
        let mut watch = store.watch(user.id);

        assert_eq!(watch.next_snapshot().unwrap().map(|s| s.len()), Some(0));
        assert!(watch.next_snapshot().unwrap().is_none());

        let rec = store.insert(user.id, &record("a")).unwrap();
        assert_eq!(watch.next_snapshot().unwrap().map(|s| s.len()), Some(1));

        store.delete(user.id, rec.id).unwrap();
        assert_eq!(watch.next_snapshot().unwrap().map(|s| s.len()), Some(0));
    }

    #[test]
    fn test_deleting_user_cascades() {
        let db = Database::open_in_memory().unwrap();
        let user = AccountStore::new(&db).sign_up("ana", "pw").unwrap();
        let store = HistoryStore::new(&db);
        store.insert(user.id, &record("a")).unwrap();

        db.execute("DELETE FROM users WHERE id = ?1", [user.id]).unwrap();
        assert!(store.list_for_user(user.id).unwrap().is_empty());
    }
}
