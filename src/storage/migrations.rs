//! Database migrations for gymtrack.
//!
//! Each migration is a function that upgrades the schema by one version.
//! Migrations are run automatically when the database is opened.

use rusqlite::Connection;

use crate::error::GymError;

/// Current schema version.
const CURRENT_VERSION: i32 = 1;

/// Get the current schema version from the database.
///
/// Returns 0 if no version has been set (new database).
pub fn get_version(conn: &Connection) -> Result<i32, GymError> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| GymError::Database(format!("Failed to get schema version: {e}")))
}

/// Set the schema version in the database.
fn set_version(conn: &Connection, version: i32) -> Result<(), GymError> {
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))
        .map_err(|e| GymError::Database(format!("Failed to set schema version: {e}")))
}

/// Run all pending migrations.
pub fn run(conn: &Connection) -> Result<(), GymError> {
    let current = get_version(conn)?;

    if current >= CURRENT_VERSION {
        return Ok(());
    }

    for version in (current + 1)..=CURRENT_VERSION {
        log::debug!("migrating schema to v{version}");
        run_migration(conn, version)?;
        set_version(conn, version)?;
    }

    Ok(())
}

/// Run a specific migration.
fn run_migration(conn: &Connection, version: i32) -> Result<(), GymError> {
    match version {
        1 => migrate_v1(conn),
        _ => Err(GymError::Database(format!(
            "Unknown migration version: {version}"
        ))),
    }
}

/// Migration v1: Initial schema.
///
/// Creates tables for:
/// - `users`: Accounts and profile data
/// - `history`: Completed workout sessions
/// - `workout_plans`: User-authored workouts
/// - `goals`: One weekly goal per user
fn migrate_v1(conn: &Connection) -> Result<(), GymError> {
    conn.execute_batch(
        r"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL UNIQUE,
            password TEXT NOT NULL,
            display_name TEXT NOT NULL DEFAULT '',
            age INTEGER NOT NULL DEFAULT 0,
            weight REAL NOT NULL DEFAULT 0,
            height REAL NOT NULL DEFAULT 0,
            units TEXT NOT NULL DEFAULT 'Metric',
            profile_picture_path TEXT
        );

        CREATE TABLE IF NOT EXISTS history (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            title TEXT NOT NULL,
            duration TEXT NOT NULL,
            date TEXT NOT NULL,
            calories TEXT NOT NULL DEFAULT '120 kcal'
        );

        CREATE INDEX IF NOT EXISTS idx_history_user
        ON history(user_id);

        CREATE TABLE IF NOT EXISTS workout_plans (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            title TEXT NOT NULL,
            duration TEXT NOT NULL,
            level TEXT NOT NULL DEFAULT 'Beginner',
            color_hex TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_workout_plans_user
        ON workout_plans(user_id);

        CREATE TABLE IF NOT EXISTS goals (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL UNIQUE REFERENCES users(id) ON DELETE CASCADE,
            weekly_workout_target INTEGER NOT NULL,
            weekly_calorie_target INTEGER NOT NULL
        );
        ",
    )
    .map_err(|e| GymError::Database(format!("Migration v1 failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_database_migrates_to_current() {
        let conn = Connection::open_in_memory().unwrap();
        assert_eq!(get_version(&conn).unwrap(), 0);

        run(&conn).unwrap();
        assert_eq!(get_version(&conn).unwrap(), CURRENT_VERSION);
    }

    #[test]
    fn test_run_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        run(&conn).unwrap();
        run(&conn).unwrap();
        assert_eq!(get_version(&conn).unwrap(), CURRENT_VERSION);
    }

    #[test]
    fn test_all_tables_exist() {
        let conn = Connection::open_in_memory().unwrap();
        run(&conn).unwrap();

        for table in ["users", "history", "workout_plans", "goals"] {
            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
                    [table],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "missing table {table}");
        }
    }
}
