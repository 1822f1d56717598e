//! `SQLite` database connection and operations.
//!
//! The database is stored at `~/.gymtrack/gymtrack.db` and contains tables for:
//! - Users and their profiles
//! - Workout history
//! - Custom workout plans
//! - Weekly goals
//!
//! A `Database` is opened once by the caller and handed to every store that
//! needs it. Writes made through it advance a change generation that
//! subscriptions compare against (see [`super::Subscription`]).

use std::cell::Cell;
use std::path::Path;

use rusqlite::{Connection, Params};

use crate::error::GymError;

use super::migrations;

/// Point-in-time marker of the database contents.
///
/// Two equal tokens mean nothing was written in between, neither through
/// this handle nor by another connection to the same file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeToken {
    local: u64,
    external: i64,
}

/// Database connection wrapper.
pub struct Database {
    conn: Connection,
    generation: Cell<u64>,
}

impl Database {
    /// Open the database at a specific path.
    ///
    /// Creates the database file and runs migrations if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_at(path: &Path) -> Result<Self, GymError> {
        let conn = Connection::open(path).map_err(|e| {
            GymError::Database(format!("Failed to open database {}: {e}", path.display()))
        })?;
        log::debug!("opened database {}", path.display());
        Self::init(conn)
    }

    /// Open an in-memory database (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_in_memory() -> Result<Self, GymError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| GymError::Database(format!("Failed to open in-memory database: {e}")))?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self, GymError> {
        // Enable foreign keys
        conn.execute_batch("PRAGMA foreign_keys = ON;")
            .map_err(|e| GymError::Database(format!("Failed to enable foreign keys: {e}")))?;

        migrations::run(&conn)?;

        Ok(Self {
            conn,
            generation: Cell::new(0),
        })
    }

    /// Close the connection, reporting any error from flushing it.
    ///
    /// # Errors
    ///
    /// Returns an error if `SQLite` refuses to close the connection.
    pub fn close(self) -> Result<(), GymError> {
        self.conn
            .close()
            .map_err(|(_, e)| GymError::Database(format!("Failed to close database: {e}")))?;
        log::debug!("closed database");
        Ok(())
    }

    /// Get the current schema version.
    ///
    /// # Errors
    ///
    /// Returns an error if the version cannot be read.
    pub fn schema_version(&self) -> Result<i32, GymError> {
        migrations::get_version(&self.conn)
    }

    /// Get a reference to the underlying connection for reads.
    ///
    /// Writes should go through [`Database::execute`] or [`Database::insert`]
    /// so that subscribers see them.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Execute a statement that modifies data.
    ///
    /// Returns the number of rows changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement fails.
    pub fn execute<P: Params>(&self, sql: &str, params: P) -> Result<usize, GymError> {
        let changed = self
            .conn
            .execute(sql, params)
            .map_err(|e| GymError::Database(format!("Query failed: {e}")))?;
        if changed > 0 {
            self.mark_changed();
        }
        Ok(changed)
    }

    /// Execute an `INSERT` and return the new row id.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement fails.
    pub fn insert<P: Params>(&self, sql: &str, params: P) -> Result<i64, GymError> {
        self.conn
            .execute(sql, params)
            .map_err(|e| GymError::Database(format!("Insert failed: {e}")))?;
        self.mark_changed();
        Ok(self.conn.last_insert_rowid())
    }

    /// Current change token.
    ///
    /// # Errors
    ///
    /// Returns an error if `PRAGMA data_version` cannot be read.
    pub fn change_token(&self) -> Result<ChangeToken, GymError> {
        let external = self
            .conn
            .query_row("PRAGMA data_version", [], |row| row.get(0))
            .map_err(|e| GymError::Database(format!("Failed to read data version: {e}")))?;
        Ok(ChangeToken {
            local: self.generation.get(),
            external,
        })
    }

    fn mark_changed(&self) {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        log::debug!("database write, generation {next}");
    }
}
