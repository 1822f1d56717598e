//! User account storage.

use rusqlite::{params, OptionalExtension, Row};

use super::user::{ProfileUpdate, Units, User};
use crate::error::GymError;
use crate::storage::Database;

const USER_COLUMNS: &str = "id, username, password, display_name, age, weight, height, units, profile_picture_path";

/// Storage for user accounts.
pub struct AccountStore<'db> {
    db: &'db Database,
}

impl<'db> AccountStore<'db> {
    /// Create a store over an open database.
    #[must_use]
    pub const fn new(db: &'db Database) -> Self {
        Self { db }
    }

    /// Register a new user.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank username or password, and `Auth`
    /// if the username is taken.
    pub fn sign_up(&self, username: &str, password: &str) -> Result<User, GymError> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(GymError::InvalidInput(
                "Username and password must not be empty".to_string(),
            ));
        }

        if self.find_by_username(username)?.is_some() {
            return Err(GymError::Auth("Username already exists".to_string()));
        }

        let id = self.db.insert(
            "INSERT INTO users (username, password, units) VALUES (?1, ?2, ?3)",
            params![username, password, Units::Metric.as_str()],
        )?;
        log::info!("signed up user {username:?} (id {id})");
        self.require(id)
    }

    /// Check credentials and return the matching user.
    ///
    /// # Errors
    ///
    /// Returns `Auth` if the username is unknown or the password differs.
    pub fn login(&self, username: &str, password: &str) -> Result<User, GymError> {
        match self.find_by_username(username.trim())? {
            Some(user) if user.password == password => {
                log::info!("user {:?} logged in", user.username);
                Ok(user)
            }
            _ => Err(GymError::Auth("Invalid username or password".to_string())),
        }
    }

    /// Get a user by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get(&self, id: i64) -> Result<Option<User>, GymError> {
        self.db
            .connection()
            .query_row(
                &format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?1"),
                [id],
                row_to_user,
            )
            .optional()
            .map_err(|e| GymError::Database(format!("Failed to query user: {e}")))
    }

    /// Get a user by id, failing if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if there is no such user.
    pub fn require(&self, id: i64) -> Result<User, GymError> {
        self.get(id)?
            .ok_or_else(|| GymError::NotFound(format!("User with ID: {id}")))
    }

    fn find_by_username(&self, username: &str) -> Result<Option<User>, GymError> {
        self.db
            .connection()
            .query_row(
                &format!("SELECT {USER_COLUMNS} FROM users WHERE username = ?1"),
                [username],
                row_to_user,
            )
            .optional()
            .map_err(|e| GymError::Database(format!("Failed to query user: {e}")))
    }

    /// Apply profile edits and return the updated user.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a negative age, weight or height, and
    /// `NotFound` if the user does not exist.
    pub fn update_profile(&self, id: i64, update: &ProfileUpdate) -> Result<User, GymError> {
        let mut user = self.require(id)?;

        if let Some(name) = &update.display_name {
            user.display_name = name.trim().to_string();
        }
        if let Some(age) = update.age {
            if age < 0 {
                return Err(GymError::InvalidInput("Age must not be negative".to_string()));
            }
            user.age = age;
        }
        if let Some(weight) = update.weight {
            if weight < 0.0 {
                return Err(GymError::InvalidInput("Weight must not be negative".to_string()));
            }
            user.weight = weight;
        }
        if let Some(height) = update.height {
            if height < 0.0 {
                return Err(GymError::InvalidInput("Height must not be negative".to_string()));
            }
            user.height = height;
        }
        if let Some(path) = &update.profile_picture_path {
            user.profile_picture_path = Some(path.clone()).filter(|p| !p.is_empty());
        }

        self.db.execute(
            r"UPDATE users SET
              display_name = ?1,
              age = ?2,
              weight = ?3,
              height = ?4,
              profile_picture_path = ?5
              WHERE id = ?6",
            params![
                user.display_name,
                user.age,
                user.weight,
                user.height,
                user.profile_picture_path,
                id,
            ],
        )?;
        Ok(user)
    }

    /// Replace the user's password.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty password and `NotFound` for an
    /// unknown user.
    pub fn update_password(&self, id: i64, new_password: &str) -> Result<(), GymError> {
        if new_password.is_empty() {
            return Err(GymError::InvalidInput("Password must not be empty".to_string()));
        }
        let changed = self.db.execute(
            "UPDATE users SET password = ?1 WHERE id = ?2",
            params![new_password, id],
        )?;
        if changed == 0 {
            return Err(GymError::NotFound(format!("User with ID: {id}")));
        }
        Ok(())
    }

    /// Switch between metric and imperial, returning the new setting.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown user.
    pub fn toggle_units(&self, id: i64) -> Result<Units, GymError> {
        let units = self.require(id)?.units.toggled();
        self.db.execute(
            "UPDATE users SET units = ?1 WHERE id = ?2",
            params![units.as_str(), id],
        )?;
        Ok(units)
    }
}

fn row_to_user(row: &Row<'_>) -> rusqlite::Result<User> {
    let units: String = row.get(7)?;
    Ok(User {
        id: row.get(0)?,
        username: row.get(1)?,
        password: row.get(2)?,
        display_name: row.get(3)?,
        age: row.get(4)?,
        weight: row.get(5)?,
        height: row.get(6)?,
        units: Units::from_stored(&units),
        profile_picture_path: row.get(8)?,
    })
}
