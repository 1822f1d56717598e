//! Path resolution for gymtrack configuration and data files.
//!
//! All gymtrack data is stored in `~/.gymtrack/`:
//! - `config.yaml` - Main configuration file
//! - `gymtrack.db` - SQLite database for users, plans, history and goals
//! - `session.yaml` - The signed-in user
//!
//! Set `GYMTRACK_HOME` to use a different root directory.

use std::path::PathBuf;

use crate::error::GymError;

/// Environment variable overriding the data root.
pub const HOME_ENV: &str = "GYMTRACK_HOME";

/// Paths to gymtrack configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.gymtrack/`
    pub root: PathBuf,
    /// Config file: `~/.gymtrack/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.gymtrack/gymtrack.db`
    pub database: PathBuf,
    /// Signed-in user marker: `~/.gymtrack/session.yaml`
    pub session_file: PathBuf,
}

impl Paths {
    /// Resolve paths from `GYMTRACK_HOME`, or from the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if neither variable is set.
    pub fn new() -> Result<Self, GymError> {
        if let Some(root) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::with_root(PathBuf::from(root)));
        }

        let home = std::env::var("HOME")
            .map_err(|_| GymError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".gymtrack")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("gymtrack.db"),
            session_file: root.join("session.yaml"),
            root,
        }
    }

    /// Ensure the root directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), GymError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                GymError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }
        Ok(())
    }
}
