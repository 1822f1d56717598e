//! Shared state for command handlers.

use crate::cli::args::OutputFormat;
use crate::config::{Config, Paths};
use crate::error::GymError;
use crate::features::account::{current, AccountStore, User};
use crate::storage::Database;

/// Everything a command needs: the open database, settings, and paths.
///
/// Opened once per process and closed explicitly at the end.
pub struct AppContext {
    /// Open database.
    pub db: Database,
    /// Loaded settings.
    pub config: Config,
    /// Data file locations.
    pub paths: Paths,
    /// Output format for this invocation.
    pub format: OutputFormat,
}

impl AppContext {
    /// Load config and open the database under `paths`.
    ///
    /// `format` overrides the configured default output format.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory, config, or database cannot
    /// be opened.
    pub fn open(paths: Paths, format: Option<OutputFormat>) -> Result<Self, GymError> {
        paths.ensure_dirs()?;
        let config = Config::load_from_path(&paths.config_file)?;
        let db = Database::open_at(&paths.database)?;
        Ok(Self {
            db,
            format: format.unwrap_or(config.general.default_output),
            config,
            paths,
        })
    }

    /// Close the database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database does not close cleanly.
    pub fn close(self) -> Result<(), GymError> {
        self.db.close()
    }

    /// Account store over this context's database.
    #[must_use]
    pub const fn accounts(&self) -> AccountStore<'_> {
        AccountStore::new(&self.db)
    }

    /// The signed-in user.
    ///
    /// # Errors
    ///
    /// Returns `NotSignedIn` if nobody is signed in.
    pub fn current_user(&self) -> Result<User, GymError> {
        current::current_user(&self.paths.session_file, &self.accounts())
    }

    /// Persist the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_config(&self) -> Result<(), GymError> {
        self.config.save_to_path(&self.paths.config_file)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use tempfile::TempDir;

    /// A context rooted in a temp directory, with `ana` signed in.
    pub fn signed_in() -> (TempDir, AppContext, User) {
        let dir = TempDir::new().unwrap();
        let ctx = AppContext::open(Paths::with_root(dir.path().to_path_buf()), Some(OutputFormat::Pretty))
            .unwrap();
        let user = ctx.accounts().sign_up("ana", "pw").unwrap();
        current::remember(&ctx.paths.session_file, user.id).unwrap();
        (dir, ctx, user)
    }
}
