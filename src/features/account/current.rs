//! The signed-in user, remembered between invocations.
//!
//! Stored as a small YAML file holding the user id.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::storage::AccountStore;
use super::user::User;
use crate::error::GymError;

#[derive(Debug, Serialize, Deserialize)]
struct SessionFile {
    user_id: i64,
}

/// Remember `user_id` as signed in.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn remember(path: &Path, user_id: i64) -> Result<(), GymError> {
    let contents = serde_yaml::to_string(&SessionFile { user_id })?;
    std::fs::write(path, contents).map_err(|e| {
        GymError::Config(format!("Failed to write session file {}: {e}", path.display()))
    })
}

/// Forget the signed-in user. Succeeds if nobody was signed in.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be removed.
pub fn forget(path: &Path) -> Result<(), GymError> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// The remembered user id, if any.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn signed_in_id(path: &Path) -> Result<Option<i64>, GymError> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path)?;
    let file: SessionFile = serde_yaml::from_str(&contents).map_err(|e| {
        GymError::Config(format!("Failed to parse session file {}: {e}", path.display()))
    })?;
    Ok(Some(file.user_id))
}

/// Load the signed-in user.
///
/// A remembered id whose user no longer exists counts as signed out.
///
/// # Errors
///
/// Returns `NotSignedIn` when nobody is signed in.
pub fn current_user(path: &Path, accounts: &AccountStore<'_>) -> Result<User, GymError> {
    let Some(id) = signed_in_id(path)? else {
        return Err(GymError::NotSignedIn);
    };
    match accounts.get(id)? {
        Some(user) => Ok(user),
        None => {
            log::warn!("session file points at missing user {id}");
            Err(GymError::NotSignedIn)
        }
    }
}
