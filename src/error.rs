//! Error types for gymtrack.

use thiserror::Error;

/// Errors that can occur while running gymtrack.
#[derive(Debug, Error)]
pub enum GymError {
    /// A database operation failed.
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration could not be read or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The requested item does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Data could not be parsed or serialized.
    #[error("Parse error: {0}")]
    Parse(String),

    /// User input was rejected.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Sign-up or login was refused.
    #[error("{0}")]
    Auth(String),

    /// The command needs a signed-in user.
    #[error("Not signed in. Run 'gymtrack login' first.")]
    NotSignedIn,

    /// The terminal UI could not be driven.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for GymError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<serde_yaml::Error> for GymError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
