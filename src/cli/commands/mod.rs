//! Command implementations for gymtrack.
//!
//! Each command takes the shared [`AppContext`] and returns the text to print.

mod account;
mod completions;
mod context;
mod history;
mod settings;
mod stats;
mod workout;

pub use account::{login, logout, password, profile, signup, whoami};
pub use completions::completions;
pub use context::AppContext;
pub use history::history;
pub use settings::settings;
pub use stats::{goal, stats};
pub use workout::{plan, start, workouts};
