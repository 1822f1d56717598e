//! User accounts.
//!
//! Sign-up, login, profile editing, and the signed-in user marker.

pub mod current;
mod storage;
mod user;

pub use storage::AccountStore;
pub use user::{ProfileUpdate, Units, User};
