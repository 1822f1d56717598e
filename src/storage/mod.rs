//! Storage layer for gymtrack.
//!
//! This module provides SQLite-based persistence for:
//! - Users and profiles
//! - Workout history
//! - Workout plans
//! - Weekly goals
//!
//! Plus change-driven subscriptions over any query.

mod database;
mod migrations;
mod watch;

pub use database::{ChangeToken, Database};
pub use watch::{Snapshots, Subscription};

