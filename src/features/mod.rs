//! Feature implementations for gymtrack.
//!
//! This module contains:
//! - Accounts and profiles
//! - Workout plans and the built-in catalog
//! - The workout session timer
//! - Workout history
//! - Statistics
//! - Weekly goals

pub mod account;
pub mod goals;
pub mod history;
pub mod plans;
pub mod session;
pub mod stats;
