//! Workout plans.
//!
//! User-authored plans, the built-in workouts, and search across both.

pub mod catalog;
mod plan;
mod storage;

pub use catalog::{Catalog, Section, WorkoutTemplate};
pub use plan::{Level, NewPlan, PlanColor, WorkoutPlan};
pub use storage::PlanStore;
