//! Workout session runtime.
//!
//! Provides:
//! - `SessionTimer`: the countdown state machine
//! - `Ticker`: a cancellable interval schedule
//! - `WorkoutRun`: a timer driven by its own ticker for one session

mod runner;
mod ticker;
mod timer;

pub use runner::{Completion, Step, WorkoutRun};
pub use ticker::{Tick, Ticker};
pub use timer::{SessionTimer, TimerState, FINAL_STRETCH_SECONDS};
