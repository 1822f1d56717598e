//! Countdown state machine for a single workout session.

use serde::{Deserialize, Serialize};

use crate::core::duration::{format_seconds, to_seconds};

/// Seconds below which the display switches to its warning colour.
pub const FINAL_STRETCH_SECONDS: i64 = 10;

/// Timer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerState {
    /// Counting down
    Running,
    /// Countdown is held
    Paused,
    /// Reached zero or was finished early
    Completed,
}

/// A countdown timer for one workout.
///
/// Starts `Running`. [`SessionTimer::tick`] and [`SessionTimer::finish_now`]
/// each report the transition to `Completed`, and only one of them ever
/// reports it.
#[derive(Debug, Clone)]
pub struct SessionTimer {
    total_seconds: i64,
    remaining_seconds: i64,
    state: TimerState,
}

impl SessionTimer {
    /// Create a running timer from duration text such as `"30 min"`.
    ///
    /// Unreadable text falls back to one minute.
    #[must_use]
    pub fn new(duration_text: &str) -> Self {
        Self::from_seconds(to_seconds(duration_text))
    }

    /// Create a running timer for an exact number of seconds.
    #[must_use]
    pub fn from_seconds(seconds: i64) -> Self {
        let seconds = seconds.max(0);
        Self {
            total_seconds: seconds,
            remaining_seconds: seconds,
            state: TimerState::Running,
        }
    }

    /// Advance the countdown by one second.
    ///
    /// Returns true if the timer just completed.
    pub fn tick(&mut self) -> bool {
        if self.state != TimerState::Running {
            return false;
        }

        if self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
        }

        if self.remaining_seconds == 0 {
            self.state = TimerState::Completed;
            true
        } else {
            false
        }
    }

    /// Switch between running and paused. Does nothing once completed.
    pub fn toggle_pause(&mut self) {
        self.state = match self.state {
            TimerState::Running => TimerState::Paused,
            TimerState::Paused => TimerState::Running,
            TimerState::Completed => TimerState::Completed,
        };
    }

    /// Complete immediately, keeping the remaining time as it is.
    ///
    /// Returns true if this call completed the timer.
    pub fn finish_now(&mut self) -> bool {
        if self.state == TimerState::Completed {
            return false;
        }
        self.state = TimerState::Completed;
        true
    }

    /// Remaining time over total time, `0.0` for a zero-length timer.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_fraction(&self) -> f64 {
        if self.total_seconds == 0 {
            return 0.0;
        }
        (self.remaining_seconds as f64 / self.total_seconds as f64).clamp(0.0, 1.0)
    }

    /// Seconds left on the countdown.
    #[must_use]
    pub const fn remaining_seconds(&self) -> i64 {
        self.remaining_seconds
    }

    /// Seconds the timer started with.
    #[must_use]
    pub const fn total_seconds(&self) -> i64 {
        self.total_seconds
    }

    /// Seconds counted down so far.
    #[must_use]
    pub const fn elapsed_seconds(&self) -> i64 {
        self.total_seconds - self.remaining_seconds
    }

    /// Get the current state.
    #[must_use]
    pub const fn state(&self) -> TimerState {
        self.state
    }

    /// Check if the timer is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    /// Check if the timer is completed.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.state == TimerState::Completed
    }

    /// True when fewer than [`FINAL_STRETCH_SECONDS`] remain.
    #[must_use]
    pub const fn is_final_stretch(&self) -> bool {
        self.remaining_seconds < FINAL_STRETCH_SECONDS
    }

    /// Format remaining time as MM:SS.
    #[must_use]
    pub fn format_remaining(&self) -> String {
        format_seconds(self.remaining_seconds)
    }
}
