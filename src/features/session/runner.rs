//! A workout in progress: the countdown plus the ticker that drives it.

use std::time::Duration;

use serde::Serialize;

use super::ticker::Ticker;
use super::timer::SessionTimer;
use crate::error::GymError;

/// Emitted once when a workout run completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Completion {
    /// Workout title.
    pub title: String,
    /// Planned duration text, stored with the history record.
    pub duration_text: String,
    /// True if the user finished before the countdown reached zero.
    pub finished_early: bool,
    /// Seconds actually counted down.
    pub elapsed_seconds: i64,
}

/// Result of waiting for the next tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// One second passed; the run continues.
    Ticked,
    /// The countdown reached zero.
    Completed(Completion),
    /// No tick can arrive: the run is paused or already complete.
    Idle,
}

/// One workout session.
///
/// The ticker only exists while the timer is running. Pausing drops it, so
/// missed seconds are never replayed, and resuming starts a new schedule.
/// Dropping the run cancels the ticker.
pub struct WorkoutRun {
    title: String,
    duration_text: String,
    timer: SessionTimer,
    ticker: Option<Ticker>,
    interval: Duration,
}

impl WorkoutRun {
    /// Start a workout, ticking once per `interval`.
    ///
    /// # Errors
    ///
    /// Returns an error if the ticker cannot be started.
    pub fn start(title: &str, duration_text: &str, interval: Duration) -> Result<Self, GymError> {
        let timer = SessionTimer::new(duration_text);
        log::info!(
            "starting workout {title:?} for {}",
            timer.format_remaining()
        );
        Ok(Self {
            title: title.to_string(),
            duration_text: duration_text.to_string(),
            timer,
            ticker: Some(Ticker::start(interval)?),
            interval,
        })
    }

    /// The underlying countdown.
    #[must_use]
    pub const fn timer(&self) -> &SessionTimer {
        &self.timer
    }

    /// Workout title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Pause or resume.
    ///
    /// # Errors
    ///
    /// Returns an error if resuming cannot start a new ticker.
    pub fn toggle_pause(&mut self) -> Result<(), GymError> {
        self.timer.toggle_pause();
        if self.timer.is_running() {
            if self.ticker.is_none() {
                self.ticker = Some(Ticker::start(self.interval)?);
            }
        } else {
            self.ticker = None;
        }
        Ok(())
    }

    /// Apply every tick that has arrived, without blocking.
    ///
    /// Returns the completion if one of them ended the countdown.
    pub fn pump(&mut self) -> Option<Completion> {
        let pending = self.ticker.as_ref().map_or(0, Ticker::drain);
        for _ in 0..pending {
            if self.timer.tick() {
                return Some(self.complete(false));
            }
        }
        None
    }

    /// Block until the next tick and apply it.
    pub fn step(&mut self) -> Step {
        let Some(ticker) = self.ticker.as_ref() else {
            return Step::Idle;
        };
        // wait a few intervals so a stalled ticker cannot hang the caller
        if ticker.wait(self.interval.saturating_mul(4)).is_none() {
            return Step::Idle;
        }
        if self.timer.tick() {
            Step::Completed(self.complete(false))
        } else {
            Step::Ticked
        }
    }

    /// Finish immediately.
    ///
    /// Returns `None` if the run had already completed.
    pub fn finish_now(&mut self) -> Option<Completion> {
        if self.timer.finish_now() {
            Some(self.complete(true))
        } else {
            None
        }
    }

    fn complete(&mut self, finished_early: bool) -> Completion {
        self.ticker = None;
        log::info!(
            "workout {:?} complete after {}s{}",
            self.title,
            self.timer.elapsed_seconds(),
            if finished_early { " (finished early)" } else { "" }
        );
        Completion {
            title: self.title.clone(),
            duration_text: self.duration_text.clone(),
            finished_early,
            elapsed_seconds: self.timer.elapsed_seconds(),
        }
    }
}
