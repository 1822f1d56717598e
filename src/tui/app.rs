//! Application state for the workout screen.

use crate::error::GymError;
use crate::features::session::{Completion, WorkoutRun};

/// How the screen was left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The countdown ended or the user finished early.
    Completed(Completion),
    /// The user quit; nothing should be saved.
    Abandoned,
}

/// Application state.
pub struct App {
    /// The workout being run.
    pub run: WorkoutRun,
    /// Dark or light palette.
    pub dark_theme: bool,
    /// Set once the screen should close.
    pub outcome: Option<Outcome>,
}

impl App {
    /// Create a new app instance around a started run.
    #[must_use]
    pub fn new(run: WorkoutRun, dark_theme: bool) -> Self {
        Self {
            run,
            dark_theme,
            outcome: None,
        }
    }

    /// Apply pending ticks.
    pub fn on_tick(&mut self) {
        if self.outcome.is_some() {
            return;
        }
        if let Some(completion) = self.run.pump() {
            self.outcome = Some(Outcome::Completed(completion));
        }
    }

    /// Pause or resume.
    ///
    /// # Errors
    ///
    /// Returns an error if resuming cannot restart the ticker.
    pub fn toggle_pause(&mut self) -> Result<(), GymError> {
        self.run.toggle_pause()
    }

    /// Finish now.
    pub fn finish(&mut self) {
        if let Some(completion) = self.run.finish_now() {
            self.outcome = Some(Outcome::Completed(completion));
        }
    }

    /// Leave without saving.
    pub fn abandon(&mut self) {
        if self.outcome.is_none() {
            log::info!("workout {:?} abandoned", self.run.title());
            self.outcome = Some(Outcome::Abandoned);
        }
    }

    /// Whether the screen should close.
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.outcome.is_some()
    }

    /// Status line under the timer.
    #[must_use]
    pub fn status_text(&self) -> &'static str {
        let timer = self.run.timer();
        if timer.is_completed() {
            "Done!"
        } else if timer.is_running() {
            "Keep going!"
        } else {
            "Paused"
        }
    }
}
