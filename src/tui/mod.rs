//! Terminal User Interface (TUI) for gymtrack.
//!
//! A full-screen countdown for a running workout.
//! Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::{App, Outcome};

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::error::GymError;
use crate::features::session::{Completion, WorkoutRun};

/// Run the workout screen until the workout completes or the user quits.
///
/// Returns the completion, or `None` if the user quit without finishing.
/// The run's ticker is cancelled when this returns.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or drawn to.
pub fn run_workout(run: WorkoutRun, dark_theme: bool) -> Result<Option<Completion>, GymError> {
    // Setup terminal
    enable_raw_mode().map_err(|e| GymError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| GymError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| GymError::Terminal(format!("Failed to create terminal: {e}")))?;

    let mut app = App::new(run, dark_theme);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result?;
    Ok(match app.outcome {
        Some(Outcome::Completed(completion)) => Some(completion),
        Some(Outcome::Abandoned) | None => None,
    })
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), GymError> {
    while !app.should_quit() {
        app.on_tick();

        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| GymError::Terminal(format!("Failed to draw: {e}")))?;

        if let Some(action) = event::handle_events()? {
            match action {
                event::Action::Quit => app.abandon(),
                event::Action::TogglePause => app.toggle_pause()?,
                event::Action::Finish => app.finish(),
            }
        }
    }

    Ok(())
}
