//! Event handling for the workout screen.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::GymError;

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave without saving.
    Quit,
    /// Pause or resume the countdown.
    TogglePause,
    /// Finish now and save.
    Finish,
}

/// Map a key press to an action.
#[must_use]
pub fn key_action(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(' ' | 'p') => Some(Action::TogglePause),
        KeyCode::Char('f') | KeyCode::Enter => Some(Action::Finish),
        _ => None,
    }
}

/// Wait briefly for a terminal event.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events() -> Result<Option<Action>, GymError> {
    // Poll for events with a small timeout so ticks are drawn promptly
    if event::poll(Duration::from_millis(100))
        .map_err(|e| GymError::Terminal(format!("Event poll failed: {e}")))?
    {
        if let Event::Key(key) =
            event::read().map_err(|e| GymError::Terminal(format!("Event read failed: {e}")))?
        {
            return Ok(key_action(key));
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(key_action(press(KeyCode::Char(' '))), Some(Action::TogglePause));
        assert_eq!(key_action(press(KeyCode::Char('p'))), Some(Action::TogglePause));
        assert_eq!(key_action(press(KeyCode::Char('f'))), Some(Action::Finish));
        assert_eq!(key_action(press(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(key_action(press(KeyCode::Char('x'))), None);
        assert_eq!(
            key_action(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_release_ignored() {
        let mut key = press(KeyCode::Char('f'));
        key.kind = KeyEventKind::Release;
        assert_eq!(key_action(key), None);
    }
}
