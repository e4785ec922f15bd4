//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::PomodoroError;

/// How long to wait for input before letting the timer catch up.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start or pause the timer.
    Toggle,
    /// Reset the current session.
    Reset,
    /// Show key help.
    Help,
    /// The terminal lost (`true`) or regained (`false`) focus.
    Visibility(bool),
}

/// Handle terminal events.
///
/// Returns an action to take, or None if no action is needed. Keys that map
/// to an action are consumed here and never reach anything else.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events() -> Result<Option<Action>, PomodoroError> {
    if !event::poll(POLL_TIMEOUT)
        .map_err(|e| PomodoroError::Terminal(format!("Event poll failed: {e}")))?
    {
        return Ok(None);
    }

    let event =
        event::read().map_err(|e| PomodoroError::Terminal(format!("Event read failed: {e}")))?;

    Ok(match event {
        Event::Key(key) => map_key(key),
        Event::FocusLost => Some(Action::Visibility(true)),
        Event::FocusGained => Some(Action::Visibility(false)),
        _ => None,
    })
}

/// Map a key press to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(' ') => Some(Action::Toggle),
        KeyCode::Char('r' | 'R') => Some(Action::Reset),
        KeyCode::Char('?') => Some(Action::Help),
        _ => None,
    }
}
