//! Terminal User Interface (TUI) for pomodoro.
//!
//! Full-screen countdown with start/pause and reset controls.
//! Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::App;
pub use event::{map_key, Action};

use std::io;
use std::time::Instant;

use crossterm::{
    event::{DisableFocusChange, EnableFocusChange},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::config::Config;
use crate::error::PomodoroError;
use crate::features::notify::DesktopNotifier;
use crate::features::timer::TimerEngine;

/// Run the TUI application.
///
/// Notification permission is requested once here, before the terminal is
/// taken over.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(config: &Config, notify: bool) -> Result<(), PomodoroError> {
    let mut notifier = DesktopNotifier::new();
    let permission = notifier.request_permission(notify && config.notifications.enabled);

    let engine = TimerEngine::new(Box::new(notifier));
    let mut app = App::new(engine, permission, config.focus.pause_on_hide);

    // Setup terminal
    enable_raw_mode()
        .map_err(|e| PomodoroError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)
        .map_err(|e| PomodoroError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| PomodoroError::Terminal(format!("Failed to create terminal: {e}")))?;

    log::info!("Timer started");
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableFocusChange).ok();
    terminal.show_cursor().ok();

    log::info!("Timer closed");
    result
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), PomodoroError> {
    while !app.should_quit {
        // Draw UI
        let now = Instant::now();
        terminal
            .draw(|frame| ui::render(frame, app, now))
            .map_err(|e| PomodoroError::Terminal(format!("Failed to draw: {e}")))?;

        // Handle events
        if let Some(action) = event::handle_events()? {
            let now = Instant::now();
            match action {
                Action::Quit => app.should_quit = true,
                Action::Toggle => app.toggle(now),
                Action::Reset => app.reset(now),
                Action::Help => app.show_help(),
                Action::Visibility(hidden) => app.visibility_changed(hidden, now),
            }
        }

        app.on_tick(Instant::now());
    }

    Ok(())
}
