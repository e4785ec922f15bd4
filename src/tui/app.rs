//! Application state for the TUI.

use std::time::Instant;

use crate::features::notify::Permission;
use crate::features::timer::{
    DisplayState, SessionKind, TimerEngine, TimerEvent, PULSE_DURATION,
};

/// Help line shown on `?`.
pub const HELP_TEXT: &str = "Space:start/pause | r:reset | ?:help | q:quit";

/// Application state.
pub struct App {
    /// The timer state machine.
    engine: TimerEngine,
    /// Latest display values from the engine.
    pub display: DisplayState,
    /// End of the session-transition pulse, if one is showing.
    pub pulse_until: Option<Instant>,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Notification permission granted at startup.
    pub notifications: Permission,
    /// Pause when the terminal loses focus.
    pause_on_hide: bool,
}

impl App {
    /// Create a new app instance around `engine`.
    #[must_use]
    pub fn new(engine: TimerEngine, notifications: Permission, pause_on_hide: bool) -> Self {
        let display = engine.display();
        let mut app = Self {
            engine,
            display,
            pulse_until: None,
            status: Some("Press Space to start, ? for help".to_string()),
            should_quit: false,
            notifications,
            pause_on_hide,
        };
        app.sync(Instant::now());
        app
    }

    /// Whether the countdown is ticking.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.engine.is_running()
    }

    /// Current session kind.
    #[must_use]
    pub const fn session_kind(&self) -> SessionKind {
        self.engine.session_kind()
    }

    /// Start or pause the timer.
    pub fn toggle(&mut self, now: Instant) {
        self.engine.toggle_at(now);
        self.sync(now);
    }

    /// Rewind the current session.
    pub fn reset(&mut self, now: Instant) {
        self.engine.reset();
        self.sync(now);
        self.status = Some(format!("{} reset", self.engine.session_kind()));
    }

    /// Let the timer catch up with the clock.
    pub fn on_tick(&mut self, now: Instant) {
        self.engine.poll(now);
        self.sync(now);
    }

    /// The terminal was hidden (lost focus) or shown again.
    ///
    /// Does nothing unless `focus.pause_on_hide` is set; the timer keeps
    /// running in the background by default.
    pub fn visibility_changed(&mut self, hidden: bool, now: Instant) {
        log::debug!("Terminal {}", if hidden { "hidden" } else { "visible" });
        if hidden && self.pause_on_hide && self.engine.is_running() {
            self.engine.stop();
            self.sync(now);
            self.status = Some("Paused while hidden".to_string());
        }
    }

    /// Show the key help.
    pub fn show_help(&mut self) {
        self.status = Some(HELP_TEXT.to_string());
    }

    /// Whether the transition pulse should be drawn at `now`.
    #[must_use]
    pub fn is_pulsing(&self, now: Instant) -> bool {
        self.pulse_until.is_some_and(|until| now < until)
    }

    /// Apply queued engine events to the view state.
    fn sync(&mut self, now: Instant) {
        if self.pulse_until.is_some_and(|until| now >= until) {
            self.pulse_until = None;
        }

        let events: Vec<TimerEvent> = self.engine.drain_events().collect();
        for event in events {
            match event {
                TimerEvent::Display(display) => self.display = display,
                TimerEvent::RunState { running } => {
                    self.status = Some(if running { "Running" } else { "Paused" }.to_string());
                }
                TimerEvent::SessionComplete { finished, next } => {
                    self.pulse_until = Some(now + PULSE_DURATION);
                    self.status = Some(format!(
                        "{finished} complete! {next} is next, press Space to start"
                    ));
                }
            }
        }
    }
}
