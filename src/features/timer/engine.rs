//! The Pomodoro timer state machine.
//!
//! The engine owns the countdown, the session kind and the single tick
//! source. Hosts drive it with commands (`start`, `stop`, `reset`,
//! `toggle`) and with time (`poll` or `tick`), then drain the queued
//! [`TimerEvent`]s to update whatever presentation they have.
//!
//! A finished session does not start the next one automatically, and the
//! engine never pauses itself. Both are left to the user (or the host's
//! configuration).

use std::collections::VecDeque;
use std::fmt;
use std::time::{Duration, Instant};

use super::display::DisplayState;
use super::session::SessionKind;
use super::ticker::{Ticker, TICK_PERIOD};
use crate::features::notify::{Notifier, SilentNotifier};

/// How long the session-transition pulse stays visible.
pub const PULSE_DURATION: Duration = Duration::from_millis(600);

/// Something the presentation layer should react to.
#[derive(Debug, Clone, PartialEq)]
pub enum TimerEvent {
    /// Display values changed.
    Display(DisplayState),
    /// The timer started or stopped.
    RunState {
        /// Whether a tick source is now active.
        running: bool,
    },
    /// A countdown reached zero and the session kind flipped.
    SessionComplete {
        /// The session that just ended.
        finished: SessionKind,
        /// The session that is now current (not yet running).
        next: SessionKind,
    },
}

/// The timer engine.
pub struct TimerEngine {
    /// Seconds left in the current session
    seconds_remaining: u32,
    /// Current session kind
    session_kind: SessionKind,
    /// The one tick source; `Some` exactly while running
    ticker: Option<Ticker>,
    /// Events not yet drained by the host
    events: VecDeque<TimerEvent>,
    /// Announces new sessions
    notifier: Box<dyn Notifier>,
}

impl TimerEngine {
    /// Create an engine at the start of a work session, not running.
    ///
    /// The initial display values are queued so the host can render the
    /// first frame from its normal event path.
    #[must_use]
    pub fn new(notifier: Box<dyn Notifier>) -> Self {
        let session_kind = SessionKind::Work;
        let mut engine = Self {
            seconds_remaining: session_kind.duration_seconds(),
            session_kind,
            ticker: None,
            events: VecDeque::new(),
            notifier,
        };
        engine.emit_display();
        engine
    }

    /// Seconds left in the current session.
    #[must_use]
    pub const fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    /// The current session kind.
    #[must_use]
    pub const fn session_kind(&self) -> SessionKind {
        self.session_kind
    }

    /// Whether the countdown is ticking.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.ticker.is_some()
    }

    /// Full duration of the current session in seconds.
    #[must_use]
    pub const fn session_duration_seconds(&self) -> u32 {
        self.session_kind.duration_seconds()
    }

    /// Current display values, derived on demand.
    #[must_use]
    pub fn display(&self) -> DisplayState {
        DisplayState::derive(self.seconds_remaining, self.session_kind, self.is_running())
    }

    /// Start ticking from now.
    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    /// Start ticking, with the first tick due one period after `now`.
    ///
    /// Starting a running timer does nothing: there is never more than one
    /// tick source.
    pub fn start_at(&mut self, now: Instant) {
        if self.ticker.is_some() {
            return;
        }

        self.ticker = Some(Ticker::start(now, TICK_PERIOD));
        log::debug!(
            "Started {} with {}s remaining",
            self.session_kind.as_str(),
            self.seconds_remaining
        );
        self.events.push_back(TimerEvent::RunState { running: true });
        self.emit_display();
    }

    /// Stop ticking. Remaining time and session kind are kept.
    pub fn stop(&mut self) {
        if !self.halt() {
            return;
        }

        log::debug!(
            "Stopped {} with {}s remaining",
            self.session_kind.as_str(),
            self.seconds_remaining
        );
        self.emit_display();
    }

    /// Alias for [`stop`](Self::stop).
    pub fn pause(&mut self) {
        self.stop();
    }

    /// Stop if running, start otherwise.
    pub fn toggle(&mut self) {
        self.toggle_at(Instant::now());
    }

    /// [`toggle`](Self::toggle) with an explicit start instant.
    pub fn toggle_at(&mut self, now: Instant) {
        if self.is_running() {
            self.stop();
        } else {
            self.start_at(now);
        }
    }

    /// Stop and rewind the current session to its full duration.
    ///
    /// The session kind never changes here.
    pub fn reset(&mut self) {
        self.halt();
        self.seconds_remaining = self.session_kind.duration_seconds();
        log::debug!("Reset {} to {}s", self.session_kind.as_str(), self.seconds_remaining);
        self.emit_display();
    }

    /// Run a tick if the tick source says one is due at `now`.
    ///
    /// Returns true if a tick ran.
    pub fn poll(&mut self, now: Instant) -> bool {
        let due = self.ticker.as_mut().is_some_and(|ticker| ticker.poll(now));
        if due {
            self.tick();
        }
        due
    }

    /// Advance the countdown by one second.
    ///
    /// Does nothing while stopped. Returns true if this tick finished the
    /// session.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }

        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);

        if self.seconds_remaining == 0 {
            self.complete_session();
            true
        } else {
            self.emit_display();
            false
        }
    }

    /// Drain queued events in the order they happened.
    pub fn drain_events(&mut self) -> impl Iterator<Item = TimerEvent> + '_ {
        self.events.drain(..)
    }

    /// Finish the current session: stop, flip kind, rewind, announce.
    fn complete_session(&mut self) {
        let finished = self.session_kind;
        let next = finished.next();

        self.halt();
        self.session_kind = next;
        self.seconds_remaining = next.duration_seconds();
        log::info!("{} complete, next up: {}", finished, next);

        self.emit_display();
        self.events
            .push_back(TimerEvent::SessionComplete { finished, next });
        self.announce(next);
    }

    /// Notify the user about `next` if permitted. Failures are only logged.
    fn announce(&self, next: SessionKind) {
        if !self.notifier.permission().is_granted() {
            log::debug!("Notification skipped: permission not granted");
            return;
        }

        if let Err(e) = self.notifier.notify(next) {
            log::warn!("Failed to send notification: {e}");
        }
    }

    /// Drop the tick source. Returns false if there was none.
    fn halt(&mut self) -> bool {
        if self.ticker.take().is_none() {
            return false;
        }
        self.events.push_back(TimerEvent::RunState { running: false });
        true
    }

    fn emit_display(&mut self) {
        let display = self.display();
        self.events.push_back(TimerEvent::Display(display));
    }
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new(Box::new(SilentNotifier))
    }
}

impl fmt::Debug for TimerEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerEngine")
            .field("seconds_remaining", &self.seconds_remaining)
            .field("session_kind", &self.session_kind)
            .field("running", &self.is_running())
            .field("pending_events", &self.events.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PomodoroError;
    use crate::features::notify::{MockNotifier, Permission};

    /// Engine with the initial display event already drained.
    fn engine() -> TimerEngine {
        let mut engine = TimerEngine::default();
        engine.drain_events().for_each(drop);
        engine
    }

    fn count_displays(events: &[TimerEvent]) -> usize {
        events
            .iter()
            .filter(|e| matches!(e, TimerEvent::Display(_)))
            .count()
    }

    fn count_completions(events: &[TimerEvent]) -> usize {
        events
            .iter()
            .filter(|e| matches!(e, TimerEvent::SessionComplete { .. }))
            .count()
    }

    #[test]
    fn test_initial_state() {
        let mut engine = TimerEngine::default();
        assert_eq!(engine.seconds_remaining(), 1500);
        assert_eq!(engine.session_kind(), SessionKind::Work);
        assert!(!engine.is_running());

        let display = engine.display();
        assert_eq!(display.digital, "25:00");
        assert_eq!(display.remaining_text, "25 minutes left");

        let events: Vec<_> = engine.drain_events().collect();
        assert_eq!(events, vec![TimerEvent::Display(display)]);
    }

    #[test]
    fn test_tick_ignored_while_stopped() {
        let mut engine = engine();
        assert!(!engine.tick());
        assert_eq!(engine.seconds_remaining(), 1500);
        assert_eq!(engine.drain_events().count(), 0);
    }

    #[test]
    fn test_n_ticks_from_n_complete_once() {
        for n in [1_u32, 2, 59, 60, 61, 1500] {
            let mut engine = engine();
            engine.start();
            // Rewind the countdown to n seconds left
            engine.seconds_remaining = n;
            engine.drain_events().for_each(drop);

            let mut completed = 0;
            for _ in 0..n {
                if engine.tick() {
                    completed += 1;
                }
            }
            let events: Vec<_> = engine.drain_events().collect();

            assert_eq!(completed, 1, "n = {n}");
            assert_eq!(count_displays(&events), n as usize, "n = {n}");
            assert_eq!(count_completions(&events), 1, "n = {n}");
        }
    }

    #[test]
    fn test_full_work_session_completes_into_break() {
        let mut engine = engine();
        engine.start();

        for _ in 0..1500 {
            engine.tick();
        }

        assert_eq!(engine.session_kind(), SessionKind::Break);
        assert_eq!(engine.seconds_remaining(), 300);
        assert!(!engine.is_running());

        let events: Vec<_> = engine.drain_events().collect();
        assert_eq!(count_completions(&events), 1);
        assert!(events.contains(&TimerEvent::SessionComplete {
            finished: SessionKind::Work,
            next: SessionKind::Break,
        }));

        // The break does not start on its own
        assert!(!engine.tick());
        assert_eq!(engine.seconds_remaining(), 300);
    }

    #[test]
    fn test_completion_event_order() {
        let mut engine = engine();
        engine.start();
        engine.seconds_remaining = 1;
        engine.drain_events().for_each(drop);

        assert!(engine.tick());
        let events: Vec<_> = engine.drain_events().collect();

        let break_display = DisplayState::derive(300, SessionKind::Break, false);
        assert_eq!(
            events,
            vec![
                TimerEvent::RunState { running: false },
                TimerEvent::Display(break_display),
                TimerEvent::SessionComplete {
                    finished: SessionKind::Work,
                    next: SessionKind::Break,
                },
            ]
        );
    }

    #[test]
    fn test_break_completes_into_work() {
        let mut engine = engine();
        engine.start();
        for _ in 0..1500 {
            engine.tick();
        }
        engine.start();
        for _ in 0..300 {
            engine.tick();
        }

        assert_eq!(engine.session_kind(), SessionKind::Work);
        assert_eq!(engine.seconds_remaining(), 1500);
        assert!(!engine.is_running());
    }

    #[test]
    fn test_double_start_has_one_ticker() {
        let mut engine = engine();
        let t0 = Instant::now();
        engine.start_at(t0);
        engine.start_at(t0 + Duration::from_millis(500));

        assert!(engine.poll(t0 + Duration::from_secs(1)));
        assert!(!engine.poll(t0 + Duration::from_secs(1)));
        assert!(!engine.poll(t0 + Duration::from_millis(1500)));
        assert_eq!(engine.seconds_remaining(), 1499);

        let events: Vec<_> = engine.drain_events().collect();
        let starts = events
            .iter()
            .filter(|e| **e == TimerEvent::RunState { running: true })
            .count();
        assert_eq!(starts, 1);
    }

    #[test]
    fn test_double_stop_is_noop() {
        let mut engine = engine();
        engine.stop();
        assert_eq!(engine.drain_events().count(), 0);

        engine.start();
        engine.stop();
        engine.drain_events().for_each(drop);
        engine.stop();
        assert_eq!(engine.drain_events().count(), 0);
        assert!(!engine.is_running());
    }

    #[test]
    fn test_poll_without_ticker_does_nothing() {
        let mut engine = engine();
        assert!(!engine.poll(Instant::now() + Duration::from_secs(5)));
        assert_eq!(engine.seconds_remaining(), 1500);
    }

    #[test]
    fn test_reset_keeps_session_kind() {
        let mut engine = engine();
        engine.start();
        for _ in 0..10 {
            engine.tick();
        }
        engine.reset();

        assert_eq!(engine.seconds_remaining(), 1500);
        assert_eq!(engine.session_kind(), SessionKind::Work);
        assert!(!engine.is_running());
    }

    #[test]
    fn test_reset_during_break() {
        let mut engine = engine();
        engine.start();
        for _ in 0..1500 {
            engine.tick();
        }
        engine.start();
        for _ in 0..42 {
            engine.tick();
        }
        engine.reset();

        assert_eq!(engine.session_kind(), SessionKind::Break);
        assert_eq!(engine.seconds_remaining(), 300);
        assert!(!engine.is_running());
    }

    #[test]
    fn test_reset_while_stopped() {
        let mut engine = engine();
        engine.reset();
        let events: Vec<_> = engine.drain_events().collect();
        assert_eq!(count_displays(&events), 1);
        assert!(!events.contains(&TimerEvent::RunState { running: false }));
    }

    #[test]
    fn test_pause_resume_continues_countdown() {
        let mut engine = engine();
        engine.start();
        for _ in 0..7 {
            engine.tick();
        }
        engine.pause();
        assert_eq!(engine.seconds_remaining(), 1493);

        engine.start();
        assert_eq!(engine.seconds_remaining(), 1493);
        engine.tick();
        assert_eq!(engine.seconds_remaining(), 1492);
    }

    #[test]
    fn test_toggle() {
        let mut engine = engine();
        engine.toggle();
        assert!(engine.is_running());

        engine.tick();
        engine.tick();
        let before = engine.seconds_remaining();

        engine.toggle();
        assert!(!engine.is_running());
        assert_eq!(engine.seconds_remaining(), before);
    }

    #[test]
    fn test_run_state_updates_control_label() {
        let mut engine = engine();
        engine.start();
        assert_eq!(engine.display().control_label, "⏸️ Pause");
        engine.stop();
        assert_eq!(engine.display().control_label, "▶️ Start");
    }

    #[test]
    fn test_notification_sent_when_granted() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_permission()
            .return_const(Permission::Granted);
        notifier
            .expect_notify()
            .withf(|next| *next == SessionKind::Break)
            .times(1)
            .returning(|_| Ok(()));

        let mut engine = TimerEngine::new(Box::new(notifier));
        engine.start();
        for _ in 0..1500 {
            engine.tick();
        }
        assert_eq!(engine.session_kind(), SessionKind::Break);
    }

    #[test]
    fn test_notification_skipped_when_denied() {
        let mut notifier = MockNotifier::new();
        notifier.expect_permission().return_const(Permission::Denied);
        notifier.expect_notify().never();

        let mut engine = TimerEngine::new(Box::new(notifier));
        engine.start();
        for _ in 0..1500 {
            engine.tick();
        }
        assert_eq!(engine.session_kind(), SessionKind::Break);
        assert_eq!(engine.seconds_remaining(), 300);
    }

    #[test]
    fn test_notification_failure_does_not_affect_transition() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_permission()
            .return_const(Permission::Granted);
        notifier
            .expect_notify()
            .times(1)
            .returning(|_| Err(PomodoroError::Notification("no daemon".to_string())));

        let mut engine = TimerEngine::new(Box::new(notifier));
        engine.start();
        for _ in 0..1500 {
            engine.tick();
        }

        assert_eq!(engine.session_kind(), SessionKind::Break);
        assert_eq!(engine.seconds_remaining(), 300);
        assert!(!engine.is_running());
    }
}
