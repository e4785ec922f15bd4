//! Presentational values derived from the timer state.
//!
//! Nothing here is stored: every value is recomputed from
//! `(seconds_remaining, session_kind, running)` after each state change.

use chrono::Duration;
use serde::Serialize;

use super::session::{SessionKind, SessionStyle};

/// Control label while the timer is stopped.
pub const START_LABEL: &str = "▶️ Start";

/// Control label while the timer is running.
pub const PAUSE_LABEL: &str = "⏸️ Pause";

/// Everything a renderer needs to draw the timer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayState {
    /// Remaining time as `MM:SS`.
    pub digital: String,
    /// Remaining whole minutes, rounded up, as text.
    pub remaining_text: String,
    /// Elapsed share of the session in `[0, 1]`.
    pub progress: f64,
    /// Fixed session label.
    pub session_label: &'static str,
    /// Visual style flag for the session.
    pub style: SessionStyle,
    /// Label of the start/pause control.
    pub control_label: &'static str,
    /// Seconds left in the session.
    pub seconds_remaining: u32,
}

impl DisplayState {
    /// Derive display values from the raw timer state.
    #[must_use]
    pub fn derive(seconds_remaining: u32, kind: SessionKind, running: bool) -> Self {
        let remaining = Duration::seconds(i64::from(seconds_remaining));
        Self {
            digital: format_duration_mmss(remaining),
            remaining_text: format_minutes_left(seconds_remaining),
            progress: progress_fraction(seconds_remaining, kind),
            session_label: kind.label(),
            style: kind.style(),
            control_label: control_label(running),
            seconds_remaining,
        }
    }

    /// Stroke-dash offset for a circular ring of the given circumference.
    ///
    /// A full circumference means nothing elapsed; zero means complete.
    #[must_use]
    pub fn ring_offset(&self, circumference: f64) -> f64 {
        circumference * (1.0 - self.progress)
    }
}

/// Format a duration as MM:SS.
#[must_use]
pub fn format_duration_mmss(d: Duration) -> String {
    let total_seconds = d.num_seconds().abs();
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Remaining minutes rounded up, e.g. "1 minute left", "25 minutes left".
#[must_use]
pub fn format_minutes_left(seconds_remaining: u32) -> String {
    let minutes = seconds_remaining.div_ceil(60);
    format!(
        "{} minute{} left",
        minutes,
        if minutes == 1 { "" } else { "s" }
    )
}

/// Elapsed share of the session, clamped to `[0, 1]`.
#[must_use]
pub fn progress_fraction(seconds_remaining: u32, kind: SessionKind) -> f64 {
    let total = f64::from(kind.duration_seconds());
    if total == 0.0 {
        return 1.0;
    }
    let elapsed = total - f64::from(seconds_remaining);
    (elapsed / total).clamp(0.0, 1.0)
}

/// Label for the start/pause control.
#[must_use]
pub const fn control_label(running: bool) -> &'static str {
    if running {
        PAUSE_LABEL
    } else {
        START_LABEL
    }
}
