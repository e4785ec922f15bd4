//! Pomodoro countdown.
//!
//! Provides the timer state machine and everything derived from it:
//! - Work/break session kinds with fixed durations
//! - The single one-second tick source
//! - Display values (digital time, minutes left, progress, labels)
//! - Transition events for presentation layers

pub mod display;
pub mod engine;
pub mod session;
pub mod ticker;

pub use display::{format_duration_mmss, format_minutes_left, DisplayState};
pub use engine::{TimerEngine, TimerEvent, PULSE_DURATION};
pub use session::{SessionKind, SessionStyle, BREAK_SECONDS, WORK_SECONDS};
pub use ticker::{Ticker, TICK_PERIOD};
