//! pomodoro - A Pomodoro timer for the terminal
//!
//! This crate provides the timer state machine, desktop notifications and a
//! full-screen countdown built on ratatui.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod features;
pub mod logging;
pub mod output;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::PomodoroError;
pub use features::timer::TimerEngine;
