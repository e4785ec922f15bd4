//! Command implementations for pomodoro.
//!
//! Each command returns the text to print; an empty string prints nothing.

mod completions;
mod config;
mod detect;

pub use completions::completions;
pub use config::config;
pub use detect::{detect, run_detect, DetectSummary};
