//! Output formatting for pomodoro.
//!
//! This module provides formatters for command results in pretty and JSON
//! form.

mod json;
mod pretty;

pub use json::*;
pub use pretty::*;
