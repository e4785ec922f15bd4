//! Feature implementations for pomodoro.
//!
//! This module contains:
//! - The Pomodoro timer engine
//! - Session transition notifications
//! - Phone distraction alerts

pub mod distraction;
pub mod notify;
pub mod timer;
