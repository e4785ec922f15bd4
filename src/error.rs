//! Error types for pomodoro.
//!
//! The timer engine itself never fails; these errors come from the edges
//! of the program (configuration, terminal setup, notifications, input).

use thiserror::Error;

/// Errors that can occur outside the timer engine.
#[derive(Debug, Error)]
pub enum PomodoroError {
    /// Configuration could not be read, parsed or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Underlying IO failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input could not be parsed or output could not be serialized.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The terminal could not be set up, drawn or restored.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// A desktop notification could not be delivered.
    #[error("Notification error: {0}")]
    Notification(String),

    /// A requested item does not exist.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<serde_json::Error> for PomodoroError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<serde_yaml::Error> for PomodoroError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Config(e.to_string())
    }
}
