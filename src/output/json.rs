//! JSON output formatting for pomodoro.

use chrono::Local;
use serde::Serialize;
use serde_json::json;

use crate::error::PomodoroError;
use crate::features::distraction::PhoneAlert;

/// Format a phone alert as a single JSON line
///
/// # Errors
///
/// Returns `PomodoroError::Parse` if JSON serialization fails.
pub fn format_alert_json(alert: PhoneAlert, line: usize) -> Result<String, PomodoroError> {
    let output = json!({
        "alert": alert,
        "line": line,
        "message": alert.message(),
        "time": Local::now().to_rfc3339(),
    });
    Ok(serde_json::to_string(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `PomodoroError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, PomodoroError> {
    Ok(serde_json::to_string_pretty(value)?)
}
