//! File logging.
//!
//! The TUI owns the terminal, so log records go to `pomodoro.log` instead of
//! stderr.

use std::fs::OpenOptions;
use std::path::Path;

use simplelog::{ConfigBuilder, WriteLogger};

use crate::config::LogLevel;

/// Start the file logger. Best effort: any failure leaves logging disabled.
pub fn init(log_file: &Path, level: LogLevel) {
    if level == LogLevel::Off {
        return;
    }

    if let Some(parent) = log_file.parent() {
        if std::fs::create_dir_all(parent).is_err() {
            return;
        }
    }

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(file) = OpenOptions::new().create(true).append(true).open(log_file) {
        let _ = WriteLogger::init(level.to_level_filter(), log_config, file);
    }
}
