//! Path resolution for pomodoro configuration and log files.
//!
//! All pomodoro data is stored in `~/.pomodoro/`:
//! - `config.yaml` - Main configuration file
//! - `pomodoro.log` - Log output (the TUI owns the terminal)

use std::path::PathBuf;

use crate::error::PomodoroError;

/// Paths to pomodoro configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.pomodoro/`
    pub root: PathBuf,
    /// Config file: `~/.pomodoro/config.yaml`
    pub config_file: PathBuf,
    /// Log file: `~/.pomodoro/pomodoro.log`
    pub log_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, PomodoroError> {
        let home = std::env::var("HOME").map_err(|_| {
            PomodoroError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".pomodoro")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            log_file: root.join("pomodoro.log"),
            root,
        }
    }

    /// Paths rooted at the directory containing `config_file`.
    ///
    /// Used when the config file is given on the command line, so the log
    /// lands next to it.
    #[must_use]
    pub fn for_config_file(config_file: PathBuf) -> Self {
        let root = config_file
            .parent()
            .map_or_else(|| PathBuf::from("."), std::path::Path::to_path_buf);
        Self {
            log_file: root.join("pomodoro.log"),
            config_file,
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), PomodoroError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                PomodoroError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }

        Ok(())
    }
}
