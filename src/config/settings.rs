//! Configuration settings for pomodoro.
//!
//! Settings are loaded from `~/.pomodoro/config.yaml`. Session durations are
//! fixed and not part of the configuration.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::PomodoroError;
use crate::features::distraction::DEFAULT_THRESHOLD;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Notification settings.
    pub notifications: NotificationConfig,
    /// Focus behaviour settings.
    pub focus: FocusConfig,
    /// Phone detection settings.
    pub detection: DetectionConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level for `pomodoro.log`.
    #[serde(default = "default_log_level")]
    pub log_level: LogLevel,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Log verbosity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// No logging.
    Off,
    /// Errors only.
    Error,
    /// Warnings and errors.
    Warn,
    /// Session transitions and startup.
    #[default]
    Info,
    /// Every command.
    Debug,
    /// Everything.
    Trace,
}

impl LogLevel {
    /// Lowercase name as written in the config file.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// Convert to the `log` crate's filter.
    #[must_use]
    pub const fn to_level_filter(self) -> LevelFilter {
        match self {
            Self::Off => LevelFilter::Off,
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

/// Notification settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NotificationConfig {
    /// Show a desktop notification when a session ends.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

/// Focus behaviour settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct FocusConfig {
    /// Pause the timer when the terminal loses focus. Off unless set.
    #[serde(default)]
    pub pause_on_hide: bool,
}

/// Phone detection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DetectionConfig {
    /// Minimum confidence (exclusive) for a phone detection.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

// Default value functions for serde
const fn default_log_level() -> LogLevel {
    LogLevel::Info
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_true() -> bool {
    true
}

const fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            color: default_color(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
        }
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
        }
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, PomodoroError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            PomodoroError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            PomodoroError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), PomodoroError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| PomodoroError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            PomodoroError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Check values that serde cannot.
    ///
    /// # Errors
    ///
    /// Returns an error if the detection threshold is outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), PomodoroError> {
        if !(0.0..=1.0).contains(&self.detection.threshold) {
            return Err(PomodoroError::Config(format!(
                "detection.threshold must be between 0 and 1, got {}",
                self.detection.threshold
            )));
        }
        Ok(())
    }
}
