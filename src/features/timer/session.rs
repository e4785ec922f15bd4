//! Session kinds and their fixed durations.

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Length of a work session in seconds (25 minutes).
pub const WORK_SECONDS: u32 = 25 * 60;

/// Length of a break session in seconds (5 minutes).
pub const BREAK_SECONDS: u32 = 5 * 60;

/// Kind of the current Pomodoro session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    /// Focused work interval
    Work,
    /// Rest interval
    Break,
}

/// Visual style flag distinguishing the two session kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStyle {
    /// Work styling
    Work,
    /// Break styling
    Break,
}

impl SessionKind {
    /// Full duration of this session kind in seconds.
    #[must_use]
    pub const fn duration_seconds(self) -> u32 {
        match self {
            Self::Work => WORK_SECONDS,
            Self::Break => BREAK_SECONDS,
        }
    }

    /// Full duration of this session kind.
    #[must_use]
    pub const fn duration(self) -> Duration {
        Duration::seconds(self.duration_seconds() as i64)
    }

    /// The session that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Work => Self::Break,
            Self::Break => Self::Work,
        }
    }

    /// Fixed label shown for this session.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Work => "Work Session",
            Self::Break => "Break Time",
        }
    }

    /// Style flag for presentation layers.
    #[must_use]
    pub const fn style(self) -> SessionStyle {
        match self {
            Self::Work => SessionStyle::Work,
            Self::Break => SessionStyle::Break,
        }
    }

    /// Short lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Break => "break",
        }
    }
}

impl std::fmt::Display for SessionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
