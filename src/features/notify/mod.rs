//! Session transition notifications.
//!
//! The timer engine announces a new session through a [`Notifier`]. Delivery
//! is gated on a permission that the host grants once at startup; a denied
//! or failing notifier never affects the timer itself.

mod desktop;

pub use desktop::DesktopNotifier;

use serde::{Deserialize, Serialize};

use crate::error::PomodoroError;
use crate::features::timer::SessionKind;

/// Whether the host allows notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    /// Notifications may be shown.
    Granted,
    /// The user turned notifications off.
    Denied,
    /// Permission was never requested.
    #[default]
    Default,
}

impl Permission {
    /// Only an explicit grant allows a notification.
    #[must_use]
    pub const fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }
}

/// Something that can tell the user a new session has begun.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    /// Current notification permission.
    fn permission(&self) -> Permission;

    /// Announce that `next` is now the current session.
    ///
    /// # Errors
    ///
    /// Returns `PomodoroError::Notification` if delivery fails.
    fn notify(&self, next: SessionKind) -> Result<(), PomodoroError>;
}

/// A notifier that never shows anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn permission(&self) -> Permission {
        Permission::Denied
    }

    fn notify(&self, _next: SessionKind) -> Result<(), PomodoroError> {
        Ok(())
    }
}

/// Notification body for the session that just started.
#[must_use]
pub fn notification_body(next: SessionKind) -> String {
    match next {
        SessionKind::Break => format!(
            "Work session complete! Time for a {}-minute break.",
            SessionKind::Break.duration().num_minutes()
        ),
        SessionKind::Work => format!(
            "Break is over! Time to focus for {} minutes.",
            SessionKind::Work.duration().num_minutes()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_granted_notifies() {
        assert!(Permission::Granted.is_granted());
        assert!(!Permission::Denied.is_granted());
        assert!(!Permission::Default.is_granted());
    }

    #[test]
    fn test_silent_notifier_is_denied() {
        let notifier = SilentNotifier;
        assert_eq!(notifier.permission(), Permission::Denied);
        assert!(notifier.notify(SessionKind::Work).is_ok());
    }

    #[test]
    fn test_notification_body_names_next_session() {
        assert_eq!(
            notification_body(SessionKind::Break),
            "Work session complete! Time for a 5-minute break."
        );
        assert_eq!(
            notification_body(SessionKind::Work),
            "Break is over! Time to focus for 25 minutes."
        );
    }
}
