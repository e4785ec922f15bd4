//! Desktop notifications through the platform notification service.

use notify_rust::Notification;

use super::{notification_body, Notifier, Permission};
use crate::error::PomodoroError;
use crate::features::timer::SessionKind;

/// Notification summary line.
const SUMMARY: &str = "Pomodoro";

/// Shows session transitions as desktop notifications.
#[derive(Debug, Clone)]
pub struct DesktopNotifier {
    permission: Permission,
}

impl DesktopNotifier {
    /// Create a notifier that has not asked for permission yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            permission: Permission::Default,
        }
    }

    /// Ask for notification permission.
    ///
    /// The answer comes from the user's settings: notifications enabled in
    /// the config and not turned off on the command line. Never blocks.
    pub fn request_permission(&mut self, enabled: bool) -> Permission {
        self.permission = if enabled {
            Permission::Granted
        } else {
            Permission::Denied
        };
        log::info!("Notification permission: {:?}", self.permission);
        self.permission
    }
}

impl Default for DesktopNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for DesktopNotifier {
    fn permission(&self) -> Permission {
        self.permission
    }

    fn notify(&self, next: SessionKind) -> Result<(), PomodoroError> {
        Notification::new()
            .summary(SUMMARY)
            .body(&notification_body(next))
            .appname("pomodoro")
            .show()
            .map_err(|e| PomodoroError::Notification(e.to_string()))?;
        Ok(())
    }
}
