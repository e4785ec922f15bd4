use std::path::Path;

use chrono::Local;
use colored::Colorize;

use crate::config::Config;
use crate::features::distraction::PhoneAlert;
use crate::features::timer::{BREAK_SECONDS, WORK_SECONDS};

/// Format the effective configuration for humans
pub fn format_config_pretty(config: &Config, path: &Path) -> String {
    let on_off = |b: bool| if b { "on".green() } else { "off".dimmed() };

    let mut output = Vec::new();
    output.push(format!("Configuration ({})", path.display()).bold().to_string());
    output.push("─".repeat(40));
    output.push(format!("Work session:     {} min", WORK_SECONDS / 60));
    output.push(format!("Break:            {} min", BREAK_SECONDS / 60));
    output.push(format!("Notifications:    {}", on_off(config.notifications.enabled)));
    output.push(format!("Pause on hide:    {}", on_off(config.focus.pause_on_hide)));
    output.push(format!("Phone threshold:  {:.2}", config.detection.threshold));
    output.push(format!("Log level:        {}", config.general.log_level.as_str()));

    output.join("\n")
}

/// Format a phone alert line with a timestamp
pub fn format_alert_pretty(alert: PhoneAlert) -> String {
    let time = Local::now().format("%H:%M:%S");
    let message = match alert {
        PhoneAlert::Raised => alert.message().red().bold(),
        PhoneAlert::Cleared => alert.message().green(),
    };
    format!("[{time}] {message}")
}
