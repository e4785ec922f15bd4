//! Config command implementation.

use colored::Colorize;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::PomodoroError;
use crate::output::{format_config_pretty, to_json};

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the config cannot be serialized or written, or if
/// `init` would overwrite an existing file without `--force`.
pub fn config(
    paths: &Paths,
    config: &Config,
    cmd: ConfigCommands,
    format: OutputFormat,
) -> Result<String, PomodoroError> {
    match cmd {
        ConfigCommands::Show => match format {
            OutputFormat::Json => to_json(config),
            OutputFormat::Pretty => Ok(format_config_pretty(config, &paths.config_file)),
        },

        ConfigCommands::Path => Ok(paths.config_file.display().to_string()),

        ConfigCommands::Init { force } => init_config(paths, force, format),
    }
}

/// Write the default configuration file.
fn init_config(paths: &Paths, force: bool, format: OutputFormat) -> Result<String, PomodoroError> {
    if paths.config_file.exists() && !force {
        return Err(PomodoroError::Config(format!(
            "{} already exists. Use --force to overwrite it.",
            paths.config_file.display()
        )));
    }

    paths.ensure_dirs()?;
    Config::default().save_to_path(&paths.config_file)?;
    log::info!("Wrote default config to {}", paths.config_file.display());

    match format {
        OutputFormat::Json => to_json(&serde_json::json!({
            "written": paths.config_file.display().to_string(),
        })),
        OutputFormat::Pretty => Ok(format!(
            "{} {}",
            "✓ Wrote default config to".green(),
            paths.config_file.display()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join(".pomodoro"));

        config(
            &paths,
            &Config::default(),
            ConfigCommands::Init { force: false },
            OutputFormat::Pretty,
        )
        .unwrap();

        let loaded = Config::load_from_path(&paths.config_file).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().to_path_buf());
        std::fs::write(&paths.config_file, "focus:\n  pause_on_hide: true\n").unwrap();

        let result = config(
            &paths,
            &Config::default(),
            ConfigCommands::Init { force: false },
            OutputFormat::Pretty,
        );
        assert!(matches!(result, Err(PomodoroError::Config(_))));

        config(
            &paths,
            &Config::default(),
            ConfigCommands::Init { force: true },
            OutputFormat::Pretty,
        )
        .unwrap();
        let loaded = Config::load_from_path(&paths.config_file).unwrap();
        assert!(!loaded.focus.pause_on_hide);
    }

    #[test]
    fn test_show_json() {
        let paths = Paths::with_root(std::path::PathBuf::from("/tmp/unused"));
        let output = config(
            &paths,
            &Config::default(),
            ConfigCommands::Show,
            OutputFormat::Json,
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["notifications"]["enabled"], true);
        assert_eq!(value["focus"]["pause_on_hide"], false);
    }
}
