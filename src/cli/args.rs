use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "pomodoro")]
#[command(about = "A Pomodoro timer for the terminal")]
#[command(long_about = "pomodoro - A Pomodoro timer for the terminal

Alternates 25-minute work sessions with 5-minute breaks. When a session
ends the timer stops, flips to the next session and sends a desktop
notification; press Space to start the next one.

QUICK START:
  pomodoro                  Open the timer
  pomodoro config init      Write a default config file
  pomodoro detect < feed    Turn detector output into phone alerts

KEYS (in the timer):
  Space    Start / pause
  r        Reset the current session
  ?        Help
  q, Esc   Quit

For more information on a specific command, run:
  pomodoro <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    /// Path to the config file
    ///
    /// Defaults to ~/.pomodoro/config.yaml.
    #[arg(short, long, global = true, env = "POMODORO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable desktop notifications for this run
    #[arg(long, global = true)]
    pub no_notify: bool,

    /// Command to run (defaults to the timer)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive timer
    ///
    /// Full-screen countdown with a start/pause control, a reset control
    /// and a progress ring. This is the default when no command is given.
    ///
    /// # Keys
    ///
    ///   Space    Start / pause
    ///   r, R     Reset the current session
    ///   ?        Show help
    ///   q, Esc   Quit
    #[command(alias = "t")]
    Tui,

    /// Inspect or create the configuration file
    ///
    /// # Examples
    ///
    ///   pomodoro config show            Effective settings
    ///   pomodoro config show -o json    Settings as JSON
    ///   pomodoro config path            Where the file lives
    ///   pomodoro config init            Write defaults
    Config(ConfigArgs),

    /// Turn object detector output into phone alerts
    ///
    /// Reads one detection report per line (JSON) and prints a line each
    /// time the "phone detected" alert turns on or off. Accepts either
    /// {"detections": [{"label": ..., "confidence": ...}]} objects or bare
    /// arrays of {"class": ..., "score": ...} predictions.
    ///
    /// # Examples
    ///
    ///   detector | pomodoro detect
    ///   pomodoro detect --input frames.jsonl --threshold 0.3
    Detect(DetectArgs),

    /// Generate shell completions
    ///
    /// Outputs completion script for the specified shell.
    /// Redirect to a file or source directly.
    ///
    /// Example: pomodoro completions bash > ~/.bash_completion.d/pomodoro
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: String,

        /// Show installation instructions
        #[arg(long, short = 'i')]
        install: bool,
    },
}

/// Arguments for config commands.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,

    /// Print the config file path
    Path,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long, short = 'f')]
        force: bool,
    },
}

/// Arguments for the detect command.
#[derive(Args)]
pub struct DetectArgs {
    /// Read reports from this file instead of stdin
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Confidence threshold (exclusive), overrides the config
    #[arg(long, short = 't')]
    pub threshold: Option<f64>,
}
