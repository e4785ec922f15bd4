use clap::Parser;
use colored::Colorize;

use pomodoro::cli::args::{Cli, Commands};
use pomodoro::cli::commands;
use pomodoro::config::{ColorSetting, Config, Paths};
use pomodoro::error::PomodoroError;
use pomodoro::logging;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), PomodoroError> {
    let cli = Cli::parse();
    let format = cli.output;

    let paths = match cli.config {
        Some(file) => Paths::for_config_file(file),
        None => Paths::new()?,
    };
    let config = Config::load_from_path(&paths.config_file)?;

    logging::init(&paths.log_file, config.general.log_level);
    match config.general.color {
        ColorSetting::Always => colored::control::set_override(true),
        ColorSetting::Never => colored::control::set_override(false),
        ColorSetting::Auto => {}
    }

    let output = match cli.command {
        None | Some(Commands::Tui) => {
            pomodoro::tui::run(&config, !cli.no_notify)?;
            String::new()
        }
        Some(Commands::Config(args)) => commands::config(&paths, &config, args.command, format)?,
        Some(Commands::Detect(args)) => commands::detect(args, &config, format)?,
        Some(Commands::Completions { shell, install }) => commands::completions(&shell, install)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
