//! Shell completion scripts.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::PomodoroError;

const BIN_NAME: &str = "pomodoro";

/// Execute the completions command.
///
/// # Errors
///
/// Returns `PomodoroError::NotFound` for an unsupported shell name.
pub fn completions(shell: &str, install: bool) -> Result<String, PomodoroError> {
    let shell = parse_shell(shell).ok_or_else(|| {
        PomodoroError::NotFound(format!(
            "Unknown shell: {shell}. Supported: bash, zsh, fish, powershell, elvish"
        ))
    })?;

    if install {
        Ok(install_instructions(shell))
    } else {
        generate(shell)
    }
}

/// Render the completion script for `shell`.
fn generate(shell: Shell) -> Result<String, PomodoroError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, BIN_NAME, &mut buf);
    String::from_utf8(buf).map_err(|e| PomodoroError::Parse(format!("UTF-8 error: {e}")))
}

fn parse_shell(s: &str) -> Option<Shell> {
    match s.to_lowercase().as_str() {
        "bash" => Some(Shell::Bash),
        "zsh" => Some(Shell::Zsh),
        "fish" => Some(Shell::Fish),
        "powershell" | "ps" | "pwsh" => Some(Shell::PowerShell),
        "elvish" => Some(Shell::Elvish),
        _ => None,
    }
}

fn install_instructions(shell: Shell) -> String {
    match shell {
        Shell::Bash => "# Add to ~/.bashrc:\nsource <(pomodoro completions bash)\n".to_string(),
        Shell::Zsh => "# Add to ~/.zshrc (before compinit):\nsource <(pomodoro completions zsh)\n"
            .to_string(),
        Shell::Fish => {
            "pomodoro completions fish > ~/.config/fish/completions/pomodoro.fish\n".to_string()
        }
        Shell::PowerShell => {
            "# Add to $PROFILE:\npomodoro completions powershell | Out-String | Invoke-Expression\n"
                .to_string()
        }
        Shell::Elvish => "pomodoro completions elvish > ~/.elvish/lib/pomodoro.elv\n".to_string(),
        _ => "Unknown shell".to_string(),
    }
}
