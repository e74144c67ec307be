//! Shell completions command implementation.
//!
//! Generate shell completions for bash, zsh, fish, and powershell.

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::{generate, Shell as ClapShell};

use crate::cli::{Cli, Shell};

/// Maps the CLI shell choice onto clap_complete's shell type.
fn to_clap_shell(shell: &Shell) -> ClapShell {
    match shell {
        Shell::Bash => ClapShell::Bash,
        Shell::Zsh => ClapShell::Zsh,
        Shell::Fish => ClapShell::Fish,
        Shell::Powershell => ClapShell::PowerShell,
    }
}

/// Writes completions for `shell` to `out`.
fn write_completions(shell: &Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    generate(to_clap_shell(shell), &mut cmd, "ev", out);
}

/// Generate shell completions for the given shell and write to stdout.
///
/// # Errors
///
/// Returns an error if flushing stdout fails.
pub fn execute(shell: &Shell) -> io::Result<()> {
    let mut stdout = io::stdout();
    write_completions(shell, &mut stdout);
    stdout.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_mapping() {
        assert!(matches!(to_clap_shell(&Shell::Bash), ClapShell::Bash));
        assert!(matches!(to_clap_shell(&Shell::Zsh), ClapShell::Zsh));
        assert!(matches!(to_clap_shell(&Shell::Fish), ClapShell::Fish));
        assert!(matches!(
            to_clap_shell(&Shell::Powershell),
            ClapShell::PowerShell
        ));
    }

    #[test]
    fn test_bash_completions_mention_commands() {
        let mut buf = Vec::new();
        write_completions(&Shell::Bash, &mut buf);
        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("ev"));
        assert!(script.contains("locations"));
    }

    #[test]
    fn test_fish_completions_mention_sort_flag() {
        let mut buf = Vec::new();
        write_completions(&Shell::Fish, &mut buf);
        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("sort"));
    }
}
