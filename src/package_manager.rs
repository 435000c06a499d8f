//! Homebrew integration
//!
//! This module provides:
//! - Typed `brew` commands used by the upgrade workflow
//! - A runner trait with a system implementation that spawns `brew`
//! - The outdated-package probe

use crate::domain::OutdatedSet;
use crate::error::CommandError;
use std::fmt;
use std::process::{Command, Output};

/// Program name of the package manager
pub const BREW: &str = "brew";

/// A single `brew` invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrewCommand {
    /// `brew outdated --quiet --greedy`
    Outdated,
    /// `brew upgrade <packages...>`
    Upgrade(Vec<String>),
    /// `brew upgrade` with no package list
    UpgradeAll,
    /// `brew cleanup --prune=all`
    Cleanup,
}

impl BrewCommand {
    /// Upgrade exactly the given packages
    pub fn upgrade<S: AsRef<str>>(packages: &[S]) -> Self {
        BrewCommand::Upgrade(packages.iter().map(|p| p.as_ref().to_string()).collect())
    }

    /// Arguments passed to `brew`
    pub fn args(&self) -> Vec<&str> {
        match self {
            BrewCommand::Outdated => vec!["outdated", "--quiet", "--greedy"],
            BrewCommand::Upgrade(packages) => {
                let mut args = vec!["upgrade"];
                args.extend(packages.iter().map(String::as_str));
                args
            }
            BrewCommand::UpgradeAll => vec!["upgrade"],
            BrewCommand::Cleanup => vec!["cleanup", "--prune=all"],
        }
    }

    /// Whether the command changes installed packages
    pub fn is_mutating(&self) -> bool {
        !matches!(self, BrewCommand::Outdated)
    }
}

impl fmt::Display for BrewCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", BREW, self.args().join(" "))
    }
}

/// Captured output of a finished command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Output with nothing captured, as reported for dry-run commands
    pub fn empty() -> Self {
        Self::default()
    }

    /// Stdout followed by stderr
    pub fn combined(&self) -> String {
        format!("{}{}", self.stdout, self.stderr)
    }
}

/// Trait for running package manager commands
pub trait CommandRunner {
    /// Run the command to completion and capture its output
    fn run(&self, command: &BrewCommand) -> Result<CommandOutput, CommandError>;
}

/// Default runner that executes real `brew` commands
#[derive(Debug, Default)]
pub struct SystemRunner;

impl SystemRunner {
    /// Create a new system runner
    pub fn new() -> Self {
        Self
    }

    fn spawn(&self, command: &BrewCommand) -> std::io::Result<Output> {
        Command::new(BREW).args(command.args()).output()
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, command: &BrewCommand) -> Result<CommandOutput, CommandError> {
        let output = self.spawn(command).map_err(|source| CommandError::Spawn {
            command: command.to_string(),
            source,
        })?;

        let captured = CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        };

        if output.status.success() {
            Ok(captured)
        } else {
            Err(CommandError::Failed {
                command: command.to_string(),
                status: output.status.to_string(),
                output: captured.combined(),
            })
        }
    }
}

/// Ask `brew` which packages are outdated
///
/// Errors are returned as-is; callers decide on the fallback.
pub fn probe_outdated<R: CommandRunner + ?Sized>(runner: &R) -> Result<OutdatedSet, CommandError> {
    let output = runner.run(&BrewCommand::Outdated)?;
    let outdated = OutdatedSet::parse(&output.stdout);
    tracing::debug!(packages = ?outdated.sorted(), "outdated packages");
    Ok(outdated)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock runner returning a canned result for every command
    struct MockRunner {
        result: Result<String, String>,
    }

    impl CommandRunner for MockRunner {
        fn run(&self, command: &BrewCommand) -> Result<CommandOutput, CommandError> {
            match &self.result {
                Ok(stdout) => Ok(CommandOutput {
                    stdout: stdout.clone(),
                    stderr: "Warning: noise on stderr\n".to_string(),
                }),
                Err(status) => Err(CommandError::Failed {
                    command: command.to_string(),
                    status: status.clone(),
                    output: String::new(),
                }),
            }
        }
    }

    #[test]
    fn test_command_lines() {
        assert_eq!(
            BrewCommand::Outdated.to_string(),
            "brew outdated --quiet --greedy"
        );
        assert_eq!(
            BrewCommand::upgrade(&["wget", "git"]).to_string(),
            "brew upgrade wget git"
        );
        assert_eq!(BrewCommand::UpgradeAll.to_string(), "brew upgrade");
        assert_eq!(BrewCommand::Cleanup.to_string(), "brew cleanup --prune=all");
    }

    #[test]
    fn test_upgrade_args_keep_order() {
        let cmd = BrewCommand::upgrade(&["b", "a"]);
        assert_eq!(cmd.args(), vec!["upgrade", "b", "a"]);
    }

    #[test]
    fn test_is_mutating() {
        assert!(!BrewCommand::Outdated.is_mutating());
        assert!(BrewCommand::UpgradeAll.is_mutating());
        assert!(BrewCommand::Cleanup.is_mutating());
        assert!(BrewCommand::upgrade(&["x"]).is_mutating());
    }

    #[test]
    fn test_combined_output() {
        let output = CommandOutput {
            stdout: "out\n".to_string(),
            stderr: "err\n".to_string(),
        };
        assert_eq!(output.combined(), "out\nerr\n");
        assert_eq!(CommandOutput::empty().combined(), "");
    }

    #[test]
    fn test_probe_parses_stdout_only() {
        let runner = MockRunner {
            result: Ok("wget\ngit\n\n".to_string()),
        };
        let outdated = probe_outdated(&runner).unwrap();
        assert_eq!(outdated.sorted(), vec!["git", "wget"]);
        assert!(!outdated.contains("Warning: noise on stderr"));
    }

    #[test]
    fn test_probe_success_with_nothing_outdated() {
        let runner = MockRunner {
            result: Ok(String::new()),
        };
        let outdated = probe_outdated(&runner).unwrap();
        assert!(outdated.is_empty());
    }

    #[test]
    fn test_probe_failure_is_reported_not_swallowed() {
        let runner = MockRunner {
            result: Err("exit status: 1".to_string()),
        };
        let err = probe_outdated(&runner).unwrap_err();
        assert_eq!(err.command(), "brew outdated --quiet --greedy");
    }
}
