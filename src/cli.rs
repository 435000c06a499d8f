//! CLI argument parsing module for brewup

use crate::config::DEFAULT_CONFIG_FILENAME;
use crate::domain::Selection;
use crate::orchestrator::RunOptions;
use clap::Parser;

/// Category-aware Homebrew upgrader
#[derive(Parser, Debug, Clone)]
#[command(
    name = "brewup",
    version,
    about = "Upgrade outdated Homebrew packages by priority category"
)]
pub struct CliArgs {
    /// Config file name, searched in BREWUP_CONFIG_PATHS, the binary's directory,
    /// ~/.brew-aware-upgrade and the current directory
    #[arg(default_value = DEFAULT_CONFIG_FILENAME)]
    pub config: String,

    /// Specify categories to upgrade (comma-separated)
    #[arg(short = 'c', long)]
    pub categories: Option<String>,

    /// Upgrade highest_priority and priority packages
    #[arg(short = 'P', long)]
    pub priority: bool,

    /// Dry run mode: show commands without executing
    #[arg(short = 'D', long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Categories selected for this run
    pub fn selection(&self) -> Selection {
        Selection::from_flags(self.categories.as_deref(), self.priority)
    }

    /// Flags threaded through the orchestrator
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            dry_run: self.dry_run,
            verbose: self.verbose,
        }
    }
}
