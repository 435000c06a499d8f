//! brewup - Category-aware Homebrew upgrade CLI tool
//!
//! Upgrades outdated Homebrew packages in priority order:
//! - highest_priority and priority categories in one batch each
//! - large_size packages one at a time, cleaning up after each
//! - everything else via a final `brew upgrade` when all categories run

use brewup::cli::CliArgs;
use brewup::config::{load_categories, SearchPaths};
use brewup::error::ConfigError;
use brewup::orchestrator::Orchestrator;
use brewup::package_manager::SystemRunner;
use clap::Parser;
use colored::Colorize;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    // A missing or broken config aborts before any upgrade, with a zero status
    if let Err(e) = run(args) {
        eprintln!("{}", e.to_string().red());
    }
    ExitCode::SUCCESS
}

/// Diagnostics go to stderr; `-v` lowers the default level to debug
fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .without_time()
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .init();
}

/// Main application logic
fn run(args: CliArgs) -> Result<(), ConfigError> {
    let selection = args.selection();
    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        selected = ?selection.names().collect::<Vec<_>>(),
        dry_run = args.dry_run,
        "brewup starting"
    );

    let path = SearchPaths::from_env().find(&args.config)?;
    let mut stdout = io::stdout().lock();
    if let Err(e) = writeln!(
        stdout,
        "Using config file: {}",
        path.display().to_string().bold()
    ) {
        tracing::warn!(error = %e, "failed to write output");
    }
    let categories = load_categories(&path)?;

    let orchestrator = Orchestrator::new(SystemRunner::new(), args.run_options());
    let issued = orchestrator.run(&selection, &categories, &mut stdout);
    if let Err(e) = stdout.flush() {
        tracing::warn!(error = %e, "failed to flush stdout");
    }

    tracing::debug!(commands = issued.len(), "done");
    Ok(())
}
