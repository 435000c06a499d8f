//! Upgrade orchestrator for coordinating the category-aware workflow
//!
//! This module provides:
//! - Workflow coordination: probe → per-category upgrade → full upgrade
//! - Dry-run mode support
//! - Error handling with unconditional continuation

use crate::domain::{Categories, Category, OutdatedSet, Selection};
use crate::error::CommandError;
use crate::package_manager::{probe_outdated, BrewCommand, CommandOutput, CommandRunner};
use crate::progress::Progress;
use colored::Colorize;
use std::fmt;
use std::io::Write;

/// Flags that change how commands are issued
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Announce commands without executing them
    pub dry_run: bool,
    /// Emit diagnostic tracing
    pub verbose: bool,
}

/// Orchestrator for coordinating the upgrade workflow
pub struct Orchestrator<R: CommandRunner> {
    /// Runner used for every `brew` invocation
    runner: R,
    /// Dry-run and verbosity flags
    options: RunOptions,
}

impl<R: CommandRunner> Orchestrator<R> {
    /// Create a new orchestrator
    pub fn new(runner: R, options: RunOptions) -> Self {
        Self { runner, options }
    }

    /// The underlying runner
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Probe for outdated packages, falling back to an empty set on failure
    ///
    /// A failed probe must never trigger upgrades, so the error is reported
    /// and the run continues as if nothing were outdated.
    pub fn probe(&self) -> OutdatedSet {
        let mut progress = Progress::new(!self.options.verbose);
        progress.spinner("Checking for outdated packages...");
        let result = probe_outdated(&self.runner);
        progress.finish_and_clear();

        result.unwrap_or_else(|e| {
            eprintln!("{}", e.to_string().red());
            OutdatedSet::default()
        })
    }

    /// Probe, then upgrade the selected categories
    ///
    /// Returns the upgrade and cleanup commands issued, in order.
    pub fn run<W: Write>(
        &self,
        selection: &Selection,
        categories: &Categories,
        out: &mut W,
    ) -> Vec<BrewCommand> {
        let outdated = self.probe();
        self.upgrade(selection, categories, &outdated, out)
    }

    /// Upgrade the selected categories against a given outdated snapshot
    pub fn upgrade<W: Write>(
        &self,
        selection: &Selection,
        categories: &Categories,
        outdated: &OutdatedSet,
        out: &mut W,
    ) -> Vec<BrewCommand> {
        let mut issued = Vec::new();

        for &category in Category::all() {
            if !selection.contains(category) {
                tracing::debug!(%category, "category not selected");
                continue;
            }

            let packages = categories.packages(category);
            if category.is_batched() {
                self.upgrade_batch(category, packages, outdated, out, &mut issued);
            } else {
                self.upgrade_each(category, packages, outdated, out, &mut issued);
            }
        }

        if selection.is_all() && !outdated.is_empty() {
            announce(
                out,
                format_args!("All categories selected, running full upgrade."),
            );
            self.issue(BrewCommand::UpgradeAll, out, &mut issued);
            self.issue(BrewCommand::Cleanup, out, &mut issued);
        } else {
            tracing::debug!(
                selected = selection.names().count(),
                outdated = outdated.len(),
                "skipping full upgrade"
            );
        }

        issued
    }

    /// One `brew upgrade` for every outdated package of the category
    fn upgrade_batch<W: Write>(
        &self,
        category: Category,
        packages: &[String],
        outdated: &OutdatedSet,
        out: &mut W,
        issued: &mut Vec<BrewCommand>,
    ) {
        let upgradable = outdated.intersect(packages);
        if upgradable.is_empty() {
            tracing::debug!(%category, "no outdated packages found in category");
            return;
        }

        announce(
            out,
            format_args!(
                "Upgrading {} packages: {}",
                category,
                upgradable.join(", ")
            ),
        );
        self.issue(BrewCommand::upgrade(&upgradable), out, issued);
        self.issue(BrewCommand::Cleanup, out, issued);
    }

    /// Upgrade and clean up each outdated package on its own
    ///
    /// Cleaning up between packages reclaims the superseded version before
    /// the next large download starts.
    fn upgrade_each<W: Write>(
        &self,
        category: Category,
        packages: &[String],
        outdated: &OutdatedSet,
        out: &mut W,
        issued: &mut Vec<BrewCommand>,
    ) {
        for package in packages {
            if !outdated.contains(package) {
                tracing::debug!(%category, %package, "skipping package (not outdated)");
                continue;
            }

            announce(
                out,
                format_args!("Upgrading {} package: {}", category, package),
            );
            self.issue(BrewCommand::upgrade(&[package]), out, issued);
            self.issue(BrewCommand::Cleanup, out, issued);
        }
    }

    /// Announce and (unless dry-run) execute a command
    ///
    /// Failures are reported and swallowed; the caller always continues.
    fn issue<W: Write>(
        &self,
        command: BrewCommand,
        out: &mut W,
        issued: &mut Vec<BrewCommand>,
    ) {
        let output = if self.options.dry_run && command.is_mutating() {
            announce(out, format_args!("[dry-run] {}", command));
            CommandOutput::empty()
        } else {
            tracing::debug!("Executing: {}", command);
            match self.runner.run(&command) {
                Ok(output) => output,
                Err(e) => {
                    eprintln!("{}", e.to_string().red());
                    if let CommandError::Failed { ref output, .. } = e {
                        tracing::debug!("{}", output);
                    }
                    CommandOutput::empty()
                }
            }
        };

        let combined = output.combined();
        if !combined.is_empty() {
            tracing::debug!("{}", combined.trim_end());
        }

        issued.push(command);
    }
}

/// Print a progress line; a closed stdout must not stop the upgrade sequence
fn announce<W: Write>(out: &mut W, line: fmt::Arguments<'_>) {
    if let Err(e) = writeln!(out, "{}", line) {
        tracing::warn!(error = %e, "failed to write output");
    }
}
