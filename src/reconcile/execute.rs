//! Execute a reconciliation plan against the live machine

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};
use std::thread;

use super::plan::ReconcilePlan;
use crate::error::{InstallError, UninstallError};

/// Terminal outcome of a reconciliation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Live state already matched the snapshot; nothing to do
    NoOp,
    /// Operator declined the plan; no changes made
    Cancelled,
    /// Both phases ran to completion (individual failures tolerated)
    Completed,
}

/// The external extension-management tool, as seen by the executor.
///
/// Implementations must be callable from multiple threads at once:
/// operations within a phase are dispatched concurrently.
pub trait ExtensionManager: Sync {
    fn install(&self, id: &str) -> Result<(), InstallError>;
    fn uninstall(&self, id: &str) -> Result<(), UninstallError>;
}

/// Present the plan and read the operator's decision.
///
/// Only the exact answer `y` proceeds; anything else declines.
pub fn confirm(plan: &ReconcilePlan, input: &mut impl BufRead) -> Result<bool> {
    if !plan.install.is_empty() {
        println!("{} extension(s) to install:", plan.install.len());
        for id in &plan.install {
            println!("  {}", id.green());
        }
    }

    if !plan.uninstall.is_empty() {
        println!("{} extension(s) to uninstall:", plan.uninstall.len());
        for id in &plan.uninstall {
            println!("  {}", id.red());
        }
    }

    print!("\nProceed? (y/N) ");
    io::stdout().flush()?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;

    Ok(answer.trim() == "y")
}

/// Execute a reconciliation plan: confirm, install, then uninstall.
///
/// An empty plan is a no-op and never prompts. On an affirmative answer
/// the install phase runs first and must fully settle before the
/// uninstall phase starts. Operations within a phase run concurrently
/// and are best-effort: a failed install or uninstall is reported but
/// does not stop the rest of the batch.
pub fn execute(
    plan: &ReconcilePlan,
    manager: &impl ExtensionManager,
    input: &mut impl BufRead,
) -> Result<Outcome> {
    if plan.is_empty() {
        return Ok(Outcome::NoOp);
    }

    if !confirm(plan, input)? {
        println!("Aborted.");
        return Ok(Outcome::Cancelled);
    }

    let mut failed = 0;

    if !plan.install.is_empty() {
        println!("\nInstalling {} extension(s)...", plan.install.len());
        failed += run_phase(&plan.install, |id| match manager.install(id) {
            Ok(()) => {
                println!("{} {}", "Installed:".green(), id);
                true
            }
            Err(err) => {
                eprintln!("{} {}", "Failed:".red(), err);
                false
            }
        });
    }

    if !plan.uninstall.is_empty() {
        println!("\nUninstalling {} extension(s)...", plan.uninstall.len());
        failed += run_phase(&plan.uninstall, |id| match manager.uninstall(id) {
            Ok(()) => {
                println!("{} {}", "Uninstalled:".green(), id);
                true
            }
            Err(err) => {
                eprintln!("{} {}", "Failed:".red(), err);
                false
            }
        });
    }

    let attempted = plan.install.len() + plan.uninstall.len();
    println!(
        "\nReconciled {} extension(s), {} failed",
        attempted.to_string().green(),
        if failed > 0 {
            failed.to_string().red().to_string()
        } else {
            "0".to_string()
        }
    );

    Ok(Outcome::Completed)
}

/// Run one operation per identifier on its own thread and wait for all
/// of them. The scope joining its threads on exit is the phase barrier:
/// nothing from a later phase starts until every operation here has
/// settled. Returns the number of failed operations.
fn run_phase<F>(ids: &BTreeSet<String>, op: F) -> usize
where
    F: Fn(&str) -> bool + Sync,
{
    let op = &op;
    let mut failed = 0;

    thread::scope(|scope| {
        let handles: Vec<_> = ids
            .iter()
            .map(|id| scope.spawn(move || op(id)))
            .collect();

        for handle in handles {
            if !handle.join().unwrap_or(false) {
                failed += 1;
            }
        }
    });

    failed
}
