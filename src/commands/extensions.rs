//! Extensions commands - save the installed list, reconcile against it

use anyhow::Result;
use owo_colors::OwoColorize;
use std::io;

use crate::config;
use crate::reconcile::{execute, reconcile, Outcome};
use crate::vscode::cli::CodeCli;
use crate::vscode::snapshot;

/// Save the identifiers of all installed extensions into the snapshot
pub fn save() -> Result<()> {
    let code = CodeCli::default();
    let installed = code.list_installed()?;

    let path = config::snapshot_dir()?.join(config::EXTENSIONS_FILE);
    snapshot::write_extension_list(&path, &installed)?;

    println!(
        "{} {} extension(s) to {}",
        "Saved:".green(),
        installed.len(),
        path.display()
    );
    Ok(())
}

/// Converge the installed extensions to the snapshot: install what the
/// snapshot has and this machine lacks, uninstall what this machine has
/// and the snapshot lacks. Prompts before changing anything.
pub fn install() -> Result<()> {
    let code = CodeCli::default();
    let live = code.list_installed()?;

    let path = config::snapshot_dir()?.join(config::EXTENSIONS_FILE);
    let saved = snapshot::read_saved_extensions(&path)?;

    let plan = reconcile(&live, &saved);

    let stdin = io::stdin();
    match execute(&plan, &code, &mut stdin.lock())? {
        Outcome::NoOp => println!("Extensions already match the snapshot."),
        Outcome::Cancelled | Outcome::Completed => {}
    }

    Ok(())
}
