//! CLI commands

use anyhow::{bail, Context, Result};
use owo_colors::OwoColorize;
use std::fs;
use std::path::Path;

pub mod extensions;
pub mod keybindings;
pub mod settings;

/// Copy one config file wholesale, creating the destination directory.
/// Snapshot contents are opaque; nothing is parsed or validated.
pub(crate) fn copy_config_file(src: &Path, dst: &Path, label: &str) -> Result<()> {
    if !src.exists() {
        bail!("No {} file found at: {}", label, src.display());
    }

    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create: {}", parent.display()))?;
    }

    fs::copy(src, dst)
        .with_context(|| format!("Failed to copy {} to {}", src.display(), dst.display()))?;

    println!("{} {} -> {}", "Copied:".green(), src.display(), dst.display());
    Ok(())
}
