//! Extension-list snapshot file (newline-delimited identifiers)

use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::error::SyncError;

/// Read the saved extension set from the snapshot file.
///
/// One identifier per line; blank lines are dropped and duplicates
/// collapse. Fails with `MissingSnapshot` if the file is absent or
/// yields zero identifiers.
pub fn read_saved_extensions(path: &Path) -> Result<BTreeSet<String>, SyncError> {
    let content = fs::read_to_string(path)
        .map_err(|_| SyncError::MissingSnapshot(path.to_path_buf()))?;

    let saved: BTreeSet<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if saved.is_empty() {
        return Err(SyncError::MissingSnapshot(path.to_path_buf()));
    }

    Ok(saved)
}

/// Write an extension set to the snapshot file, one identifier per line
pub fn write_extension_list(path: &Path, extensions: &BTreeSet<String>) -> Result<()> {
    let mut content = extensions.iter().cloned().collect::<Vec<_>>().join("\n");
    content.push('\n');
    fs::write(path, content).with_context(|| format!("Failed to write: {}", path.display()))
}
