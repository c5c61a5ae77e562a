//! Key-bindings commands - save/apply the key-bindings file

use anyhow::Result;

use crate::config;

/// Save the live key-bindings file into the snapshot directory
pub fn save() -> Result<()> {
    let src = config::keybindings_path()?;
    let dst = config::snapshot_dir()?.join(config::KEYBINDINGS_FILE);
    super::copy_config_file(&src, &dst, "key-bindings")
}

/// Apply the snapshot key-bindings file onto this machine
pub fn apply() -> Result<()> {
    let src = config::snapshot_dir()?.join(config::KEYBINDINGS_FILE);
    let dst = config::keybindings_path()?;
    super::copy_config_file(&src, &dst, "key-bindings snapshot")
}
