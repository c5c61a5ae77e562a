//! Settings commands - save/apply the settings file

use anyhow::Result;

use crate::config;

/// Save the live settings file into the snapshot directory
pub fn save() -> Result<()> {
    let src = config::settings_path()?;
    let dst = config::snapshot_dir()?.join(config::SETTINGS_FILE);
    super::copy_config_file(&src, &dst, "settings")
}

/// Apply the snapshot settings file onto this machine
pub fn apply() -> Result<()> {
    let src = config::snapshot_dir()?.join(config::SETTINGS_FILE);
    let dst = config::settings_path()?;
    super::copy_config_file(&src, &dst, "settings snapshot")
}
