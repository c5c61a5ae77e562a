//! Platform-specific configuration and paths

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// File name for the settings snapshot
pub const SETTINGS_FILE: &str = "settings.json";

/// File name for the key-bindings snapshot
pub const KEYBINDINGS_FILE: &str = "keybindings.json";

/// File name for the extension-list snapshot (newline-delimited identifiers)
pub const EXTENSIONS_FILE: &str = "extensions.txt";

/// Get the snapshot directory: the current working directory.
///
/// The tool is meant to be run from inside the version-controlled
/// checkout that holds the snapshot files.
pub fn snapshot_dir() -> Result<PathBuf> {
    env::current_dir().context("Could not determine current directory")
}

/// Get the VS Code user configuration directory
/// - macOS: ~/Library/Application Support/Code/User/
/// - Linux: ~/.config/Code/User/
/// - Windows: %APPDATA%/Code/User/
pub fn code_user_dir() -> Result<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home
            .join("Library")
            .join("Application Support")
            .join("Code")
            .join("User"))
    }

    #[cfg(target_os = "linux")]
    {
        let config = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config.join("Code").join("User"))
    }

    #[cfg(target_os = "windows")]
    {
        let appdata = dirs::config_dir().context("Could not determine AppData directory")?;
        Ok(appdata.join("Code").join("User"))
    }
}

/// Get the live settings.json path
pub fn settings_path() -> Result<PathBuf> {
    Ok(code_user_dir()?.join(SETTINGS_FILE))
}

/// Get the live keybindings.json path
pub fn keybindings_path() -> Result<PathBuf> {
    Ok(code_user_dir()?.join(KEYBINDINGS_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_exist() {
        // These should not panic
        let _ = snapshot_dir();
        let _ = code_user_dir();
        let _ = settings_path();
        let _ = keybindings_path();
    }

    #[test]
    fn test_live_paths_under_user_dir() {
        let user_dir = code_user_dir().unwrap();
        assert!(settings_path().unwrap().starts_with(&user_dir));
        assert!(keybindings_path().unwrap().starts_with(&user_dir));
    }
}
