//! Wrapper around the `code` command-line tool

use std::collections::BTreeSet;
use std::process::Command;

use crate::error::{InstallError, SyncError, UninstallError};
use crate::reconcile::ExtensionManager;

/// The VS Code CLI, used to list, install, and uninstall extensions
pub struct CodeCli {
    binary: String,
}

impl Default for CodeCli {
    fn default() -> Self {
        Self::new("code")
    }
}

impl CodeCli {
    pub fn new(binary: &str) -> Self {
        Self {
            binary: binary.to_string(),
        }
    }

    /// List the identifiers of all currently installed extensions.
    ///
    /// Fails with `ToolUnavailable` if the `code` command cannot be
    /// spawned, exits non-zero, or writes to its error stream.
    pub fn list_installed(&self) -> Result<BTreeSet<String>, SyncError> {
        let output = Command::new(&self.binary)
            .arg("--list-extensions")
            .output()
            .map_err(|e| SyncError::ToolUnavailable(format!("{}: {}", self.binary, e)))?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() || !stderr.trim().is_empty() {
            return Err(SyncError::ToolUnavailable(format!(
                "{} --list-extensions: {}",
                self.binary,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn run_extension_op(&self, flag: &str, id: &str) -> Result<(), String> {
        let output = Command::new(&self.binary)
            .arg(flag)
            .arg(id)
            .output()
            .map_err(|e| e.to_string())?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let reason = stderr.trim();
        if reason.is_empty() {
            Err(format!("exited with {}", output.status))
        } else {
            Err(reason.to_string())
        }
    }
}

impl ExtensionManager for CodeCli {
    fn install(&self, id: &str) -> Result<(), InstallError> {
        self.run_extension_op("--install-extension", id)
            .map_err(|reason| InstallError {
                id: id.to_string(),
                reason,
            })
    }

    fn uninstall(&self, id: &str) -> Result<(), UninstallError> {
        self.run_extension_op("--uninstall-extension", id)
            .map_err(|reason| UninstallError {
                id: id.to_string(),
                reason,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_binary_is_tool_unavailable() {
        let cli = CodeCli::new("code-sync-test-no-such-binary");
        let err = cli.list_installed().unwrap_err();
        assert!(matches!(err, SyncError::ToolUnavailable(_)));
    }

    #[test]
    fn test_missing_binary_install_fails_per_id() {
        let cli = CodeCli::new("code-sync-test-no-such-binary");
        let err = cli.install("vendor.name").unwrap_err();
        assert_eq!(err.id, "vendor.name");
        assert!(!err.reason.is_empty());
    }
}
