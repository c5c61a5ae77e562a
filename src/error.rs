//! Error types for snapshot and tool failures

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors that abort a run
#[derive(Error, Debug)]
pub enum SyncError {
    /// The `code` CLI could not be invoked, exited with an error, or wrote
    /// to its error stream.
    #[error("extension tool unavailable: {0}")]
    ToolUnavailable(String),

    /// The saved extensions file is absent or contains no identifiers.
    #[error("extension snapshot missing or empty: {}", .0.display())]
    MissingSnapshot(PathBuf),
}

/// A single extension failed to install. Non-fatal; the batch continues.
#[derive(Error, Debug)]
#[error("failed to install {id}: {reason}")]
pub struct InstallError {
    pub id: String,
    pub reason: String,
}

/// A single extension failed to uninstall. Non-fatal; the batch continues.
#[derive(Error, Debug)]
#[error("failed to uninstall {id}: {reason}")]
pub struct UninstallError {
    pub id: String,
    pub reason: String,
}
