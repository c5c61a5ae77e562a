//! code-sync library
//!
//! Core functionality for syncing VS Code user configuration (settings,
//! key bindings, installed extensions) with a snapshot directory.

pub mod config;
pub mod error;
pub mod reconcile;
pub mod vscode;
