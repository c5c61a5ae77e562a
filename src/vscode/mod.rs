//! VS Code collaborators: the `code` CLI and the snapshot files

pub mod cli;
pub mod snapshot;
