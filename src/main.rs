//! code-sync: sync VS Code user configuration with a snapshot directory
//!
//! Run from inside the version-controlled checkout that holds the
//! snapshot files (settings.json, keybindings.json, extensions.txt).

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::ffi::OsString;

mod commands;
mod config;
mod error;
mod reconcile;
mod vscode;

#[derive(Parser)]
#[command(name = "code-sync")]
#[command(about = "Sync VS Code settings, key bindings, and extensions", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Save the live settings file into the snapshot
    SaveSettings,

    /// Apply the snapshot settings file onto this machine
    ApplySettings,

    /// Save the live key-bindings file into the snapshot
    SaveKeybindings,

    /// Apply the snapshot key-bindings file onto this machine
    ApplyKeybindings,

    /// Save the installed extension list into the snapshot
    SaveExtensions,

    /// Install/uninstall extensions until they match the snapshot
    InstallExtensions,

    /// Save settings, key bindings, and the extension list
    SaveAll,

    /// Apply settings, key bindings, and reconcile extensions
    ApplyAll,

    /// Anything unrecognized prints a notice and exits cleanly
    #[command(external_subcommand)]
    Unknown(Vec<OsString>),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::SaveSettings => commands::settings::save()?,
        Commands::ApplySettings => commands::settings::apply()?,

        Commands::SaveKeybindings => commands::keybindings::save()?,
        Commands::ApplyKeybindings => commands::keybindings::apply()?,

        Commands::SaveExtensions => commands::extensions::save()?,
        Commands::InstallExtensions => commands::extensions::install()?,

        Commands::SaveAll => {
            commands::settings::save()?;
            commands::keybindings::save()?;
            commands::extensions::save()?;
        }

        Commands::ApplyAll => {
            commands::settings::apply()?;
            commands::keybindings::apply()?;
            commands::extensions::install()?;
        }

        Commands::Unknown(args) => {
            let name = args
                .first()
                .map(|a| a.to_string_lossy().into_owned())
                .unwrap_or_default();
            println!("Unknown command: {}", name);
        }
    }

    Ok(())
}
