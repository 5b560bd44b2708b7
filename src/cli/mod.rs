//! CLI argument definitions for the `bsh` debug tool.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Bestshot client core debug tool.
///
/// Inspect and mutate the persisted UI shell state, resolve feature
/// flags against a snapshot file, and show the deployment environment.
#[derive(Parser, Debug)]
#[command(name = "bsh")]
#[command(author, version, about = "Debug CLI for the Best Shot client core", long_about = None)]
pub struct Cli {
    /// Output in human-readable format instead of JSON
    #[arg(short = 'H', long = "human", global = true)]
    pub human_readable: bool,

    /// Directory holding the persisted UI state.
    /// Can also be set via the BSH_DATA_DIR environment variable.
    #[arg(long = "data-dir", global = true, env = "BSH_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Persisted UI shell state commands
    State {
        #[command(subcommand)]
        command: StateCommands,
    },

    /// Feature flag commands
    Flags {
        #[command(subcommand)]
        command: FlagsCommands,
    },

    /// Deployment environment commands
    Env {
        #[command(subcommand)]
        command: EnvCommands,
    },
}

/// State subcommands. Each rehydrates the store, applies one action,
/// and prints the resulting snapshot.
#[derive(Subcommand, Debug)]
pub enum StateCommands {
    /// Show the current (rehydrated) state
    Show,

    /// Set the theme mode
    SetTheme {
        /// Theme mode: "light" or "dark"
        mode: String,
    },

    /// Flip the sidebar collapse flag
    ToggleSidebar,

    /// Move the FAB
    SetFabPosition {
        /// X coordinate
        x: f64,

        /// Y coordinate
        y: f64,

        /// Write the new position through to storage (drag-end
        /// semantics; omit for intermediate drag-move frames)
        #[arg(long)]
        persist: bool,
    },

    /// Show or hide the FAB
    SetFabVisible {
        /// "true" to show, "false" to hide
        #[arg(action = clap::ArgAction::Set)]
        visible: bool,
    },
}

/// Flags subcommands
#[derive(Subcommand, Debug)]
pub enum FlagsCommands {
    /// Resolve a flag key against a snapshot file
    Resolve {
        /// Flag key (snake_case or camelCase)
        key: String,

        /// Default returned when neither key form matches
        #[arg(long, action = clap::ArgAction::Set, default_value_t = false)]
        default: bool,

        /// Path to a JSON object file holding the flag snapshot
        #[arg(long)]
        snapshot: PathBuf,
    },
}

/// Env subcommands
#[derive(Subcommand, Debug)]
pub enum EnvCommands {
    /// Show the resolved mode, auth strategy, and build metadata
    Show,
}
