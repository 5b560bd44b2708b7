//! Bestshot debug CLI - inspect the client core from a shell.

use bestshot::cli::{Cli, Commands, EnvCommands, FlagsCommands, StateCommands};
use bestshot::commands::{self, CommandResult};
use clap::Parser;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    let human = cli.human_readable;

    // BSH_LOG controls diagnostics (e.g. BSH_LOG=bestshot=debug);
    // silent by default so JSON output stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env("BSH_LOG").unwrap_or_else(|_| EnvFilter::new("off")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run_command(cli) {
        if human {
            eprintln!("Error: {}", e);
        } else {
            eprintln!("{}", serde_json::json!({ "error": e.to_string() }));
        }
        process::exit(1);
    }
}

fn run_command(cli: Cli) -> Result<(), bestshot::Error> {
    let human = cli.human_readable;
    let data_dir = cli.data_dir.as_deref();

    match cli.command {
        Commands::State { command } => match command {
            StateCommands::Show => output(&commands::state_show(data_dir)?, human),
            StateCommands::SetTheme { mode } => {
                output(&commands::state_set_theme(data_dir, &mode)?, human);
            }
            StateCommands::ToggleSidebar => {
                output(&commands::state_toggle_sidebar(data_dir)?, human);
            }
            StateCommands::SetFabPosition { x, y, persist } => {
                output(
                    &commands::state_set_fab_position(data_dir, x, y, persist)?,
                    human,
                );
            }
            StateCommands::SetFabVisible { visible } => {
                output(&commands::state_set_fab_visible(data_dir, visible)?, human);
            }
        },

        Commands::Flags { command } => match command {
            FlagsCommands::Resolve {
                key,
                default,
                snapshot,
            } => {
                output(&commands::flags_resolve(&snapshot, &key, default)?, human);
            }
        },

        Commands::Env { command } => match command {
            EnvCommands::Show => output(&commands::env_show(), human),
        },
    }

    Ok(())
}

fn output(result: &impl CommandResult, human: bool) {
    if human {
        println!("{}", result.to_human());
    } else {
        println!("{}", result.to_json());
    }
}
