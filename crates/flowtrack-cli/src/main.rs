//! FlowTrack command-line interface.
//!
//! Each subcommand maps onto one of the app's pages; protected pages run
//! the same access gate the app runs before touching any data.

mod cli;
mod commands;
mod error;

use clap::{CommandFactory, Parser};

use crate::cli::{Cli, Commands};
use crate::commands::auth::run_auth;
use crate::commands::common::resolve_data_dir;
use crate::commands::completions::run_completions;
use crate::commands::note::run_note;
use crate::commands::profile::run_profile;
use crate::commands::stats::run_stats;
use crate::commands::task::{run_quick_capture, run_task};
use crate::error::CliError;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("flowtrack=info".parse().unwrap())
                .add_directive("flowtrack_core=info".parse().unwrap()),
        )
        .init();

    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    let data_dir = resolve_data_dir(cli.data_dir);

    match cli.command {
        Some(Commands::Auth(command)) => run_auth(command, &data_dir),
        Some(Commands::Task(command)) => run_task(command, &data_dir),
        Some(Commands::Note(command)) => run_note(command, &data_dir),
        Some(Commands::Profile(command)) => run_profile(command, &data_dir),
        Some(Commands::Stats { json, watch }) => run_stats(json, watch, &data_dir),
        Some(Commands::Completions { shell, output }) => run_completions(shell, output.as_deref()),
        None if cli.text.is_empty() => {
            Cli::command().print_help()?;
            println!();
            Ok(())
        }
        None => run_quick_capture(&cli.text, &data_dir),
    }
}
