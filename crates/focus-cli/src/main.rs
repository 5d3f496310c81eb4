//! focusmode CLI
//!
//! Blocks distracting websites by maintaining a managed block in the
//! hosts file.

mod cli;
mod commands;
mod error;
mod interactive;
mod logging;

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use focus_hosts::{FocusConfig, HostsStore};

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)
        .map_err(|e| CliError::user(format!("Failed to initialize logging: {e}")))?;

    let Some(command) = cli.command else {
        // No command provided - show help hint
        println!(
            "{} Block distracting websites through the hosts file",
            "focusmode".green().bold()
        );
        println!();
        println!("Run {} for available commands.", "focusmode --help".cyan());
        return Ok(());
    };

    let hosts_path = resolve_hosts_path(cli.hosts)?;
    tracing::debug!(path = %hosts_path.display(), "Using hosts file");

    let store = HostsStore::open(&hosts_path)?;
    let result = execute_command(&store, command);
    let closed = store.close();

    result?;
    closed?;
    Ok(())
}

fn resolve_hosts_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    let config = FocusConfig::load_default()?;
    Ok(config.resolve_hosts_path(explicit.as_deref()))
}

fn execute_command(store: &HostsStore, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::List => commands::run_list(store),
        Commands::Add { domains } => commands::run_add(store, &domains),
        Commands::Clean { domain, yes } => commands::run_clean(store, domain.as_deref(), yes),
    }
}
