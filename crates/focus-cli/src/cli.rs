//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// focusmode - Block distracting websites through the hosts file
#[derive(Parser, Debug)]
#[command(name = "focusmode")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Hosts file to manage (defaults to the configured or system hosts file)
    #[arg(long, global = true, env = "FOCUSMODE_HOSTS", value_name = "PATH")]
    pub hosts: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List all domains that are currently being blocked
    List,

    /// Add domain(s) to the blacklist
    ///
    /// Examples:
    ///   focusmode add www.youtube.com
    ///   focusmode add reddit.com news.ycombinator.com
    Add {
        /// Domains to block
        #[arg(required = true, value_name = "DOMAIN")]
        domains: Vec<String>,
    },

    /// Remove all domains from the blacklist, or a single one with --domain
    Clean {
        /// Delete only this domain from the blacklist
        #[arg(short, long, value_name = "DOMAIN")]
        domain: Option<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}
