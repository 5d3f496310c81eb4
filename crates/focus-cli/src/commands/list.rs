//! List command

use colored::Colorize;
use focus_hosts::HostsStore;

use crate::error::Result;

/// Run the list command
pub fn run_list(store: &HostsStore) -> Result<()> {
    let domains = store.list()?;

    println!();
    println!("{}", "Blacklist:".blue().bold());
    println!();

    if domains.is_empty() {
        println!("|  {}", "No domains added".dimmed());
    } else {
        for (i, domain) in domains.iter().enumerate() {
            println!("|  {} {}", i + 1, domain);
        }
    }
    println!();

    Ok(())
}
