//! Add command
//!
//! The store only ever replaces the managed block, so adding is a
//! fetch, append and replace.

use colored::Colorize;
use focus_blocks::normalize_domain;
use focus_hosts::HostsStore;

use crate::error::Result;

/// Run the add command
pub fn run_add(store: &HostsStore, domains: &[String]) -> Result<()> {
    let added = domains
        .iter()
        .map(|domain| normalize_domain(domain))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut blacklist = store.list()?;
    blacklist.extend(added.iter().cloned());
    store.replace(&blacklist)?;

    tracing::info!(added = added.len(), total = blacklist.len(), "Added domains");

    println!();
    println!("{}", "Added domain(s) to Blacklist:".green().bold());
    println!();
    for (i, domain) in added.iter().enumerate() {
        println!("|  {} {}", i + 1, domain);
    }
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use tempfile::TempDir;

    fn domains(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_add_appends_to_existing() {
        let temp = TempDir::new().unwrap();
        let store = HostsStore::open(temp.path().join("hosts")).unwrap();
        store.replace(&["a.com"]).unwrap();

        run_add(&store, &domains(&["b.com", "c.com"])).unwrap();

        assert_eq!(store.list().unwrap(), vec!["a.com", "b.com", "c.com"]);
    }

    #[test]
    fn test_add_normalizes_input() {
        let temp = TempDir::new().unwrap();
        let store = HostsStore::open(temp.path().join("hosts")).unwrap();

        run_add(&store, &domains(&["  WWW.YouTube.COM "])).unwrap();

        assert_eq!(store.list().unwrap(), vec!["www.youtube.com"]);
    }

    #[test]
    fn test_add_invalid_domain_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("hosts");
        let store = HostsStore::open(&path).unwrap();

        let result = run_add(&store, &domains(&["ok.com", "bad domain"]));

        assert!(matches!(result, Err(CliError::Blocks(_))));
        assert_eq!(std::fs::read(&path).unwrap(), b"");
    }
}
