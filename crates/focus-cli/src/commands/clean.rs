//! Clean command: clear the blacklist or delete a single domain

use colored::Colorize;
use focus_blocks::normalize_domain;
use focus_hosts::HostsStore;

use crate::error::Result;
use crate::interactive;

/// Run the clean command
///
/// With `domain` only that domain is removed, otherwise every managed
/// domain is. Unless `assume_yes` is set the user is asked first.
/// An empty blacklist or a missing domain is reported, not returned.
pub fn run_clean(store: &HostsStore, domain: Option<&str>, assume_yes: bool) -> Result<()> {
    let domain = domain.map(normalize_domain).transpose()?;

    let (prompt, action) = match &domain {
        Some(d) => (
            format!("Remove {d} from blacklist?"),
            format!("removed {d} from blacklist"),
        ),
        None => (
            "Clear all domains?".to_string(),
            "cleared all domains".to_string(),
        ),
    };

    println!();
    if !assume_yes && !interactive::confirm(&prompt.yellow().to_string())? {
        println!("|  {}", "Nothing changed".dimmed());
        println!();
        return Ok(());
    }

    let result = match &domain {
        Some(d) => store.delete(d),
        None => store.clear(),
    };

    match result {
        Ok(()) => {
            println!("|  {}", action.green());
            println!();
            Ok(())
        }
        Err(e) if e.is_recoverable() => {
            tracing::debug!(error = %e, "Clean had nothing to do");
            println!("{}", "Error:".red().bold());
            println!();
            println!("|  {}", e.to_string().red());
            println!();
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_clean_all() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("hosts");
        fs::write(&path, "# keep\n#focusmode:start\n127.0.0.1 a.com\n#focusmode:end\n").unwrap();
        let store = HostsStore::open(&path).unwrap();

        run_clean(&store, None, true).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "# keep\n#focusmode:start\n#focusmode:end\n"
        );
    }

    #[test]
    fn test_clean_single_domain_normalizes() {
        let temp = TempDir::new().unwrap();
        let store = HostsStore::open(temp.path().join("hosts")).unwrap();
        store.replace(&["a.com", "b.com"]).unwrap();

        run_clean(&store, Some("A.COM"), true).unwrap();

        assert_eq!(store.list().unwrap(), vec!["b.com"]);
    }

    #[test]
    fn test_clean_missing_domain_is_reported() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("hosts");
        let store = HostsStore::open(&path).unwrap();
        store.replace(&["a.com"]).unwrap();
        let before = fs::read(&path).unwrap();

        assert!(run_clean(&store, Some("z.com"), true).is_ok());
        assert_eq!(fs::read(&path).unwrap(), before);
    }

    #[test]
    fn test_clean_empty_blacklist_is_reported() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("hosts");
        let store = HostsStore::open(&path).unwrap();

        assert!(run_clean(&store, Some("a.com"), true).is_ok());
        assert_eq!(fs::read(&path).unwrap(), b"");
    }
}
