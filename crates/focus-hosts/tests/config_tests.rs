//! Tests for configuration loading and hosts path resolution

use std::fs;
use std::path::{Path, PathBuf};

use focus_hosts::{Error, FocusConfig, default_hosts_path};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn missing_config_file_yields_defaults() {
    let temp = TempDir::new().unwrap();

    let config = FocusConfig::load(&temp.path().join("config.toml")).unwrap();

    assert_eq!(config, FocusConfig::default());
}

#[test]
fn loads_hosts_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "hosts_path = \"/tmp/custom-hosts\"\n").unwrap();

    let config = FocusConfig::load(&path).unwrap();

    assert_eq!(config.hosts_path, Some(PathBuf::from("/tmp/custom-hosts")));
}

#[test]
fn empty_config_file_yields_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "").unwrap();

    assert_eq!(FocusConfig::load(&path).unwrap(), FocusConfig::default());
}

#[test]
fn malformed_config_is_a_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "hosts_path = [not toml").unwrap();

    let result = FocusConfig::load(&path);

    assert!(matches!(result, Err(Error::ConfigParse { .. })));
}

#[test]
fn explicit_path_wins() {
    let config = FocusConfig {
        hosts_path: Some(PathBuf::from("/from/config")),
    };

    assert_eq!(
        config.resolve_hosts_path(Some(Path::new("/from/flag"))),
        PathBuf::from("/from/flag")
    );
}

#[test]
fn configured_path_wins_over_default() {
    let config = FocusConfig {
        hosts_path: Some(PathBuf::from("/from/config")),
    };

    assert_eq!(config.resolve_hosts_path(None), PathBuf::from("/from/config"));
}

#[test]
fn falls_back_to_platform_default() {
    let config = FocusConfig::default();

    assert_eq!(config.resolve_hosts_path(None), default_hosts_path());
    assert!(default_hosts_path().ends_with("hosts"));
}
