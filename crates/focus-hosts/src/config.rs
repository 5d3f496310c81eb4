//! User configuration and hosts path resolution

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// File name of the user configuration inside the focusmode config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

const APP_DIR_NAME: &str = "focusmode";

/// Settings read from `<config_dir>/focusmode/config.toml`.
///
/// ```toml
/// hosts_path = "/etc/hosts"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusConfig {
    /// Hosts file to manage instead of the platform default.
    pub hosts_path: Option<PathBuf>,
}

impl FocusConfig {
    /// Location of the user configuration file, if the platform has a config directory.
    pub fn default_location() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load configuration from `path`.
    ///
    /// A missing file yields the default configuration.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(?path, "No config file found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        toml::from_str(&content).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load configuration from [`FocusConfig::default_location`].
    pub fn load_default() -> Result<Self> {
        match Self::default_location() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Pick the hosts file to manage.
    ///
    /// An explicit path wins over the configured one, which wins over the
    /// platform default.
    pub fn resolve_hosts_path(&self, explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.hosts_path.clone())
            .unwrap_or_else(default_hosts_path)
    }
}

/// The operating system's hosts file.
#[cfg(windows)]
pub fn default_hosts_path() -> PathBuf {
    let root = std::env::var_os("SystemRoot")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(r"C:\Windows"));
    root.join("System32").join("drivers").join("etc").join("hosts")
}

/// The operating system's hosts file.
#[cfg(not(windows))]
pub fn default_hosts_path() -> PathBuf {
    PathBuf::from("/etc/hosts")
}
