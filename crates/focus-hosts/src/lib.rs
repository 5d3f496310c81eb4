//! Hosts file store for focusmode
//!
//! Owns an open handle to the hosts file and exposes list, replace, delete
//! and clear over the managed block. Text handling lives in `focus-blocks`.

pub mod config;
pub mod error;
pub mod store;

pub use config::{CONFIG_FILE_NAME, FocusConfig, default_hosts_path};
pub use error::{Error, Result};
pub use store::HostsStore;
