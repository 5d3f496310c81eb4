//! Error types for focus-hosts

use std::path::PathBuf;

/// Result type for focus-hosts operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in hosts store operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not valid UTF-8: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },

    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("blacklist is empty, no domains present")]
    EmptyBlacklist,

    #[error("domain not found in blacklist: {domain}")]
    DomainNotFound { domain: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the caller can report this error and carry on.
    ///
    /// Only the delete preconditions qualify; the file is untouched when
    /// they are returned.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::EmptyBlacklist | Self::DomainNotFound { .. })
    }
}
