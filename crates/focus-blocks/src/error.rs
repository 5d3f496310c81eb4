//! Error types for focus-blocks

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid domain '{input}': {reason}")]
    InvalidDomain { input: String, reason: &'static str },
}
