//! Marker-scoped hosts file parsing and rewriting for focusmode.
//!
//! The hosts file is split into unmanaged content and a managed block
//! delimited by two sentinel comment lines:
//!
//! ```text
//! 0.0.0.0 www.youtube.com
//! #focusmode:start
//! 127.0.0.1 www.instagram.com
//! #focusmode:end
//! ```
//!
//! Everything in this crate is pure text transformation. Reading and
//! writing the file lives in `focus-hosts`.

pub mod domain;
pub mod error;
pub mod marker;
pub mod parser;
pub mod writer;

pub use domain::normalize_domain;
pub use error::{Error, Result};
pub use marker::{END_MARKER, Marker, PLACEHOLDER_ADDRESS, START_MARKER};
pub use parser::{Line, Lines, ScanState, parse_domains, parse_line, scan};
pub use writer::{render_block, rewrite};
