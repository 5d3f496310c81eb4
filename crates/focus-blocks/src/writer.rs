//! Managed block writing.
//!
//! The managed block is never edited in place: the whole file is rebuilt
//! from its unmanaged lines with a freshly rendered block at the tail.

use crate::marker::{END_MARKER, PLACEHOLDER_ADDRESS, START_MARKER};
use crate::parser::{Line, scan};

/// Render a complete managed block, markers included.
///
/// Every line, including the end marker, is terminated with `\n`.
///
/// # Example
/// ```
/// use focus_blocks::render_block;
///
/// assert_eq!(
///     render_block(&["a.com"]),
///     "#focusmode:start\n127.0.0.1 a.com\n#focusmode:end\n"
/// );
/// ```
pub fn render_block<S: AsRef<str>>(domains: &[S]) -> String {
    let mut block = String::with_capacity(
        START_MARKER.len() + END_MARKER.len() + 2 + domains.len() * 32,
    );
    block.push_str(START_MARKER);
    block.push('\n');
    for domain in domains {
        block.push_str(PLACEHOLDER_ADDRESS);
        block.push(' ');
        block.push_str(domain.as_ref());
        block.push('\n');
    }
    block.push_str(END_MARKER);
    block.push('\n');
    block
}

/// Replace the managed block of `content` with `domains`.
///
/// Unmanaged lines are kept byte-for-byte, original line endings included.
/// Marker lines and everything between them are dropped, and the new block
/// is appended after the last unmanaged line. A final unmanaged line
/// without a terminator gets a `\n` so the start marker lands on its own line.
///
/// # Example
/// ```
/// use focus_blocks::rewrite;
///
/// let content = "# keep\n#focusmode:start\n127.0.0.1 old.com\n#focusmode:end\n";
/// assert_eq!(
///     rewrite(content, &["new.com"]),
///     "# keep\n#focusmode:start\n127.0.0.1 new.com\n#focusmode:end\n"
/// );
/// ```
pub fn rewrite<S: AsRef<str>>(content: &str, domains: &[S]) -> String {
    let mut output = String::with_capacity(content.len());

    for line in scan(content) {
        if let Line::Unmanaged(raw) = line {
            output.push_str(raw);
        }
    }

    if !output.is_empty() && !output.ends_with('\n') {
        output.push('\n');
    }

    output.push_str(&render_block(domains));
    output
}
