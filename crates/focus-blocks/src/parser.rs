//! Managed block parsing.
//!
//! Scans hosts file content line by line with a two-state machine:
//! ```text
//!            Start                 End
//! Outside ─────────▶ InsideBlock ─────────▶ Outside
//! ```
//! Marker lines are consumed as structure and never reported as data.

use regex::Regex;
use std::str::SplitInclusive;
use std::sync::LazyLock;

use crate::marker::Marker;

/// Leading dotted-quad address plus the whitespace separating it from the host.
static ADDRESS_PREFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\d{1,3}(?:\.\d{1,3}){3}\s+").expect("Invalid address prefix regex")
});

/// Position of the scanner relative to the managed block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanState {
    #[default]
    Outside,
    InsideBlock,
}

impl ScanState {
    /// Transition on a line that was (or was not) classified as a marker.
    ///
    /// A start marker always enters the block and an end marker always
    /// leaves it, so a repeated start is harmless and a stray end is a no-op.
    pub fn next(self, marker: Option<Marker>) -> Self {
        match marker {
            Some(Marker::Start) => Self::InsideBlock,
            Some(Marker::End) => Self::Outside,
            None => self,
        }
    }
}

/// A raw line of hosts file content, classified by the scan.
///
/// `Unmanaged` and `Managed` borrow the line including its terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Unmanaged(&'a str),
    Marker(Marker),
    Managed(&'a str),
}

/// Iterator over classified lines. Created by [`scan`].
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    raw: SplitInclusive<'a, char>,
    state: ScanState,
}

impl<'a> Lines<'a> {
    /// The state the scan is currently in.
    pub fn state(&self) -> ScanState {
        self.state
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let raw = self.raw.next()?;
        let marker = Marker::detect(raw);
        let line = match (marker, self.state) {
            (Some(marker), _) => Line::Marker(marker),
            (None, ScanState::Outside) => Line::Unmanaged(raw),
            (None, ScanState::InsideBlock) => Line::Managed(raw),
        };
        self.state = self.state.next(marker);
        Some(line)
    }
}

/// Classify every line of `content`.
///
/// # Example
/// ```
/// use focus_blocks::{Line, Marker, scan};
///
/// let lines: Vec<_> = scan("a\n#focusmode:start\nb\n#focusmode:end\n").collect();
/// assert_eq!(lines[0], Line::Unmanaged("a\n"));
/// assert_eq!(lines[1], Line::Marker(Marker::Start));
/// assert_eq!(lines[2], Line::Managed("b\n"));
/// assert_eq!(lines[3], Line::Marker(Marker::End));
/// ```
pub fn scan(content: &str) -> Lines<'_> {
    Lines {
        raw: content.split_inclusive('\n'),
        state: ScanState::Outside,
    }
}

/// Extract the domain from a single managed-block line.
///
/// Blank and comment lines yield `None`. A leading IPv4 address and any
/// trailing `#` comment are stripped; the remainder is lowercased.
///
/// # Example
/// ```
/// use focus_blocks::parse_line;
///
/// assert_eq!(parse_line("127.0.0.1 example.com # note").as_deref(), Some("example.com"));
/// assert_eq!(parse_line("# 0.0.0.0 docker.com"), None);
/// ```
pub fn parse_line(line: &str) -> Option<String> {
    let line = line.trim().to_lowercase();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let host = ADDRESS_PREFIX_REGEX.replace(&line, "");
    let host = match host.find('#') {
        Some(idx) => &host[..idx],
        None => &host[..],
    };
    let host = host.trim();

    if host.is_empty() {
        None
    } else {
        Some(host.to_string())
    }
}

/// All domains inside the managed block, in the order they appear.
///
/// Content outside the markers is ignored entirely. Without markers the
/// result is empty.
pub fn parse_domains(content: &str) -> Vec<String> {
    scan(content)
        .filter_map(|line| match line {
            Line::Managed(raw) => parse_line(raw),
            _ => None,
        })
        .collect()
}
