//! Sentinel markers delimiting the managed block.

/// Opening sentinel line of the managed block.
pub const START_MARKER: &str = "#focusmode:start";

/// Closing sentinel line of the managed block.
pub const END_MARKER: &str = "#focusmode:end";

/// Address written in front of every managed domain.
pub const PLACEHOLDER_ADDRESS: &str = "127.0.0.1";

/// One of the two structural marker lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Start,
    End,
}

impl Marker {
    /// Classify a raw line as a marker.
    ///
    /// Matching is exact equality after trimming and lowercasing, so
    /// `  #FocusMode:Start\r\n` is a start marker but
    /// `#focusmode:start extra` is not.
    pub fn detect(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.eq_ignore_ascii_case(START_MARKER) {
            Some(Self::Start)
        } else if line.eq_ignore_ascii_case(END_MARKER) {
            Some(Self::End)
        } else {
            None
        }
    }

    /// The canonical text of this marker.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => START_MARKER,
            Self::End => END_MARKER,
        }
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
