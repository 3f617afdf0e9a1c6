//! Line classification: fence markers and ATX headings.
//!
//! Headings are detected according to the CommonMark ATX rules:
//! - only six valid levels
//! - up to three spaces before the first `#` are allowed
//! - an empty heading is valid
//! - closing hashes are stripped
//! - whitespace around the title is stripped

/// Maximum ATX heading depth.
pub const MAX_HEADING_LEVEL: usize = 6;

/// Fence delimiters. A line starting with either of these toggles fence
/// state; an open fence does not need to be closed by the same delimiter.
const FENCES: [&str; 2] = ["```", "~~~"];

/// An ATX heading parsed from a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Heading depth, 1 to [`MAX_HEADING_LEVEL`].
    pub level: usize,
    /// Trimmed title with any closing hash run stripped; may be empty.
    pub title: String,
}

/// A single input line (no trailing newline) with its classification.
///
/// The classification is a pure function of the raw text; whether the line
/// actually acts as a heading additionally depends on fence state, which
/// only the splitter knows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// The raw line text.
    text: String,
    /// The heading parsed from the text, if any.
    heading: Option<Heading>,
}

impl Line {
    /// Classifies a raw line.
    pub fn classify(text: String) -> Self {
        let heading = detect_heading(&text);
        Self { text, heading }
    }

    /// Returns the raw line text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consumes the line, returning the raw text.
    pub fn into_text(self) -> String {
        self.text
    }

    /// Returns the heading this line carries, if any.
    pub fn heading(&self) -> Option<&Heading> {
        self.heading.as_ref()
    }

    /// Whether this line starts or ends a fenced block.
    pub fn is_fence(&self) -> bool {
        FENCES.iter().any(|fence| self.text.starts_with(fence))
    }
}

/// Parses an ATX heading from raw line text.
fn detect_heading(text: &str) -> Option<Heading> {
    let indent = text.len() - text.trim_start_matches(' ').len();
    if indent > 3 {
        return None;
    }

    let rest = &text[indent..];
    let hashes = rest.len() - rest.trim_start_matches('#').len();
    if hashes == 0 || hashes > MAX_HEADING_LEVEL {
        return None;
    }

    // A non-empty title must be separated from the hashes by a space or
    // tab; this distinguishes `# 5` from the plain-text line `#5`.
    let remainder = &rest[hashes..];
    if !remainder.is_empty() && !remainder.starts_with(' ') && !remainder.starts_with('\t') {
        return None;
    }

    let title = remainder.trim().trim_end_matches('#').trim_end();
    Some(Heading {
        level: hashes,
        title: title.to_string(),
    })
}
