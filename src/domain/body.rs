//! Letter body reconstruction
//!
//! The body is everything after the `>` that closes the first `<ML` marker,
//! trimmed at both ends. Interior lines are kept verbatim.

/// Literal that opens the body marker
const BODY_MARKER: &str = "<ML";

/// Lines of the letter body, in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterBody {
    lines: Vec<String>,
}

impl LetterBody {
    /// Locate and split the body; empty when there is no `<ML ...>` marker
    pub fn from_source(source: &str) -> Self {
        let Some(start) = source.find(BODY_MARKER) else {
            return Self::default();
        };
        let after_marker = &source[start + BODY_MARKER.len()..];
        let Some(close) = after_marker.find('>') else {
            return Self::default();
        };

        let text = after_marker[close + 1..].trim();
        if text.is_empty() {
            return Self::default();
        }

        LetterBody {
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Text leading the paragraph
    pub fn first_line(&self) -> Option<&str> {
        self.lines.first().map(String::as_str)
    }

    /// Lines that each follow a line break
    pub fn continuation_lines(&self) -> &[String] {
        self.lines.get(1..).unwrap_or(&[])
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}
