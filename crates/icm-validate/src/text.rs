//! Styled text for messages and info lines.
//!
//! Validation never decides colors. It only marks parts of a line, and the
//! renderer maps each [`Mark`] to a terminal style or drops it.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Plain,
    /// Names a field, underlined.
    Emphasis,
    /// The violated expectation, bold.
    Strong,
    /// A correct or suggested value.
    Good,
    /// A discouraged value.
    Caution,
    /// Swapped digits of an error-prone serial number.
    Highlight,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub mark: Mark,
}

/// A single line of marked text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    spans: Vec<Span>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, text: impl Into<String>, mark: Mark) -> Self {
        let text = text.into();
        if !text.is_empty() {
            self.spans.push(Span { text, mark });
        }
        self
    }

    pub fn plain(self, text: impl Into<String>) -> Self {
        self.push(text, Mark::Plain)
    }

    pub fn emphasis(self, text: impl Into<String>) -> Self {
        self.push(text, Mark::Emphasis)
    }

    pub fn strong(self, text: impl Into<String>) -> Self {
        self.push(text, Mark::Strong)
    }

    pub fn good(self, text: impl Into<String>) -> Self {
        self.push(text, Mark::Good)
    }

    pub fn caution(self, text: impl Into<String>) -> Self {
        self.push(text, Mark::Caution)
    }

    pub fn highlight(self, text: impl Into<String>) -> Self {
        self.push(text, Mark::Highlight)
    }

    /// Append all spans of another line.
    pub fn append(mut self, other: Line) -> Self {
        self.spans.extend(other.spans);
        self
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }
}

impl From<&str> for Line {
    fn from(text: &str) -> Self {
        Line::new().plain(text)
    }
}

impl From<String> for Line {
    fn from(text: String) -> Self {
        Line::new().plain(text)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for span in &self.spans {
            f.write_str(&span.text)?;
        }
        Ok(())
    }
}
