//! Terminal styles for rendered output.

use colored::Colorize;
use icm_validate::{Line, Mark};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Green,
    Yellow,
    Red,
    Magenta,
    Underline,
    Bold,
}

impl From<Mark> for Tone {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::Plain => Self::Plain,
            Mark::Emphasis => Self::Underline,
            Mark::Strong => Self::Bold,
            Mark::Good => Self::Green,
            Mark::Caution => Self::Yellow,
            Mark::Highlight => Self::Magenta,
        }
    }
}

/// Applies tones when colors are enabled and leaves text untouched otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn paint(&self, text: &str, tone: Tone) -> String {
        if !self.enabled || text.is_empty() {
            return text.to_string();
        }
        match tone {
            Tone::Plain => text.to_string(),
            Tone::Green => text.green().to_string(),
            Tone::Yellow => text.yellow().to_string(),
            Tone::Red => text.red().to_string(),
            Tone::Magenta => text.magenta().to_string(),
            Tone::Underline => text.underline().to_string(),
            Tone::Bold => text.bold().to_string(),
        }
    }

    pub fn paint_line(&self, line: &Line) -> String {
        line.spans()
            .iter()
            .map(|span| self.paint(&span.text, span.mark.into()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_palette_keeps_text() {
        let palette = Palette::plain();
        let line = Line::new().emphasis("check digit").plain(" is ").good("7");
        assert_eq!(palette.paint_line(&line), "check digit is 7");
    }

    #[test]
    fn test_enabled_palette_adds_escapes() {
        colored::control::set_override(true);
        let palette = Palette::new(true);
        let painted = palette.paint("7", Tone::Green);
        assert!(painted.contains("\u{1b}["));
        assert!(painted.contains('7'));
        assert_eq!(palette.paint("7", Tone::Plain), "7");
    }
}
