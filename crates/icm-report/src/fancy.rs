//! Human readable output: the marking, arrows under annotated fields and
//! a tree of messages.
//!
//! ```text
//!   ABC U 123123 1  ✘
//!    ↑  ↑        ↑
//!    │  │        └─ calculated check digit is 7
//!    │  │
//!    │  └─ freight container
//!    │
//!    └─ some company
//!       some city
//!       some country
//! ```

use std::io::Write;

use icm_model::Separators;
use icm_validate::{ChainResult, FieldKind, FieldOutcome};

use crate::error::Result;
use crate::output::Printer;
use crate::palette::{Palette, Tone};

const VALID_MARK: &str = "✔";
const INVALID_MARK: &str = "✘";
const ARROW: char = '↑';
const BAR: char = '│';
const BRANCH: &str = "└─ ";
const CONTINUATION: &str = "   ";
const PLACEHOLDER: char = '_';

pub struct FancyPrinter<W> {
    writer: W,
    indent: String,
    separators: Separators,
    palette: Palette,
}

impl<W: Write> FancyPrinter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            indent: String::new(),
            separators: Separators::default(),
            palette: Palette::plain(),
        }
    }

    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    pub fn with_separators(mut self, separators: Separators) -> Self {
        self.separators = separators;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Separator printed after a field of `kind`.
    fn separator(&self, kind: FieldKind) -> &str {
        match kind {
            FieldKind::Owner => &self.separators.owner_equip,
            FieldKind::EquipmentCategory => &self.separators.equip_serial,
            FieldKind::SerialNumber => &self.separators.serial_check,
            FieldKind::CheckDigit => &self.separators.check_size,
            FieldKind::Length => "",
            FieldKind::HeightWidth => &self.separators.size_type,
            FieldKind::Type => "",
        }
    }

    /// Render one result, including the leading and trailing blank line.
    pub fn render(&self, result: &ChainResult) -> String {
        let mut marking = String::new();
        let mut arrows: Vec<(usize, &FieldOutcome)> = Vec::new();
        let mut column = 0;

        for (idx, outcome) in result.outcomes.iter().enumerate() {
            let present = outcome.value.chars().count();
            let missing = outcome.width.saturating_sub(present);
            let shown = present + missing;

            let tone = if outcome.is_valid() {
                Tone::Green
            } else {
                Tone::Yellow
            };
            marking.push_str(&self.palette.paint(&outcome.value, tone));
            let placeholder: String = std::iter::repeat_n(PLACEHOLDER, missing).collect();
            marking.push_str(&self.palette.paint(&placeholder, Tone::Red));

            if outcome.is_annotated() {
                arrows.push((column + shown / 2, outcome));
            }
            column += shown;

            if idx + 1 < result.outcomes.len() {
                let separator = self.separator(outcome.kind);
                marking.push_str(separator);
                column += separator.chars().count();
            }
        }

        let status = if result.is_valid() {
            self.palette.paint(VALID_MARK, Tone::Green)
        } else {
            self.palette.paint(INVALID_MARK, Tone::Red)
        };

        let pad = " ".repeat(self.indent.chars().count());
        let mut out = String::from("\n");
        out.push_str(&format!("{}{marking}  {status}\n", self.indent));

        if !arrows.is_empty() {
            let columns: Vec<usize> = arrows.iter().map(|(col, _)| *col).collect();
            let arrow_row = draw(&columns, ARROW);
            out.push_str(&format!("{pad}{arrow_row}\n"));

            for k in (0..arrows.len()).rev() {
                let (col, outcome) = arrows[k];
                let bars = bar_prefix(&columns[..k], col);
                for (line_idx, text) in self.messages(outcome).iter().enumerate() {
                    let lead = if line_idx == 0 { BRANCH } else { CONTINUATION };
                    out.push_str(&format!("{pad}{bars}{lead}{text}\n"));
                }
                if k > 0 {
                    out.push_str(&format!("{pad}{}\n", draw(&columns[..k], BAR)));
                }
            }
        }
        out.push('\n');
        out
    }

    fn messages(&self, outcome: &FieldOutcome) -> Vec<String> {
        let error = outcome
            .error
            .as_ref()
            .map(|error| self.palette.paint_line(&error.message()));
        error
            .into_iter()
            .chain(outcome.info.iter().map(|line| self.palette.paint_line(line)))
            .collect()
    }
}

/// `mark` at each column with spaces between, no trailing spaces.
fn draw(columns: &[usize], mark: char) -> String {
    let width = columns.iter().max().map_or(0, |max| max + 1);
    row(columns, width, mark).trim_end().to_string()
}

/// `width` characters with a bar at each of `columns`.
fn bar_prefix(columns: &[usize], width: usize) -> String {
    row(columns, width, BAR)
}

fn row(columns: &[usize], width: usize, mark: char) -> String {
    (0..width)
        .map(|col| if columns.contains(&col) { mark } else { ' ' })
        .collect()
}

impl<W: Write> Printer for FancyPrinter<W> {
    fn print(&mut self, result: &ChainResult) -> Result<()> {
        let rendered = self.render(result);
        self.writer.write_all(rendered.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}
