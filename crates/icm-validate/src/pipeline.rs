//! Runs an ordered chain of fields over one line of text.

use std::sync::Arc;

use tracing::trace;

use crate::error::FieldError;
use crate::field::{Datum, Field, FieldKind, PreviousValues};
use crate::text::Line;

/// What one field produced for one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOutcome {
    pub kind: FieldKind,
    pub width: usize,
    /// Normalized value; empty if the field was not found.
    pub value: String,
    /// Values accepted before this field.
    pub previous: PreviousValues,
    pub info: Vec<Line>,
    pub data: Vec<Datum>,
    pub error: Option<FieldError>,
}

impl FieldOutcome {
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Whether the renderer has anything to say about this field.
    pub fn is_annotated(&self) -> bool {
        self.error.is_some() || !self.info.is_empty()
    }
}

/// Outcomes of every field of a chain, in chain order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainResult {
    pub outcomes: Vec<FieldOutcome>,
}

impl ChainResult {
    /// The representative error: the one of the last failing field.
    pub fn error(&self) -> Option<&FieldError> {
        self.outcomes
            .iter()
            .rev()
            .find_map(|outcome| outcome.error.as_ref())
    }

    pub fn is_valid(&self) -> bool {
        self.outcomes.iter().all(FieldOutcome::is_valid)
    }

    pub fn data(&self) -> impl Iterator<Item = &Datum> {
        self.outcomes.iter().flat_map(|outcome| outcome.data.iter())
    }
}

/// Per line state of one validation run.
struct ChainRun<'a> {
    remaining: &'a str,
    previous: PreviousValues,
    outcomes: Vec<FieldOutcome>,
}

impl<'a> ChainRun<'a> {
    fn start(line: &'a str) -> Self {
        Self {
            remaining: line,
            previous: PreviousValues::new(),
            outcomes: Vec::new(),
        }
    }

    fn step(&mut self, field: &Field) {
        let raw = match field.locate(self.remaining) {
            Some(range) => {
                let raw = &self.remaining[range.clone()];
                self.remaining = &self.remaining[range.end..];
                raw
            }
            None => "",
        };
        let value = field.normalize(raw);
        let verdict = field.validate(&value, &self.previous);
        trace!(kind = ?field.kind(), %value, valid = verdict.error.is_none(), "validated field");

        let previous = self.previous.clone();
        self.previous.push(value.clone());
        self.outcomes.push(FieldOutcome {
            kind: field.kind(),
            width: field.width(),
            value,
            previous,
            info: verdict.info,
            data: verdict.data,
            error: verdict.error,
        });
    }

    fn finish(self) -> ChainResult {
        ChainResult {
            outcomes: self.outcomes,
        }
    }
}

/// Validate `line` with every field of `fields` in order.
///
/// Text between located fields is skipped. A field that cannot be located
/// is validated with an empty value, so every field yields an outcome.
pub fn run_chain(line: &str, fields: &[Arc<Field>]) -> ChainResult {
    let mut run = ChainRun::start(line);
    for field in fields {
        run.step(field);
    }
    run.finish()
}
