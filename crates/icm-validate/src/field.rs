//! The field abstraction: how one code segment is found and validated.

use std::fmt;
use std::ops::Range;

use regex::Regex;

use crate::error::FieldError;
use crate::text::Line;

/// The seven segment types of a container marking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Owner,
    EquipmentCategory,
    SerialNumber,
    CheckDigit,
    Length,
    HeightWidth,
    Type,
}

impl FieldKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Owner => "owner code",
            Self::EquipmentCategory => "equipment category id",
            Self::SerialNumber => "serial number",
            Self::CheckDigit => "check digit",
            Self::Length => "length code",
            Self::HeightWidth => "height and width code",
            Self::Type => "type code",
        }
    }
}

/// A named value emitted for tabular output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Datum {
    pub name: &'static str,
    pub value: Option<String>,
}

impl Datum {
    pub fn new(name: &'static str) -> Self {
        Self { name, value: None }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// Result of validating one field value.
///
/// The datum list has the same names in the same order whether or not
/// the value is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Verdict {
    pub info: Vec<Line>,
    pub data: Vec<Datum>,
    pub error: Option<FieldError>,
}

impl Verdict {
    pub fn valid(data: Vec<Datum>) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    pub fn invalid(data: Vec<Datum>, error: FieldError) -> Self {
        Self {
            data,
            error: Some(error),
            ..Self::default()
        }
    }

    pub fn with_info(mut self, info: Vec<Line>) -> Self {
        self.info = info;
        self
    }
}

/// Normalized values accepted earlier in the same chain, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviousValues(Vec<String>);

impl PreviousValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy with `value` appended.
    pub fn with(&self, value: impl Into<String>) -> Self {
        let mut values = self.0.clone();
        values.push(value.into());
        Self(values)
    }

    pub(crate) fn push(&mut self, value: String) {
        self.0.push(value);
    }

    /// The last `count` values in chain order.
    pub fn recent(&self, count: usize) -> Option<&[String]> {
        let start = self.0.len().checked_sub(count)?;
        Some(&self.0[start..])
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for PreviousValues {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Field specific validation logic.
pub trait FieldValidator: Send + Sync {
    fn validate(&self, value: &str, previous: &PreviousValues) -> Verdict;
}

impl<F> FieldValidator for F
where
    F: Fn(&str, &PreviousValues) -> Verdict + Send + Sync,
{
    fn validate(&self, value: &str, previous: &PreviousValues) -> Verdict {
        self(value, previous)
    }
}

/// Stateless descriptor of one code segment.
pub struct Field {
    kind: FieldKind,
    width: usize,
    locator: Regex,
    uppercase: bool,
    validator: Box<dyn FieldValidator>,
}

impl Field {
    pub fn new(
        kind: FieldKind,
        width: usize,
        locator: Regex,
        validator: impl FieldValidator + 'static,
    ) -> Self {
        Self {
            kind,
            width,
            locator,
            uppercase: false,
            validator: Box::new(validator),
        }
    }

    /// Uppercase located values before validation.
    pub fn uppercase(mut self) -> Self {
        self.uppercase = true;
        self
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Number of characters the field consumes.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Byte range of the next window in `text` that looks like this field.
    pub fn locate(&self, text: &str) -> Option<Range<usize>> {
        self.locator.find(text).map(|found| found.range())
    }

    pub fn normalize(&self, raw: &str) -> String {
        if self.uppercase {
            raw.to_uppercase()
        } else {
            raw.to_string()
        }
    }

    pub fn validate(&self, value: &str, previous: &PreviousValues) -> Verdict {
        self.validator.validate(value, previous)
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("kind", &self.kind)
            .field("width", &self.width)
            .field("locator", &self.locator.as_str())
            .field("uppercase", &self.uppercase)
            .finish_non_exhaustive()
    }
}
