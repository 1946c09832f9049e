//! Field level validation errors.
//!
//! These are values stored in a field outcome, never returned as `Err`:
//! a failing field does not stop the chain.

use std::fmt;

use icm_model::OwnerCode;
use thiserror::Error;

use crate::text::Line;

/// Broad classes of field errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Wrong length or characters.
    Format,
    /// Well formed but not found in a registry.
    Lookup,
    /// Depends on an invalid preceding field.
    NotCalculable,
    /// Well formed check digit that does not match.
    ChecksumMismatch,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("owner code is not 3 letters long{example}")]
    OwnerFormat { example: Example },

    #[error("{code} is not registered{example}")]
    OwnerUnregistered { code: String, example: Example },

    #[error("equipment category id is not {allowed}")]
    UnknownCategory { allowed: Choices },

    #[error("serial number is not 6 numbers long")]
    SerialFormat,

    #[error("check digit is not calculable")]
    CheckDigitNotCalculable,

    #[error("check digit must be a number (calculated: {calculated})")]
    CheckDigitNotANumber { calculated: u8 },

    #[error("calculated check digit is {expected}")]
    CheckDigitMismatch { expected: u8 },

    #[error("{name} is not a valid number or a valid character")]
    CodeFormat { name: &'static str },

    #[error("{name} is not valid")]
    UnknownCode { name: &'static str },
}

impl FieldError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::OwnerFormat { .. }
            | Self::SerialFormat
            | Self::CheckDigitNotANumber { .. }
            | Self::CodeFormat { .. } => ErrorKind::Format,
            Self::OwnerUnregistered { .. }
            | Self::UnknownCategory { .. }
            | Self::UnknownCode { .. } => ErrorKind::Lookup,
            Self::CheckDigitNotCalculable => ErrorKind::NotCalculable,
            Self::CheckDigitMismatch { .. } => ErrorKind::ChecksumMismatch,
        }
    }

    /// The message with its parts marked for styled output.
    ///
    /// Renders to the same text as `Display`.
    pub fn message(&self) -> Line {
        match self {
            Self::OwnerFormat { example } => Line::new()
                .emphasis("owner code")
                .plain(" is not ")
                .strong("3 letters")
                .plain(" long")
                .append(example.line()),
            Self::OwnerUnregistered { code, example } => Line::new()
                .emphasis(code.as_str())
                .plain(" is not ")
                .strong("registered")
                .append(example.line()),
            Self::UnknownCategory { allowed } => Line::new()
                .emphasis("equipment category id")
                .plain(" is not ")
                .append(allowed.line()),
            Self::SerialFormat => Line::new()
                .emphasis("serial number")
                .plain(" is not ")
                .strong("6 numbers")
                .plain(" long"),
            Self::CheckDigitNotCalculable => Line::new()
                .emphasis("check digit")
                .plain(" is not calculable"),
            Self::CheckDigitNotANumber { calculated } => Line::new()
                .emphasis("check digit")
                .plain(" must be a ")
                .strong("number")
                .plain(" (calculated: ")
                .good(calculated.to_string())
                .plain(")"),
            Self::CheckDigitMismatch { expected } => Line::new()
                .plain("calculated ")
                .emphasis("check digit")
                .plain(" is ")
                .good(expected.to_string()),
            Self::CodeFormat { name } => Line::new()
                .emphasis(*name)
                .plain(" is not a ")
                .strong("valid number")
                .plain(" or a ")
                .strong("valid character"),
            Self::UnknownCode { name } => Line::new()
                .emphasis(*name)
                .plain(" is not ")
                .strong("valid"),
        }
    }
}

/// Registered owner code suggested in owner messages, if any is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Example(pub Option<OwnerCode>);

impl Example {
    fn line(&self) -> Line {
        match self.0 {
            Some(code) => Line::new()
                .plain(" (e.g. ")
                .emphasis(code.as_str())
                .plain(")"),
            None => Line::new(),
        }
    }
}

impl fmt::Display for Example {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(code) => write!(f, " (e.g. {code})"),
            None => Ok(()),
        }
    }
}

/// Sorted list of allowed single character values, rendered `J, U or Z`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Choices(Vec<char>);

impl Choices {
    pub fn new(mut values: Vec<char>) -> Self {
        values.sort_unstable();
        values.dedup();
        Self(values)
    }

    fn line(&self) -> Line {
        let mut line = Line::new();
        for (idx, value) in self.0.iter().enumerate() {
            line = line.good(value.to_string()).plain(self.joiner(idx));
        }
        line
    }

    fn joiner(&self, idx: usize) -> &'static str {
        let len = self.0.len();
        if len >= 2 && idx == len - 2 {
            " or "
        } else if idx + 2 < len {
            ", "
        } else {
            ""
        }
    }
}

impl fmt::Display for Choices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, value) in self.0.iter().enumerate() {
            write!(f, "{value}{}", self.joiner(idx))?;
        }
        Ok(())
    }
}
