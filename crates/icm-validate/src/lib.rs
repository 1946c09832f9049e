//! Validation of container markings.
//!
//! A line of text is matched against a [`Pattern`], an ordered chain of
//! [`Field`]s. Every field locates its segment in the remaining text,
//! validates it and reports info lines, named data and an optional error.
//! Later fields see the values accepted before them, which is how the
//! check digit is calculated from owner code, category and serial number.

#![deny(unsafe_code)]

pub mod error;
pub mod field;
pub mod fields;
pub mod pattern;
pub mod pipeline;
pub mod text;

pub use crate::error::{Choices, ErrorKind, Example, FieldError};
pub use crate::field::{Datum, Field, FieldKind, FieldValidator, PreviousValues, Verdict};
pub use crate::fields::{FieldSet, Lookups};
pub use crate::pattern::{Pattern, PatternKind, select_pattern};
pub use crate::pipeline::{ChainResult, FieldOutcome, run_chain};
pub use crate::text::{Line, Mark, Span};
