//! Renderers for validation results.

#![deny(unsafe_code)]

pub mod csv_output;
pub mod error;
pub mod fancy;
pub mod output;
pub mod palette;

pub use crate::csv_output::CsvPrinter;
pub use crate::error::{ReportError, Result};
pub use crate::fancy::FancyPrinter;
pub use crate::output::{OutputMode, Printer};
pub use crate::palette::{Palette, Tone};
