//! Output selection.

use std::fmt;
use std::str::FromStr;

use icm_validate::ChainResult;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Writes validation results as they arrive.
pub trait Printer {
    fn print(&mut self, result: &ChainResult) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputMode {
    /// Fancy for a single line, CSV for multiple lines.
    #[default]
    Auto,
    Fancy,
    Csv,
}

impl OutputMode {
    pub const ALL: [OutputMode; 3] = [Self::Auto, Self::Fancy, Self::Csv];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Fancy => "fancy",
            Self::Csv => "csv",
        }
    }

    /// The concrete mode for an input of one or more lines.
    pub fn resolve(self, single_line: bool) -> Self {
        match self {
            Self::Auto if single_line => Self::Fancy,
            Self::Auto => Self::Csv,
            other => other,
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == value)
            .ok_or_else(|| format!("unknown output: {value}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        assert_eq!(OutputMode::Auto.resolve(true), OutputMode::Fancy);
        assert_eq!(OutputMode::Auto.resolve(false), OutputMode::Csv);
        assert_eq!(OutputMode::Csv.resolve(true), OutputMode::Csv);
        assert_eq!(OutputMode::Fancy.resolve(false), OutputMode::Fancy);
    }
}
