//! Candidate field sequences and the selection among them.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::field::Field;
use crate::fields::FieldSet;
use crate::pipeline::{ChainResult, run_chain};

/// Pattern choice offered to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternKind {
    /// Try all patterns, most specific first.
    #[default]
    Auto,
    ContainerNumber,
    Owner,
    OwnerEquipmentCategory,
    SizeType,
}

impl PatternKind {
    pub const ALL: [PatternKind; 5] = [
        Self::Auto,
        Self::ContainerNumber,
        Self::Owner,
        Self::OwnerEquipmentCategory,
        Self::SizeType,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::ContainerNumber => "container-number",
            Self::Owner => "owner",
            Self::OwnerEquipmentCategory => "owner-equipment-category",
            Self::SizeType => "size-type",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| format!("unknown pattern: {value}"))
    }
}

/// A named, ordered sequence of fields.
#[derive(Debug, Clone)]
pub struct Pattern {
    name: &'static str,
    fields: Vec<Arc<Field>>,
}

impl Pattern {
    pub fn new(name: &'static str, fields: Vec<Arc<Field>>) -> Self {
        Self { name, fields }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &[Arc<Field>] {
        &self.fields
    }

    pub fn validate(&self, line: &str) -> ChainResult {
        run_chain(line, &self.fields)
    }
}

impl FieldSet {
    fn full_pattern(&self) -> Pattern {
        Pattern::new(
            "container-number-size-type",
            vec![
                Arc::clone(&self.owner),
                Arc::clone(&self.category),
                Arc::clone(&self.serial),
                Arc::clone(&self.check_digit),
                Arc::clone(&self.length),
                Arc::clone(&self.height_width),
                Arc::clone(&self.type_code),
            ],
        )
    }

    fn container_number_pattern(&self) -> Pattern {
        Pattern::new(
            "container-number",
            vec![
                Arc::clone(&self.owner),
                Arc::clone(&self.category),
                Arc::clone(&self.serial),
                Arc::clone(&self.check_digit),
            ],
        )
    }

    fn owner_category_pattern(&self) -> Pattern {
        Pattern::new(
            "owner-equipment-category",
            vec![Arc::clone(&self.owner), Arc::clone(&self.category)],
        )
    }

    fn owner_pattern(&self) -> Pattern {
        Pattern::new("owner", vec![Arc::clone(&self.owner)])
    }

    fn size_type_pattern(&self) -> Pattern {
        Pattern::new(
            "size-type",
            vec![
                Arc::clone(&self.length),
                Arc::clone(&self.height_width),
                Arc::clone(&self.type_code),
            ],
        )
    }

    /// Candidate patterns for `kind`, most specific first.
    pub fn patterns(&self, kind: PatternKind) -> Vec<Pattern> {
        match kind {
            PatternKind::Auto => vec![
                self.full_pattern(),
                self.container_number_pattern(),
                self.owner_category_pattern(),
                self.owner_pattern(),
                self.size_type_pattern(),
            ],
            PatternKind::ContainerNumber => vec![self.container_number_pattern()],
            PatternKind::Owner => vec![self.owner_pattern()],
            PatternKind::OwnerEquipmentCategory => vec![self.owner_category_pattern()],
            PatternKind::SizeType => vec![self.size_type_pattern()],
        }
    }
}

/// Pick the first pattern that validates `sample` without errors, or the
/// first pattern if none does. `None` only for an empty list.
pub fn select_pattern<'a>(sample: &str, patterns: &'a [Pattern]) -> Option<&'a Pattern> {
    let chosen = patterns
        .iter()
        .find(|pattern| pattern.validate(sample).is_valid())
        .or_else(|| patterns.first());
    if let Some(pattern) = chosen {
        debug!(pattern = pattern.name(), "selected pattern");
    }
    chosen
}
