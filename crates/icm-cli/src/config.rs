//! User configuration stored as `config.toml` in the config directory.
//!
//! The file is created with documented defaults the first time a command
//! needs it. Values given on the command line take precedence over it.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use icm_model::Separators;
use icm_report::OutputMode;
use icm_validate::PatternKind;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_CONFIG: &str = r#"# Separators
#
#  ABC U 123456 0   20 G1
#     ↑ ↑      ↑  ↑   ↑
#     │ │      │  │   └─ sep-size-type
#     │ │      │  │
#     │ │      │  └─ sep-check-size
#     │ │      │
#     │ │      └─ sep-serial-check
#     │ │
#     │ └─ sep-equip-serial
#     │
#     └─ sep-owner-equip
#
sep-owner-equip = " "
sep-equip-serial = " "
sep-serial-check = " "
sep-check-size = "   "
sep-size-type = " "

# Pattern matching mode
#                     auto = matches automatically a pattern
#         container-number = matches a container number
#                    owner = matches a three letter owner code
# owner-equipment-category = matches a three letter owner code with equipment category ID
#                size-type = matches length, width+height and type code
pattern = "auto"

# Output
#  auto = fancy for a single line and csv for multiple lines
# fancy = human readable output
#   csv = machine readable output
output = "auto"

# Omit the header row of CSV output
no-header = false

# Source of `icm download-owners`, semicolon separated lines of
# code;company;city;country
# owner-url = "https://example.com/owner.csv"
"#;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    pub sep_owner_equip: String,
    pub sep_equip_serial: String,
    pub sep_serial_check: String,
    pub sep_check_size: String,
    pub sep_size_type: String,
    pub pattern: PatternKind,
    pub output: OutputMode,
    pub no_header: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        let separators = Separators::default();
        Self {
            sep_owner_equip: separators.owner_equip,
            sep_equip_serial: separators.equip_serial,
            sep_serial_check: separators.serial_check,
            sep_check_size: separators.check_size,
            sep_size_type: separators.size_type,
            pattern: PatternKind::default(),
            output: OutputMode::default(),
            no_header: false,
            owner_url: None,
        }
    }
}

/// Separator values given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeparatorOverrides {
    pub owner_equip: Option<String>,
    pub equip_serial: Option<String>,
    pub serial_check: Option<String>,
    pub check_size: Option<String>,
    pub size_type: Option<String>,
}

impl Config {
    pub fn from_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).with_context(|| format!("parse config {}", path.display()))
    }

    /// Load `path`, writing the default configuration there first if it
    /// does not exist yet.
    pub fn load_or_init(path: &Path) -> Result<Self> {
        if icm_standards::init_file(path, DEFAULT_CONFIG)? {
            debug!(path = %path.display(), "wrote default config");
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_toml(&content, path)
    }

    /// Separators with command line values taking precedence.
    pub fn separators(&self, overrides: &SeparatorOverrides) -> Separators {
        let pick = |flag: &Option<String>, configured: &String| {
            flag.clone().unwrap_or_else(|| configured.clone())
        };
        Separators {
            owner_equip: pick(&overrides.owner_equip, &self.sep_owner_equip),
            equip_serial: pick(&overrides.equip_serial, &self.sep_equip_serial),
            serial_check: pick(&overrides.serial_check, &self.sep_serial_check),
            check_size: pick(&overrides.check_size, &self.sep_check_size),
            size_type: pick(&overrides.size_type, &self.sep_size_type),
        }
    }
}
