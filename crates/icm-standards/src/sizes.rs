//! Length and height/width codes (`size.json`).

use std::collections::BTreeMap;
use std::path::Path;

use icm_model::{HeightWidth, SizeLookup};
use serde::{Deserialize, Serialize};

use crate::error::{Result, StandardsError};

pub const SIZE_FILENAME: &str = "size.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeTable {
    length: BTreeMap<String, String>,
    #[serde(rename = "height-width")]
    height_width: BTreeMap<String, HeightWidth>,
}

impl SizeTable {
    pub fn from_json(content: &str, path: &Path) -> Result<Self> {
        let table: Self = serde_json::from_str(content).map_err(|source| StandardsError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        let invalid = table
            .length
            .keys()
            .chain(table.height_width.keys())
            .find(|code| !is_size_code(code));
        if let Some(code) = invalid {
            return Err(StandardsError::InvalidCode {
                path: path.to_path_buf(),
                line: 0,
                code: code.clone(),
                message: "size code must be one uppercase letter or digit".to_string(),
            });
        }
        Ok(table)
    }
}

fn is_size_code(code: &str) -> bool {
    let mut chars = code.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(c), None) if c.is_ascii_digit() || c.is_ascii_uppercase()
    )
}

impl SizeLookup for SizeTable {
    fn lookup_length(&self, code: &str) -> Option<String> {
        self.length.get(code).cloned()
    }

    fn lookup_height_width(&self, code: &str) -> Option<HeightWidth> {
        self.height_width.get(code).cloned()
    }
}
