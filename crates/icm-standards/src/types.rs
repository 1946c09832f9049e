//! Type codes and their groups (`type.json`).
//!
//! A type code is two characters; the first one names the group.

use std::collections::BTreeMap;
use std::path::Path;

use icm_model::{TypeAndGroup, TypeLookup};
use serde::{Deserialize, Serialize};

use crate::error::{Result, StandardsError};

pub const TYPE_FILENAME: &str = "type.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeTable {
    groups: BTreeMap<String, String>,
    types: BTreeMap<String, String>,
}

impl TypeTable {
    pub fn from_json(content: &str, path: &Path) -> Result<Self> {
        let table: Self = serde_json::from_str(content).map_err(|source| StandardsError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        for code in table.types.keys() {
            let group_known = code
                .get(..1)
                .is_some_and(|group| table.groups.contains_key(group));
            if code.len() != 2 || !group_known {
                return Err(StandardsError::InvalidCode {
                    path: path.to_path_buf(),
                    line: 0,
                    code: code.clone(),
                    message: "type code must be two characters starting with a known group"
                        .to_string(),
                });
            }
        }
        Ok(table)
    }
}

impl TypeLookup for TypeTable {
    fn lookup_type(&self, code: &str) -> Option<TypeAndGroup> {
        let type_info = self.types.get(code)?;
        let group_info = self.groups.get(code.get(..1)?)?;
        Some(TypeAndGroup {
            type_info: type_info.clone(),
            group_info: group_info.clone(),
        })
    }
}
