//! Equipment category ids (`equipment-category.json`).

use std::collections::BTreeMap;
use std::path::Path;

use icm_model::EquipmentCategoryLookup;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StandardsError};

pub const CATEGORY_FILENAME: &str = "equipment-category.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryTable {
    categories: BTreeMap<String, String>,
}

impl CategoryTable {
    pub fn from_json(content: &str, path: &Path) -> Result<Self> {
        let table: Self = serde_json::from_str(content).map_err(|source| StandardsError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        if let Some(id) = table.categories.keys().find(|id| !is_category_id(id)) {
            return Err(StandardsError::InvalidCode {
                path: path.to_path_buf(),
                line: 0,
                code: id.clone(),
                message: "equipment category id must be an uppercase letter".to_string(),
            });
        }
        Ok(table)
    }
}

fn is_category_id(id: &str) -> bool {
    let mut chars = id.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_uppercase())
}

impl EquipmentCategoryLookup for CategoryTable {
    fn lookup_category(&self, id: char) -> Option<String> {
        let mut buf = [0; 4];
        let key: &str = id.encode_utf8(&mut buf);
        self.categories.get(key).cloned()
    }

    fn category_ids(&self) -> Vec<char> {
        self.categories
            .keys()
            .filter_map(|id| id.chars().next())
            .collect()
    }
}
