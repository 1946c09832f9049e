//! Embedded default tables and loading of the data directory.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::categories::{CATEGORY_FILENAME, CategoryTable};
use crate::error::{Result, StandardsError};
use crate::owners::{CUSTOM_OWNER_FILENAME, OWNER_FILENAME, OwnerRegistry};
use crate::sizes::{SIZE_FILENAME, SizeTable};
use crate::types::{TYPE_FILENAME, TypeTable};

const DEFAULT_OWNERS: &str = include_str!("../data/owner.csv");
const DEFAULT_CATEGORIES: &str = include_str!("../data/equipment-category.json");
const DEFAULT_SIZES: &str = include_str!("../data/size.json");
const DEFAULT_TYPES: &str = include_str!("../data/type.json");

/// All lookup tables of one data directory.
#[derive(Debug, Clone)]
pub struct Tables {
    pub owners: OwnerRegistry,
    pub categories: CategoryTable,
    pub sizes: SizeTable,
    pub types: TypeTable,
}

/// Write `content` to `path` unless the file already exists.
///
/// Returns whether the file was created.
pub fn init_file(path: &Path, content: &str) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| StandardsError::io(parent, source))?;
    }
    fs::write(path, content).map_err(|source| StandardsError::io(path, source))?;
    info!(path = %path.display(), "created default data file");
    Ok(true)
}

fn read_table(data_dir: &Path, name: &str, default: &str) -> Result<(std::path::PathBuf, String)> {
    let path = data_dir.join(name);
    init_file(&path, default)?;
    let content = fs::read_to_string(&path).map_err(|source| StandardsError::io(&path, source))?;
    Ok((path, content))
}

/// Load every table from `data_dir`, creating missing files from the
/// embedded defaults first.
pub fn load_tables(data_dir: &Path) -> Result<Tables> {
    let owner_path = data_dir.join(OWNER_FILENAME);
    init_file(&owner_path, DEFAULT_OWNERS)?;
    let owners = OwnerRegistry::load(&owner_path, Some(&data_dir.join(CUSTOM_OWNER_FILENAME)))?;

    let (path, content) = read_table(data_dir, CATEGORY_FILENAME, DEFAULT_CATEGORIES)?;
    let categories = CategoryTable::from_json(&content, &path)?;

    let (path, content) = read_table(data_dir, SIZE_FILENAME, DEFAULT_SIZES)?;
    let sizes = SizeTable::from_json(&content, &path)?;

    let (path, content) = read_table(data_dir, TYPE_FILENAME, DEFAULT_TYPES)?;
    let types = TypeTable::from_json(&content, &path)?;

    debug!(
        data_dir = %data_dir.display(),
        owners = owners.len(),
        "loaded lookup tables"
    );
    Ok(Tables {
        owners,
        categories,
        sizes,
        types,
    })
}
