//! Owner registry backed by semicolon separated CSV files.
//!
//! Rows are `code;company;city;country` without a header. The user
//! maintained `custom-owner.csv` is read after `owner.csv`, so its rows
//! replace registry rows with the same code.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use icm_model::{Owner, OwnerCode, OwnerLookup};
use tracing::debug;

use crate::error::{Result, StandardsError};

pub const OWNER_FILENAME: &str = "owner.csv";
pub const CUSTOM_OWNER_FILENAME: &str = "custom-owner.csv";

const DELIMITER: u8 = b';';

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnerRegistry {
    owners: BTreeMap<OwnerCode, Owner>,
}

impl OwnerRegistry {
    pub fn from_owners(owners: impl IntoIterator<Item = Owner>) -> Self {
        let mut registry = Self::default();
        registry.extend(owners);
        registry
    }

    /// Load the registry file and, if present, the custom owner file.
    pub fn load(owner_csv: &Path, custom_csv: Option<&Path>) -> Result<Self> {
        let mut registry = Self::from_owners(read_owner_file(owner_csv)?);
        if let Some(custom) = custom_csv.filter(|path| path.exists()) {
            let custom_owners = read_owner_file(custom)?;
            debug!(
                path = %custom.display(),
                count = custom_owners.len(),
                "loaded custom owners"
            );
            registry.extend(custom_owners);
        }
        Ok(registry)
    }

    /// Insert owners, replacing entries with the same code.
    pub fn extend(&mut self, owners: impl IntoIterator<Item = Owner>) {
        for owner in owners {
            self.owners.insert(owner.code, owner);
        }
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}

impl OwnerLookup for OwnerRegistry {
    fn lookup_owner(&self, code: &str) -> Option<Owner> {
        let code = OwnerCode::new(code).ok()?;
        self.owners.get(&code).cloned()
    }

    fn owner_codes(&self) -> Vec<OwnerCode> {
        self.owners.keys().copied().collect()
    }
}

fn read_owner_file(path: &Path) -> Result<Vec<Owner>> {
    let file = File::open(path).map_err(|source| StandardsError::io(path, source))?;
    parse_owners(file, path)
}

/// Parse owner rows; `path` is only used for error messages.
pub fn parse_owners(reader: impl Read, path: &Path) -> Result<Vec<Owner>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut owners = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|err| StandardsError::csv(path, err))?;
        let line = record.position().map_or(0, |pos| pos.line());
        if record.len() != 4 {
            return Err(StandardsError::csv(
                path,
                format!("line {line}: expected 4 fields, found {}", record.len()),
            ));
        }
        let raw_code = record[0].trim();
        let code = parse_owner_code(raw_code).ok_or_else(|| StandardsError::InvalidCode {
            path: path.to_path_buf(),
            line,
            code: raw_code.to_string(),
            message: "owner code must be 3 uppercase letters".to_string(),
        })?;
        owners.push(Owner {
            code,
            company: record[1].trim().to_string(),
            city: record[2].trim().to_string(),
            country: record[3].trim().to_string(),
        });
    }
    Ok(owners)
}

fn parse_owner_code(value: &str) -> Option<OwnerCode> {
    if !value.bytes().all(|b| b.is_ascii_uppercase()) {
        return None;
    }
    OwnerCode::new(value).ok()
}

/// Write owners in the registry file format.
pub fn write_owners_csv<'a>(
    owners: impl IntoIterator<Item = &'a Owner>,
    writer: impl Write,
    path: &Path,
) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .from_writer(writer);
    for owner in owners {
        writer
            .write_record([
                owner.code.as_str(),
                owner.company.as_str(),
                owner.city.as_str(),
                owner.country.as_str(),
            ])
            .map_err(|err| StandardsError::csv(path, err))?;
    }
    writer
        .flush()
        .map_err(|source| StandardsError::io(path, source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_lowercase_codes() {
        let err = parse_owners("abc;Company;City;Country\n".as_bytes(), Path::new("owner.csv"))
            .unwrap_err();
        assert!(matches!(err, StandardsError::InvalidCode { line: 1, .. }));
    }

    #[test]
    fn test_lookup_normalizes_case() {
        let registry = OwnerRegistry::from_owners(
            parse_owners("MSC;Mediterranean;Geneva;Switzerland\n".as_bytes(), Path::new("x"))
                .unwrap(),
        );
        assert_eq!(registry.lookup_owner("msc").unwrap().city, "Geneva");
        assert!(registry.lookup_owner("MS").is_none());
    }
}
