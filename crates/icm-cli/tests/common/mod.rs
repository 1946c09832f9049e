//! Fixture lookups shared by the integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use icm_model::{
    EquipmentCategoryLookup, HeightWidth, Owner, OwnerCode, OwnerLookup, SizeLookup, TypeAndGroup,
    TypeLookup,
};
use icm_validate::Lookups;

/// Registers `ABC`, `APL`, `CMA` and `NYK`, all with the same details.
pub struct FixtureOwners;

const OWNER_CODES: [&str; 4] = ["ABC", "APL", "CMA", "NYK"];

impl OwnerLookup for FixtureOwners {
    fn lookup_owner(&self, code: &str) -> Option<Owner> {
        if !OWNER_CODES.contains(&code) {
            return None;
        }
        Some(Owner {
            code: OwnerCode::new(code).ok()?,
            company: "some-company".to_string(),
            city: "some-city".to_string(),
            country: "some-country".to_string(),
        })
    }

    fn owner_codes(&self) -> Vec<OwnerCode> {
        OWNER_CODES
            .iter()
            .filter_map(|code| OwnerCode::new(code).ok())
            .collect()
    }
}

/// Knows only `U`.
pub struct FixtureCategories;

impl EquipmentCategoryLookup for FixtureCategories {
    fn lookup_category(&self, id: char) -> Option<String> {
        (id == 'U').then(|| "some-equip-cat-ID".to_string())
    }

    fn category_ids(&self) -> Vec<char> {
        vec!['U']
    }
}

/// Knows every code except `X`.
pub struct FixtureSizes;

impl SizeLookup for FixtureSizes {
    fn lookup_length(&self, code: &str) -> Option<String> {
        (code != "X").then(|| "some-length".to_string())
    }

    fn lookup_height_width(&self, code: &str) -> Option<HeightWidth> {
        (code != "X").then(|| HeightWidth {
            height: "some-height".to_string(),
            width: "some-width".to_string(),
        })
    }
}

/// Knows every code not starting with `X`.
pub struct FixtureTypes;

impl TypeLookup for FixtureTypes {
    fn lookup_type(&self, code: &str) -> Option<TypeAndGroup> {
        (!code.starts_with('X')).then(|| TypeAndGroup {
            type_info: "some-type".to_string(),
            group_info: "some-group".to_string(),
        })
    }
}

pub fn lookups() -> Lookups {
    Lookups {
        owners: Arc::new(FixtureOwners),
        categories: Arc::new(FixtureCategories),
        sizes: Arc::new(FixtureSizes),
        types: Arc::new(FixtureTypes),
    }
}
