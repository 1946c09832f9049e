//! Registry lookups used to resolve code segments to descriptions.
//!
//! Implementations must be deterministic and free of observable side
//! effects; validation calls them repeatedly for every input line.

use serde::{Deserialize, Serialize};

use crate::code::OwnerCode;

/// A registered container owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub code: OwnerCode,
    pub company: String,
    pub city: String,
    pub country: String,
}

pub trait OwnerLookup: Send + Sync {
    /// Resolve a normalized three letter owner code.
    fn lookup_owner(&self, code: &str) -> Option<Owner>;

    /// All registered owner codes in ascending order.
    fn owner_codes(&self) -> Vec<OwnerCode>;

    /// A registered code suitable for examples in messages.
    fn example_owner_code(&self) -> Option<OwnerCode> {
        self.owner_codes().into_iter().next()
    }
}

pub trait EquipmentCategoryLookup: Send + Sync {
    /// Resolve an uppercase category id to its description.
    fn lookup_category(&self, id: char) -> Option<String>;

    /// All known category ids in ascending order.
    fn category_ids(&self) -> Vec<char>;
}

/// Height and width descriptions of a height/width code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeightWidth {
    pub height: String,
    pub width: String,
}

pub trait SizeLookup: Send + Sync {
    fn lookup_length(&self, code: &str) -> Option<String>;

    fn lookup_height_width(&self, code: &str) -> Option<HeightWidth>;
}

/// Type description together with the description of its group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeAndGroup {
    pub type_info: String,
    pub group_info: String,
}

pub trait TypeLookup: Send + Sync {
    fn lookup_type(&self, code: &str) -> Option<TypeAndGroup>;
}
