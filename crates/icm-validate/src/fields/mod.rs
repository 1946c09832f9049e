//! Definitions of the seven fields of a container marking.

mod category;
mod check_digit;
mod owner;
mod serial;
mod size;
mod type_code;

use std::sync::Arc;

use icm_model::{EquipmentCategoryLookup, OwnerLookup, Separators, SizeLookup, TypeLookup};

use crate::field::Field;

pub use self::category::category_field;
pub use self::check_digit::check_digit_field;
pub use self::owner::owner_field;
pub use self::serial::serial_field;
pub use self::size::{height_width_field, length_field};
pub use self::type_code::type_field;

/// Lookup collaborators the fields resolve codes with.
#[derive(Clone)]
pub struct Lookups {
    pub owners: Arc<dyn OwnerLookup>,
    pub categories: Arc<dyn EquipmentCategoryLookup>,
    pub sizes: Arc<dyn SizeLookup>,
    pub types: Arc<dyn TypeLookup>,
}

/// One shared instance of every field.
#[derive(Debug, Clone)]
pub struct FieldSet {
    pub owner: Arc<Field>,
    pub category: Arc<Field>,
    pub serial: Arc<Field>,
    pub check_digit: Arc<Field>,
    pub length: Arc<Field>,
    pub height_width: Arc<Field>,
    pub type_code: Arc<Field>,
}

impl FieldSet {
    /// Build all fields; `separators` format error-prone serial numbers.
    pub fn new(lookups: &Lookups, separators: &Separators) -> Self {
        Self {
            owner: Arc::new(owner_field(Arc::clone(&lookups.owners))),
            category: Arc::new(category_field(Arc::clone(&lookups.categories))),
            serial: Arc::new(serial_field()),
            check_digit: Arc::new(check_digit_field(separators.clone())),
            length: Arc::new(length_field(Arc::clone(&lookups.sizes))),
            height_width: Arc::new(height_width_field(Arc::clone(&lookups.sizes))),
            type_code: Arc::new(type_field(Arc::clone(&lookups.types))),
        }
    }
}
