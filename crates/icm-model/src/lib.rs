//! Intermodal container identification code model.
//!
//! Value types for the segments of an ISO 6346 code, the check digit
//! calculation, the transposition error detector, the lookup traits used
//! to resolve codes against registries, and the container number generator.

#![deny(unsafe_code)]

pub mod check_digit;
pub mod code;
pub mod error;
pub mod generate;
pub mod lookup;
pub mod transposition;

pub use check_digit::checksum;
pub use code::{
    ContainerNumber, EquipmentCategoryId, MAX_SERIAL_NUMBER, OwnerCode, Separators, SerialNumber,
};
pub use error::{ModelError, Result};
pub use generate::{Generator, GeneratorOptions, SerialRange};
pub use lookup::{
    EquipmentCategoryLookup, HeightWidth, Owner, OwnerLookup, SizeLookup, TypeAndGroup,
    TypeLookup,
};
pub use transposition::{CHECK_DIGIT_POSITION, Transposition, detect_transposition};
