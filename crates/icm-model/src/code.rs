//! Value types for the segments of a container identification code.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::check_digit::checksum;
use crate::error::{ModelError, Result};

/// Largest serial number that fits in six digits.
pub const MAX_SERIAL_NUMBER: u32 = 999_999;

/// Three uppercase ASCII letters identifying the owner of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OwnerCode([u8; 3]);

impl OwnerCode {
    /// Parse an owner code, accepting lowercase letters.
    pub fn new(value: &str) -> Result<Self> {
        let bytes = value.as_bytes();
        if bytes.len() != 3 || !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(ModelError::InvalidOwnerCode(value.to_string()));
        }
        Ok(Self([
            bytes[0].to_ascii_uppercase(),
            bytes[1].to_ascii_uppercase(),
            bytes[2].to_ascii_uppercase(),
        ]))
    }

    pub fn as_bytes(&self) -> &[u8; 3] {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII letters are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Display for OwnerCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for OwnerCode {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<OwnerCode> for String {
    fn from(code: OwnerCode) -> Self {
        code.as_str().to_string()
    }
}

/// Single uppercase letter classifying the equipment (`U`, `J` or `Z`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EquipmentCategoryId(u8);

impl EquipmentCategoryId {
    /// Freight container.
    pub const FREIGHT: Self = Self(b'U');

    pub fn new(id: char) -> Result<Self> {
        if !id.is_ascii_alphabetic() {
            return Err(ModelError::InvalidCategoryId(id));
        }
        Ok(Self(id.to_ascii_uppercase() as u8))
    }

    pub fn as_byte(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(self.0)
    }
}

impl fmt::Display for EquipmentCategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Six digit serial number, rendered zero padded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SerialNumber(u32);

impl SerialNumber {
    pub fn new(value: u32) -> Result<Self> {
        if value > MAX_SERIAL_NUMBER {
            return Err(ModelError::SerialOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Parse exactly six ASCII digits.
    pub fn parse(value: &str) -> Result<Self> {
        if value.len() != 6 || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ModelError::InvalidSerialNumber(value.to_string()));
        }
        value
            .parse()
            .map(Self)
            .map_err(|_| ModelError::InvalidSerialNumber(value.to_string()))
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// The next serial number, wrapping from 999999 to 000000.
    pub fn wrapping_next(self) -> Self {
        Self((self.0 + 1) % (MAX_SERIAL_NUMBER + 1))
    }

    /// The last decimal digit.
    pub fn last_digit(self) -> u8 {
        (self.0 % 10) as u8
    }
}

impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06}", self.0)
    }
}

/// Separators placed between the segments when a code is rendered.
///
/// ```text
/// ABC U 123456 0   20 G1
///    ↑ ↑      ↑  ↑   ↑
///    │ │      │  │   └─ size_type
///    │ │      │  └─ check_size
///    │ │      └─ serial_check
///    │ └─ equip_serial
///    └─ owner_equip
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separators {
    pub owner_equip: String,
    pub equip_serial: String,
    pub serial_check: String,
    pub check_size: String,
    pub size_type: String,
}

impl Default for Separators {
    fn default() -> Self {
        Self {
            owner_equip: " ".to_string(),
            equip_serial: " ".to_string(),
            serial_check: " ".to_string(),
            check_size: "   ".to_string(),
            size_type: " ".to_string(),
        }
    }
}

/// Owner code, equipment category, serial number and the matching check digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContainerNumber {
    pub owner: OwnerCode,
    pub category: EquipmentCategoryId,
    pub serial: SerialNumber,
    check_digit: u8,
}

impl ContainerNumber {
    /// Build a container number with its calculated check digit.
    pub fn new(owner: OwnerCode, category: EquipmentCategoryId, serial: SerialNumber) -> Self {
        Self {
            owner,
            category,
            serial,
            check_digit: checksum(&owner, category, serial),
        }
    }

    /// The printed check digit (checksum modulo 10).
    pub fn check_digit(&self) -> u8 {
        self.check_digit % 10
    }

    /// The checksum before the final modulo 10, in `0..=10`.
    pub fn raw_check_digit(&self) -> u8 {
        self.check_digit
    }

    /// Render with custom separators between the segments.
    pub fn format_with(&self, separators: &Separators) -> String {
        format!(
            "{}{}{}{}{}{}{}",
            self.owner,
            separators.owner_equip,
            self.category,
            separators.equip_serial,
            self.serial,
            separators.serial_check,
            self.check_digit()
        )
    }
}

impl fmt::Display for ContainerNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with(&Separators::default()))
    }
}
