//! ISO 6346 check digit calculation.

use crate::code::{EquipmentCategoryId, OwnerCode, SerialNumber};

/// Numeric value of an uppercase ASCII letter, as stored by `OwnerCode`
/// and `EquipmentCategoryId`.
///
/// Letters count up from `A = 10`, skipping every multiple of 11:
/// `A=10, B=12, … K=21, L=23, … U=32, V=34, … Z=38`.
const fn letter_value(letter: u8) -> u32 {
    let c = letter as u32;
    c - 55 + (c - 56) / 10
}

/// Weighted checksum of a container number, in `0..=10`.
///
/// The printed check digit is the result modulo 10, so a checksum of 10
/// prints as `0`.
pub fn checksum(owner: &OwnerCode, category: EquipmentCategoryId, serial: SerialNumber) -> u8 {
    let mut sum: u32 = 0;
    let mut weight: u32 = 1;
    for &letter in owner.as_bytes().iter().chain([category.as_byte()].iter()) {
        sum += weight * letter_value(letter);
        weight <<= 1;
    }

    // Least significant serial digit carries the largest weight.
    let mut rest = serial.value();
    weight = 512;
    while weight >= 16 {
        sum += weight * (rest % 10);
        rest /= 10;
        weight >>= 1;
    }
    (sum % 11) as u8
}
