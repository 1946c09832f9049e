//! Detection of serial numbers prone to transposition errors.
//!
//! Swapping two adjacent serial digits, or the last serial digit and the
//! check digit, can only keep a container number valid when its check
//! digit is 0 or 3. For those numbers every such swap that produces
//! another valid number is reported.

use crate::check_digit::checksum;
use crate::code::{ContainerNumber, EquipmentCategoryId, OwnerCode, SerialNumber};

/// Swap position reported for the last serial digit and the check digit.
pub const CHECK_DIGIT_POSITION: u8 = 5;

/// A valid container number reachable by one adjacent swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transposition {
    pub number: ContainerNumber,
    /// Index of the first swapped digit counted from the left of the serial
    /// number, `0..=4`; `5` swaps the last serial digit with the check digit.
    pub position: u8,
}

/// List the container numbers one adjacent swap away from the given one
/// that carry a valid check digit.
///
/// `check_digit` may be the raw checksum (`10` is treated as `0`).
pub fn detect_transposition(
    owner: &OwnerCode,
    category: EquipmentCategoryId,
    serial: SerialNumber,
    check_digit: u8,
) -> Vec<Transposition> {
    let check_digit = check_digit % 10;
    let mut found = Vec::new();

    if check_digit != 0 && check_digit != 3 {
        return found;
    }

    for high in (1..=5u32).rev() {
        let Some(swapped) = swap_digits(serial.value(), high - 1, high) else {
            continue;
        };
        let Ok(swapped) = SerialNumber::new(swapped) else {
            continue;
        };
        if checksum(owner, category, swapped) % 10 == check_digit {
            found.push(Transposition {
                number: ContainerNumber::new(*owner, category, swapped),
                position: (5 - high) as u8,
            });
        }
    }

    let last_digit = serial.last_digit();
    if last_digit == check_digit {
        return found;
    }
    let candidate = (serial.value() / 10) * 10 + u32::from(check_digit);
    if let Ok(candidate) = SerialNumber::new(candidate)
        && checksum(owner, category, candidate) % 10 == last_digit
    {
        found.push(Transposition {
            number: ContainerNumber::new(*owner, category, candidate),
            position: CHECK_DIGIT_POSITION,
        });
    }
    found
}

/// Swap the decimal digits at `low` and `high` (0 is the rightmost digit).
/// Returns `None` when both digits are equal.
fn swap_digits(number: u32, low: u32, high: u32) -> Option<u32> {
    let low_place = 10u32.pow(low);
    let high_place = 10u32.pow(high);
    let low_digit = (number / low_place) % 10;
    let high_digit = (number / high_place) % 10;
    if low_digit == high_digit {
        return None;
    }
    Some(number - low_digit * low_place - high_digit * high_place
        + low_digit * high_place
        + high_digit * low_place)
}

#[cfg(test)]
mod tests {
    use super::swap_digits;

    #[test]
    fn swaps_adjacent_digits() {
        assert_eq!(swap_digits(123_456, 0, 1), Some(123_465));
        assert_eq!(swap_digits(123_456, 4, 5), Some(213_456));
        assert_eq!(swap_digits(1_130, 3, 4), Some(10_130));
    }

    #[test]
    fn equal_digits_do_not_swap() {
        assert_eq!(swap_digits(112_233, 0, 1), None);
        assert_eq!(swap_digits(8_685, 4, 5), None);
        assert_eq!(swap_digits(1_130, 2, 3), None);
    }
}
