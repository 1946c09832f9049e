//! Transposition error detection.

use icm_model::{
    EquipmentCategoryId, OwnerCode, SerialNumber, Transposition, checksum, detect_transposition,
};
use proptest::prelude::*;

fn detect(owner: &str, serial: u32, check_digit: u8) -> Vec<(u32, u8, u8)> {
    detect_transposition(
        &OwnerCode::new(owner).unwrap(),
        EquipmentCategoryId::FREIGHT,
        SerialNumber::new(serial).unwrap(),
        check_digit,
    )
    .into_iter()
    .map(|Transposition { number, position }| {
        (number.serial.value(), number.check_digit(), position)
    })
    .collect()
}

#[test]
fn test_other_check_digits_are_not_affected() {
    assert!(detect("ABC", 123_123, 7).is_empty());
}

#[test]
fn test_cma_two_swaps() {
    assert_eq!(
        detect("CMA", 163_912, 10),
        vec![(169_312, 0, 2), (163_192, 0, 3)]
    );
}

#[test]
fn test_rcb_single_swap() {
    assert_eq!(detect("RCB", 1_130, 0), vec![(10_130, 0, 1)]);
}

#[test]
fn test_wsl_includes_check_digit_swap() {
    assert_eq!(
        detect("WSL", 801_743, 10),
        vec![(810_743, 0, 1), (807_143, 0, 2), (801_740, 3, 5)]
    );
}

#[test]
fn test_apl_six_swaps() {
    assert_eq!(
        detect("APL", 689_473, 10),
        vec![
            (869_473, 0, 0),
            (698_473, 0, 1),
            (684_973, 0, 2),
            (689_743, 0, 3),
            (689_437, 0, 4),
            (689_470, 3, 5),
        ]
    );
}

#[test]
fn test_abc_681304() {
    assert_eq!(
        detect("ABC", 681_304, 0),
        vec![(681_034, 0, 3), (681_340, 0, 4)]
    );
}

proptest! {
    #[test]
    fn residues_other_than_zero_and_three_yield_nothing(
        owner in "[A-Z]{3}",
        serial in 0u32..=999_999,
        check_digit in prop::sample::select(vec![1u8, 2, 4, 5, 6, 7, 8, 9]),
    ) {
        prop_assert!(detect(&owner, serial, check_digit).is_empty());
    }

    #[test]
    fn every_reported_number_is_valid(
        owner in "[A-Z]{3}",
        serial in 0u32..=999_999,
    ) {
        let owner = OwnerCode::new(&owner).unwrap();
        let serial = SerialNumber::new(serial).unwrap();
        let check_digit = checksum(&owner, EquipmentCategoryId::FREIGHT, serial);
        for found in detect_transposition(&owner, EquipmentCategoryId::FREIGHT, serial, check_digit) {
            let recalculated = checksum(&owner, EquipmentCategoryId::FREIGHT, found.number.serial);
            prop_assert_eq!(recalculated % 10, found.number.check_digit());
            prop_assert!(found.position <= 5);
            prop_assert_ne!(found.number.serial, serial);
        }
    }
}
