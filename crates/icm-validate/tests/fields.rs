//! Tests for the field definitions.

mod common;

use icm_model::Separators;
use icm_validate::{ErrorKind, FieldError, FieldKind, Mark, Pattern, PatternKind};

fn pattern(kind: PatternKind) -> Pattern {
    common::field_set().patterns(kind).remove(0)
}

fn datum<'a>(result: &'a icm_validate::ChainResult, name: &str) -> Option<&'a str> {
    result
        .data()
        .find(|datum| datum.name == name)
        .and_then(|datum| datum.value.as_deref())
}

fn info_text(result: &icm_validate::ChainResult, kind: FieldKind) -> Vec<String> {
    result
        .outcomes
        .iter()
        .find(|outcome| outcome.kind == kind)
        .map(|outcome| outcome.info.iter().map(ToString::to_string).collect())
        .unwrap_or_default()
}

#[test]
fn test_valid_container_number() {
    let result = pattern(PatternKind::ContainerNumber).validate(" abc u 123456 0 ");

    assert!(result.is_valid());
    let values: Vec<&str> = result.outcomes.iter().map(|o| o.value.as_str()).collect();
    assert_eq!(values, vec!["ABC", "U", "123456", "0"]);
    assert_eq!(
        info_text(&result, FieldKind::Owner),
        vec!["some-company", "some-city", "some-country"]
    );
    assert_eq!(
        info_text(&result, FieldKind::EquipmentCategory),
        vec!["some-equip-cat-ID"]
    );
    assert_eq!(datum(&result, "valid-check-digit"), Some("true"));
    assert_eq!(datum(&result, "calculated-check-digit"), Some("0"));
    assert_eq!(datum(&result, "possible-transposition-error"), None);
}

#[test]
fn test_wrong_check_digit() {
    let result = pattern(PatternKind::ContainerNumber).validate("abc u 123123 1");

    let error = result.error().unwrap();
    assert_eq!(error, &FieldError::CheckDigitMismatch { expected: 7 });
    assert_eq!(error.kind(), ErrorKind::ChecksumMismatch);
    assert_eq!(error.to_string(), "calculated check digit is 7");
    assert_eq!(datum(&result, "check-digit"), Some("1"));
    assert_eq!(datum(&result, "valid-check-digit"), Some("false"));
}

#[test]
fn test_letter_as_check_digit() {
    let result = pattern(PatternKind::ContainerNumber).validate("abc u 123123 a");

    assert_eq!(result.outcomes[3].value, "");
    assert_eq!(
        result.error().map(ToString::to_string).as_deref(),
        Some("check digit must be a number (calculated: 7)")
    );
    assert_eq!(datum(&result, "calculated-check-digit"), Some("7"));
}

#[test]
fn test_error_prone_serial_numbers() {
    let result = pattern(PatternKind::ContainerNumber).validate("ABC U 681304 0");

    assert!(result.is_valid());
    assert_eq!(
        datum(&result, "possible-transposition-error"),
        Some("ABC U 681034 0, ABC U 681340 0")
    );
    assert_eq!(
        info_text(&result, FieldKind::CheckDigit),
        vec![
            "Error-prone serial numbers:",
            "  ABC U 681034 0",
            "  ABC U 681340 0"
        ]
    );

    let check_digit = &result.outcomes[3];
    let highlighted: Vec<&str> = check_digit.info[1]
        .spans()
        .iter()
        .filter(|span| span.mark == Mark::Highlight)
        .map(|span| span.text.as_str())
        .collect();
    assert_eq!(highlighted, vec!["03"]);
}

#[test]
fn test_error_prone_serial_numbers_use_separators() {
    let separators = Separators {
        owner_equip: "***".to_string(),
        equip_serial: "+++".to_string(),
        serial_check: "‧‧‧".to_string(),
        ..Separators::default()
    };
    let fields = common::field_set_with(&separators);
    let result = fields.patterns(PatternKind::ContainerNumber)[0].validate("abc u 681304 0");

    assert_eq!(
        info_text(&result, FieldKind::CheckDigit),
        vec![
            "Error-prone serial numbers:",
            "  ABC***U+++681034‧‧‧0",
            "  ABC***U+++681340‧‧‧0"
        ]
    );
}

#[test]
fn test_check_digit_ten_is_discouraged() {
    let result = pattern(PatternKind::ContainerNumber).validate("NYK U 000000 0");

    assert!(result.is_valid());
    assert_eq!(datum(&result, "calculated-check-digit"), Some("10"));
    assert_eq!(
        info_text(&result, FieldKind::CheckDigit),
        vec![
            "It is not recommended to use a serial number",
            "that generates check digit 10 (0)."
        ]
    );
}

#[test]
fn test_check_digit_ten_warning_on_mismatch() {
    let result = pattern(PatternKind::ContainerNumber).validate("NYK U 000000 5");

    assert_eq!(
        result.error(),
        Some(&FieldError::CheckDigitMismatch { expected: 0 })
    );
    assert_eq!(info_text(&result, FieldKind::CheckDigit).len(), 2);
}

#[test]
fn test_owner_only_line_with_container_pattern() {
    let result = pattern(PatternKind::ContainerNumber).validate(" abc ");

    let messages: Vec<Option<String>> = result
        .outcomes
        .iter()
        .map(|outcome| outcome.error.as_ref().map(ToString::to_string))
        .collect();
    assert_eq!(
        messages,
        vec![
            None,
            Some("equipment category id is not U".to_string()),
            Some("serial number is not 6 numbers long".to_string()),
            Some("check digit is not calculable".to_string()),
        ]
    );
    assert_eq!(
        result.outcomes[3].error.as_ref().map(FieldError::kind),
        Some(ErrorKind::NotCalculable)
    );
}

#[test]
fn test_owner_errors() {
    let owner = pattern(PatternKind::Owner);

    let missing = owner.validate("12");
    assert_eq!(
        missing.error().map(ToString::to_string).as_deref(),
        Some("owner code is not 3 letters long (e.g. ABC)")
    );

    let unknown = owner.validate("xyz");
    let error = unknown.error().unwrap();
    assert_eq!(error.to_string(), "XYZ is not registered (e.g. ABC)");
    assert_eq!(error.kind(), ErrorKind::Lookup);
    assert_eq!(datum(&unknown, "owner-code"), None);
}

#[test]
fn test_size_and_type() {
    let result = pattern(PatternKind::SizeType).validate(" 20 g1 ");

    assert!(result.is_valid());
    assert_eq!(info_text(&result, FieldKind::Length), vec!["length: some-length"]);
    assert_eq!(
        info_text(&result, FieldKind::HeightWidth),
        vec!["height: some-height", "width:  some-width"]
    );
    assert_eq!(
        info_text(&result, FieldKind::Type),
        vec!["type:  some-type", "group: some-group"]
    );
    assert_eq!(datum(&result, "type-code"), Some("G1"));
}

#[test]
fn test_size_and_type_errors() {
    let size_type = pattern(PatternKind::SizeType);

    let result = size_type.validate(" abc ");
    let values: Vec<&str> = result.outcomes.iter().map(|o| o.value.as_str()).collect();
    assert_eq!(values, vec!["A", "B", ""]);
    assert_eq!(
        result.error().map(ToString::to_string).as_deref(),
        Some("type code is not a valid number or a valid character")
    );

    let result = size_type.validate("x0 xx");
    let messages: Vec<Option<String>> = result
        .outcomes
        .iter()
        .map(|outcome| outcome.error.as_ref().map(ToString::to_string))
        .collect();
    assert_eq!(
        messages,
        vec![
            Some("length code is not valid".to_string()),
            None,
            Some("type code is not valid".to_string()),
        ]
    );
}
