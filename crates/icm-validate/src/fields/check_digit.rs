use std::sync::LazyLock;

use icm_model::{
    CHECK_DIGIT_POSITION, ContainerNumber, EquipmentCategoryId, OwnerCode, SerialNumber,
    Separators, Transposition, checksum, detect_transposition,
};
use regex::Regex;

use crate::error::FieldError;
use crate::field::{Datum, Field, FieldKind, PreviousValues, Verdict};
use crate::text::Line;

static CHECK_DIGIT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[0-9]").expect("Invalid check digit regex"));

/// Combined length of owner code, category id and serial number.
const CALCULABLE_LENGTH: usize = 10;

/// The check digit field; it reads owner, category and serial number from
/// the three values preceding it.
pub fn check_digit_field(separators: Separators) -> Field {
    Field::new(
        FieldKind::CheckDigit,
        1,
        CHECK_DIGIT_REGEX.clone(),
        move |value: &str, previous: &PreviousValues| {
            validate_check_digit(&separators, value, previous)
        },
    )
}

fn validate_check_digit(separators: &Separators, value: &str, previous: &PreviousValues) -> Verdict {
    let check_digit = Datum::new("check-digit").with_value(value);
    let calculated = Datum::new("calculated-check-digit");
    let valid = Datum::new("valid-check-digit");
    let transpositions = Datum::new("possible-transposition-error");

    let Some(number) = preceding_number(previous) else {
        return Verdict::invalid(
            vec![
                check_digit,
                calculated,
                valid.with_value("false"),
                transpositions,
            ],
            FieldError::CheckDigitNotCalculable,
        );
    };
    let raw = number.raw_check_digit();
    let calculated = calculated.with_value(raw.to_string());

    let mut info = Vec::new();
    if raw == 10 {
        info.push(
            Line::new()
                .plain("It is not recommended to use a ")
                .emphasis("serial number"),
        );
        info.push(
            Line::new()
                .plain("that generates ")
                .emphasis("check digit")
                .plain(" ")
                .caution("10")
                .plain(" (0)."),
        );
    }

    let given = match value.parse::<u8>() {
        Ok(digit) if value.len() == 1 => digit,
        _ => {
            return Verdict::invalid(
                vec![check_digit, calculated, valid.with_value("false"), transpositions],
                FieldError::CheckDigitNotANumber { calculated: raw },
            )
            .with_info(info);
        }
    };
    if given != number.check_digit() {
        return Verdict::invalid(
            vec![check_digit, calculated, valid.with_value("false"), transpositions],
            FieldError::CheckDigitMismatch {
                expected: number.check_digit(),
            },
        )
        .with_info(info);
    }

    let found = detect_transposition(&number.owner, number.category, number.serial, raw);
    let mut transpositions = transpositions;
    if !found.is_empty() {
        info.push(Line::from("Error-prone serial numbers:"));
        let lines: Vec<Line> = found
            .iter()
            .map(|found| transposition_line(found, separators))
            .collect();
        let joined = lines
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        info.extend(lines.into_iter().map(|line| Line::from("  ").append(line)));
        transpositions = transpositions.with_value(joined);
    }
    Verdict::valid(vec![
        check_digit,
        calculated,
        valid.with_value("true"),
        transpositions,
    ])
    .with_info(info)
}

/// Owner code, category id and serial number preceding the check digit,
/// if all three are well formed.
fn preceding_number(previous: &PreviousValues) -> Option<ContainerNumber> {
    let [owner, category, serial] = previous.recent(3)? else {
        return None;
    };
    if owner.len() + category.len() + serial.len() != CALCULABLE_LENGTH {
        return None;
    }
    let owner = OwnerCode::new(owner).ok()?;
    let mut chars = category.chars();
    let category = match (chars.next(), chars.next()) {
        (Some(c), None) => EquipmentCategoryId::new(c).ok()?,
        _ => return None,
    };
    let serial = SerialNumber::parse(serial).ok()?;
    Some(ContainerNumber::new(owner, category, serial))
}

/// Render an alternative number with its swapped digits highlighted.
fn transposition_line(found: &Transposition, separators: &Separators) -> Line {
    let number = &found.number;
    let serial = number.serial.to_string();
    let position = usize::from(found.position);
    let swapped = if found.position == CHECK_DIGIT_POSITION {
        position..position + 1
    } else {
        position..position + 2
    };

    let mut line = Line::new()
        .plain(number.owner.as_str())
        .plain(separators.owner_equip.as_str())
        .plain(number.category.to_string())
        .plain(separators.equip_serial.as_str())
        .plain(&serial[..swapped.start])
        .highlight(&serial[swapped.clone()])
        .plain(&serial[swapped.end..])
        .plain(separators.serial_check.as_str());
    let digit = number.check_digit().to_string();
    line = if found.position == CHECK_DIGIT_POSITION {
        line.highlight(digit)
    } else {
        line.plain(digit)
    };
    line
}
