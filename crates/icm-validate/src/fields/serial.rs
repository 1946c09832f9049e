use std::sync::LazyLock;

use regex::Regex;

use crate::error::FieldError;
use crate::field::{Datum, Field, FieldKind, PreviousValues, Verdict};

static SERIAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[0-9]{6}").expect("Invalid serial number regex"));

pub fn serial_field() -> Field {
    Field::new(
        FieldKind::SerialNumber,
        6,
        SERIAL_REGEX.clone(),
        |value: &str, _: &PreviousValues| {
            let serial = Datum::new("serial-number");
            if value.is_empty() {
                return Verdict::invalid(vec![serial], FieldError::SerialFormat);
            }
            Verdict::valid(vec![serial.with_value(value)])
        },
    )
}
