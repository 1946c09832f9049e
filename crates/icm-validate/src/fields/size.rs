use std::sync::{Arc, LazyLock};

use icm_model::SizeLookup;
use regex::Regex;

use crate::error::FieldError;
use crate::field::{Datum, Field, FieldKind, PreviousValues, Verdict};
use crate::text::Line;

static SIZE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[A-Za-z0-9]").expect("Invalid size code regex"));

pub fn length_field(sizes: Arc<dyn SizeLookup>) -> Field {
    Field::new(
        FieldKind::Length,
        1,
        SIZE_REGEX.clone(),
        move |value: &str, _: &PreviousValues| {
            let code = Datum::new("length-code").with_value(value);
            let description = Datum::new("length-description");
            if value.is_empty() {
                return Verdict::invalid(
                    vec![code, description],
                    FieldError::CodeFormat {
                        name: FieldKind::Length.label(),
                    },
                );
            }
            match sizes.lookup_length(value) {
                Some(length) => Verdict::valid(vec![code, description.with_value(length.as_str())])
                    .with_info(vec![Line::from(format!("length: {length}"))]),
                None => Verdict::invalid(
                    vec![code, description],
                    FieldError::UnknownCode {
                        name: FieldKind::Length.label(),
                    },
                ),
            }
        },
    )
    .uppercase()
}

pub fn height_width_field(sizes: Arc<dyn SizeLookup>) -> Field {
    Field::new(
        FieldKind::HeightWidth,
        1,
        SIZE_REGEX.clone(),
        move |value: &str, _: &PreviousValues| {
            let code = Datum::new("height-width-code").with_value(value);
            let height = Datum::new("height-description");
            let width = Datum::new("width-description");
            if value.is_empty() {
                return Verdict::invalid(
                    vec![code, height, width],
                    FieldError::CodeFormat {
                        name: FieldKind::HeightWidth.label(),
                    },
                );
            }
            match sizes.lookup_height_width(value) {
                Some(found) => Verdict::valid(vec![
                    code,
                    height.with_value(found.height.as_str()),
                    width.with_value(found.width.as_str()),
                ])
                .with_info(vec![
                    Line::from(format!("height: {}", found.height)),
                    Line::from(format!("width:  {}", found.width)),
                ]),
                None => Verdict::invalid(
                    vec![code, height, width],
                    FieldError::UnknownCode {
                        name: FieldKind::HeightWidth.label(),
                    },
                ),
            }
        },
    )
    .uppercase()
}
