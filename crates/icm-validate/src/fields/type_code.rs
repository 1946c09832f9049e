use std::sync::{Arc, LazyLock};

use icm_model::TypeLookup;
use regex::Regex;

use crate::error::FieldError;
use crate::field::{Datum, Field, FieldKind, PreviousValues, Verdict};
use crate::text::Line;

static TYPE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[A-Za-z0-9]{2}").expect("Invalid type code regex"));

pub fn type_field(types: Arc<dyn TypeLookup>) -> Field {
    Field::new(
        FieldKind::Type,
        2,
        TYPE_REGEX.clone(),
        move |value: &str, _: &PreviousValues| {
            let code = Datum::new("type-code").with_value(value);
            let type_info = Datum::new("type-description");
            let group_info = Datum::new("group-description");
            if value.is_empty() {
                return Verdict::invalid(
                    vec![code, type_info, group_info],
                    FieldError::CodeFormat {
                        name: FieldKind::Type.label(),
                    },
                );
            }
            match types.lookup_type(value) {
                Some(found) => Verdict::valid(vec![
                    code,
                    type_info.with_value(found.type_info.as_str()),
                    group_info.with_value(found.group_info.as_str()),
                ])
                .with_info(vec![
                    Line::from(format!("type:  {}", found.type_info)),
                    Line::from(format!("group: {}", found.group_info)),
                ]),
                None => Verdict::invalid(
                    vec![code, type_info, group_info],
                    FieldError::UnknownCode {
                        name: FieldKind::Type.label(),
                    },
                ),
            }
        },
    )
    .uppercase()
}
