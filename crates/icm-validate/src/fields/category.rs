use std::sync::{Arc, LazyLock};

use icm_model::EquipmentCategoryLookup;
use regex::Regex;

use crate::error::{Choices, FieldError};
use crate::field::{Datum, Field, FieldKind, PreviousValues, Verdict};
use crate::text::Line;

static CATEGORY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[A-Za-z]").expect("Invalid equipment category regex"));

pub fn category_field(categories: Arc<dyn EquipmentCategoryLookup>) -> Field {
    Field::new(
        FieldKind::EquipmentCategory,
        1,
        CATEGORY_REGEX.clone(),
        move |value: &str, _: &PreviousValues| validate_category(categories.as_ref(), value),
    )
    .uppercase()
}

fn validate_category(categories: &dyn EquipmentCategoryLookup, value: &str) -> Verdict {
    let id = Datum::new("equipment-category-id").with_value(value);
    let description = Datum::new("equipment-category");

    let mut chars = value.chars();
    let found = match (chars.next(), chars.next()) {
        (Some(c), None) => categories.lookup_category(c),
        _ => None,
    };
    match found {
        Some(info) => Verdict::valid(vec![id, description.with_value(info.as_str())])
            .with_info(vec![Line::from(info)]),
        None => Verdict::invalid(
            vec![id, description],
            FieldError::UnknownCategory {
                allowed: Choices::new(categories.category_ids()),
            },
        ),
    }
}
