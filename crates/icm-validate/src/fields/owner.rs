use std::sync::{Arc, LazyLock};

use icm_model::OwnerLookup;
use regex::Regex;

use crate::error::{Example, FieldError};
use crate::field::{Datum, Field, FieldKind, PreviousValues, Verdict};
use crate::text::Line;

static OWNER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[A-Za-z]{3}").expect("Invalid owner code regex"));

pub fn owner_field(owners: Arc<dyn OwnerLookup>) -> Field {
    Field::new(
        FieldKind::Owner,
        3,
        OWNER_REGEX.clone(),
        move |value: &str, _: &PreviousValues| validate_owner(owners.as_ref(), value),
    )
    .uppercase()
}

fn validate_owner(owners: &dyn OwnerLookup, value: &str) -> Verdict {
    let code = Datum::new("owner-code");
    let company = Datum::new("company");
    let city = Datum::new("city");
    let country = Datum::new("country");
    let example = Example(owners.example_owner_code());

    if value.is_empty() {
        return Verdict::invalid(
            vec![code, company, city, country],
            FieldError::OwnerFormat { example },
        );
    }
    let Some(owner) = owners.lookup_owner(value) else {
        return Verdict::invalid(
            vec![code, company, city, country],
            FieldError::OwnerUnregistered {
                code: value.to_string(),
                example,
            },
        );
    };
    Verdict::valid(vec![
        code.with_value(owner.code.as_str()),
        company.with_value(owner.company.as_str()),
        city.with_value(owner.city.as_str()),
        country.with_value(owner.country.as_str()),
    ])
    .with_info(vec![
        Line::from(owner.company),
        Line::from(owner.city),
        Line::from(owner.country),
    ])
}
