use std::sync::LazyLock;

use regex::Regex;

use crate::{
    consts::consts::{
        CITY_MAX_LENGTH, EMAIL_ADDRESS_MAX_LENGTH, NAME_MAX_LENGTH, STATE_MAX_LENGTH,
        STREET_ADDRESS_MAX_LENGTH, ZIP_CODE_MAX_LENGTH,
    },
    model::person::Person,
};

use super::Validator;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?)*$",
    )
    .expect("static regex should not panic")
});

/// A single constraint: when `check` fails, `message` is reported
struct Rule {
    check: fn(&Person) -> bool,
    message: &'static str,
}

fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

fn fits(value: &str, max: usize) -> bool {
    value.chars().count() <= max
}

/// Blank emails are reported by the required rule only. Padding around a
/// present address is stored as submitted, so it must fail the pattern.
fn is_email_or_blank(value: &str) -> bool {
    !is_present(value) || EMAIL_REGEX.is_match(value)
}

const PERSON_RULES: &[Rule] = &[
    Rule {
        check: |p| is_present(&p.first_name),
        message: "First Name is required.",
    },
    Rule {
        check: |p| fits(&p.first_name, NAME_MAX_LENGTH),
        message: "First Name must be at most 50 characters.",
    },
    Rule {
        check: |p| is_present(&p.last_name),
        message: "Last Name is required.",
    },
    Rule {
        check: |p| fits(&p.last_name, NAME_MAX_LENGTH),
        message: "Last Name must be at most 50 characters.",
    },
    Rule {
        check: |p| is_present(&p.email_address),
        message: "Email Address is required.",
    },
    Rule {
        check: |p| is_email_or_blank(&p.email_address),
        message: "Email Address is not a valid email address.",
    },
    Rule {
        check: |p| fits(&p.email_address, EMAIL_ADDRESS_MAX_LENGTH),
        message: "Email Address must be at most 50 characters.",
    },
    Rule {
        check: |p| fits(&p.street_address, STREET_ADDRESS_MAX_LENGTH),
        message: "Street Address must be at most 100 characters.",
    },
    Rule {
        check: |p| fits(&p.city, CITY_MAX_LENGTH),
        message: "City must be at most 50 characters.",
    },
    Rule {
        check: |p| fits(&p.state, STATE_MAX_LENGTH),
        message: "State must be at most 2 characters.",
    },
    Rule {
        check: |p| fits(&p.zip_code, ZIP_CODE_MAX_LENGTH),
        message: "Zip Code must be at most 5 characters.",
    },
];

#[derive(Debug, Clone, Copy, Default)]
pub struct PersonValidator;

impl PersonValidator {
    pub fn new() -> Self {
        PersonValidator
    }
}

impl Validator<Person> for PersonValidator {
    fn validate(&self, person: &Person) -> Vec<String> {
        let mut errors: Vec<String> = PERSON_RULES
            .iter()
            .filter(|rule| !(rule.check)(person))
            .map(|rule| rule.message.to_string())
            .collect();

        // Sorted so the output does not depend on rule order
        errors.sort();

        errors
    }
}
