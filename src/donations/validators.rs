// src/donations/validators.rs

use regex::Regex;
use std::sync::OnceLock;
use tracing::error;

use super::currency::CurrencyFormatter;
use super::messages::Violation;
use super::models::{DonationForm, PaymentMethod};
use crate::common::{EngineConfig, FieldId};

// ============================================================================
// Rule Tables
// ============================================================================

/// One entry of a field's ordered rule list.
/// `fails` returns true when `value` breaks the rule.
pub struct FieldRule {
    pub violation: Violation,
    pub fails: fn(&str, &EngineConfig) -> bool,
}

pub const NOMINAL_RULES: &[FieldRule] = &[
    FieldRule {
        violation: Violation::NominalRequired,
        fails: |value, _| value.trim().is_empty(),
    },
    FieldRule {
        violation: Violation::NominalNotNumeric,
        fails: |value, _| !is_all_digits(value.trim()),
    },
    FieldRule {
        violation: Violation::NominalBelowMinimum,
        fails: |value, config| CurrencyFormatter::parse(value.trim()) < config.min_nominal,
    },
];

pub const FULL_NAME_RULES: &[FieldRule] = &[
    FieldRule {
        violation: Violation::FullNameRequired,
        fails: |value, _| value.trim().is_empty(),
    },
    FieldRule {
        violation: Violation::FullNameLeadingWhitespace,
        fails: |value, _| value.starts_with(char::is_whitespace),
    },
    FieldRule {
        violation: Violation::FullNameNumeric,
        fails: |value, _| is_all_digits(value.trim()),
    },
];

// Optional contact fields: only evaluated when non-empty after trimming
pub const PHONE_NUMBER_RULES: &[FieldRule] = &[
    FieldRule {
        violation: Violation::PhoneNotNumeric,
        fails: |value, _| !is_all_digits(value),
    },
    FieldRule {
        violation: Violation::PhoneMissingCountryCode,
        fails: |value, config| !value.starts_with(config.phone_country_code.as_str()),
    },
    FieldRule {
        violation: Violation::PhoneLength,
        fails: |value, config| !config.phone_digits().contains(&value.len()),
    },
];

pub const EMAIL_RULES: &[FieldRule] = &[
    FieldRule {
        violation: Violation::EmailMissingAt,
        fails: |value, _| !value.contains('@'),
    },
    FieldRule {
        violation: Violation::EmailMalformed,
        fails: |value, _| !is_valid_email(value),
    },
];

/// First failing rule wins; later rules are not evaluated
pub fn first_violation(
    rules: &[FieldRule],
    value: &str,
    config: &EngineConfig,
) -> Option<Violation> {
    rules
        .iter()
        .find(|rule| (rule.fails)(value, config))
        .map(|rule| rule.violation)
}

// ============================================================================
// Field Validators
// ============================================================================

pub fn validate_nominal(value: &str, config: &EngineConfig) -> Option<Violation> {
    first_violation(NOMINAL_RULES, value, config)
}

pub fn validate_payment_method(value: Option<PaymentMethod>) -> Option<Violation> {
    match value {
        Some(_) => None,
        None => Some(Violation::PaymentMethodRequired),
    }
}

pub fn validate_full_name(value: &str, config: &EngineConfig) -> Option<Violation> {
    first_violation(FULL_NAME_RULES, value, config)
}

pub fn validate_phone_number(value: &str, config: &EngineConfig) -> Option<Violation> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    first_violation(PHONE_NUMBER_RULES, value, config)
}

pub fn validate_email(value: &str, config: &EngineConfig) -> Option<Violation> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    first_violation(EMAIL_RULES, value, config)
}

/// Runs the independent rules of a single field
pub fn validate_field_rules(
    form: &DonationForm,
    field: FieldId,
    config: &EngineConfig,
) -> Option<Violation> {
    match field {
        FieldId::Nominal => validate_nominal(&form.nominal, config),
        FieldId::PaymentMethod => validate_payment_method(form.payment_method),
        FieldId::FullName => validate_full_name(&form.full_name, config),
        FieldId::PhoneNumber => validate_phone_number(&form.phone_number, config),
        FieldId::Email => validate_email(&form.email, config),
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

// WHATWG `type=email` grammar with at least one dot in the domain
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$";

fn email_regex() -> Option<&'static Regex> {
    static EMAIL_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL_REGEX
        .get_or_init(|| match Regex::new(EMAIL_PATTERN) {
            Ok(regex) => Some(regex),
            Err(e) => {
                error!(error = %e, "Failed to compile email pattern");
                None
            }
        })
        .as_ref()
}

pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_some_and(|regex| regex.is_match(value))
}

pub fn is_all_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}
