// src/donations/engine.rs

use tracing::debug;

use super::cross_field::CrossFieldValidator;
use super::currency::CurrencyFormatter;
use super::messages::{MessageCatalog, Violation};
use super::models::{DonationForm, DonationRequest};
use super::validators::validate_field_rules;
use crate::common::{EngineConfig, FieldError, FieldId, ValidationResult, Validator};

/// Orchestrates field and cross-field rules over a form snapshot
#[derive(Debug, Clone)]
pub struct ValidationEngine {
    config: EngineConfig,
    catalog: MessageCatalog,
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl ValidationEngine {
    pub fn new(config: EngineConfig) -> Self {
        let catalog = MessageCatalog::new(&config);
        Self { config, catalog }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Live validation for a single input change.
    ///
    /// For the phone number and email inputs the cross-field rule is
    /// re-evaluated too, and its errors are returned for both contact
    /// fields so the complementary input stays in sync.
    pub fn validate_field(&self, form: &DonationForm, field: FieldId) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if let Some(violation) = validate_field_rules(form, field, &self.config) {
            errors.push(self.field_error(field, violation));
        }

        if CrossFieldValidator::is_contact_field(field) {
            errors.extend(
                CrossFieldValidator::check(form)
                    .into_iter()
                    .map(|(flagged, violation)| self.field_error(flagged, violation)),
            );
        }

        debug!(field = %field, errors = errors.len(), "Validated field");
        errors
    }

    /// Runs every rule; errors follow field declaration order
    pub fn validate_all(&self, form: &DonationForm) -> ValidationResult {
        let mut result = ValidationResult::new();
        for field in FieldId::ALL {
            if let Some(violation) = validate_field_rules(form, field, &self.config) {
                self.add(&mut result, field, violation);
            }
        }

        // Contact fields only carry their own errors when non-empty, and the
        // cross-field rule only fires when both are empty, so appending keeps
        // declaration order.
        let mut cross_field = ValidationResult::new();
        for (field, violation) in CrossFieldValidator::check(form) {
            self.add(&mut cross_field, field, violation);
        }
        result.merge(cross_field);

        debug!(
            is_valid = result.is_valid,
            errors = result.errors.len(),
            invalid_fields = ?result.invalid_fields(),
            "Validated donation form"
        );
        result
    }

    pub fn can_submit(&self, form: &DonationForm) -> bool {
        self.validate_all(form).is_valid
    }

    /// Validates `form` and, if it passes, returns the normalised payload
    /// for the payment gateway
    pub fn prepare_request(
        &self,
        form: &DonationForm,
    ) -> Result<DonationRequest, ValidationResult> {
        let result = self.validate_all(form);
        match form.payment_method {
            Some(payment_method) if result.is_valid => Ok(DonationRequest {
                amount: CurrencyFormatter::parse(form.nominal.trim()),
                payment_method,
                full_name: form.full_name.trim().to_string(),
                phone_number: non_empty(&form.phone_number),
                email: non_empty(&form.email),
            }),
            _ => Err(result),
        }
    }

    fn field_error(&self, field: FieldId, violation: Violation) -> FieldError {
        debug_assert!(
            violation.field().map_or(true, |owner| owner == field),
            "{:?} reported on {}",
            violation,
            field
        );
        FieldError {
            field,
            kind: violation.kind(),
            message: self.catalog.message(violation).to_string(),
        }
    }

    fn add(&self, result: &mut ValidationResult, field: FieldId, violation: Violation) {
        let error = self.field_error(field, violation);
        result.add_error(error.field, error.kind, error.message);
    }
}

impl Validator<DonationForm> for ValidationEngine {
    fn validate(&self, data: &DonationForm) -> ValidationResult {
        self.validate_all(data)
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
