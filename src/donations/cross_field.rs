// src/donations/cross_field.rs

use super::messages::Violation;
use super::models::DonationForm;
use crate::common::FieldId;

/// Fields that must not both be left empty
pub const CONTACT_FIELDS: [FieldId; 2] = [FieldId::PhoneNumber, FieldId::Email];

/// "At least one of WhatsApp number or email" rule.
///
/// Recomputed from every snapshot; it holds no state between calls.
pub struct CrossFieldValidator;

impl CrossFieldValidator {
    pub fn is_contact_field(field: FieldId) -> bool {
        CONTACT_FIELDS.contains(&field)
    }

    /// Fields to flag with [`Violation::ContactRequired`]; empty when the rule holds
    pub fn check(form: &DonationForm) -> Vec<(FieldId, Violation)> {
        let phone_empty = form.phone_number.trim().is_empty();
        let email_empty = form.email.trim().is_empty();

        if phone_empty && email_empty {
            CONTACT_FIELDS
                .iter()
                .map(|field| (*field, Violation::ContactRequired))
                .collect()
        } else {
            Vec::new()
        }
    }
}
