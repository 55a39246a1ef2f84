// src/donations/models.rs

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Form Models
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Flip,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Flip => "Flip",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Snapshot of the donation form as the UI holds it.
/// Every text field is kept exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DonationForm {
    pub nominal: String,
    pub payment_method: Option<PaymentMethod>,
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
}

// ============================================================================
// Submission Models
// ============================================================================

/// Normalised payload handed to the payment gateway once the form passes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DonationRequest {
    pub amount: u64,
    pub payment_method: PaymentMethod,
    pub full_name: String,
    pub phone_number: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedTransaction {
    pub id: u64,
    pub payment_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaymentInstructions {
    pub transaction_id: u64,
    pub amount: u64,
    pub amount_display: String,
    pub payment_method: PaymentMethod,
    pub instructions_path: String,
    pub payment_link_label: String,
    pub payment_url: String,
    pub created_at: String,
}
