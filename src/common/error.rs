// Error types for the donation flow

use thiserror::Error;

use super::validation::ValidationResult;

/// Donation flow error types
///
/// Field-level rule violations are never errors on their own; they only
/// become one when a caller tries to submit a form that did not pass.
#[derive(Debug, Error)]
pub enum DonationError {
    #[error("Validation Error: {}", summarize(.0))]
    Validation(ValidationResult),

    #[error("Payment gateway error: {0}")]
    Gateway(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl DonationError {
    /// The rejected validation result, if this error came from the gate
    pub fn validation_result(&self) -> Option<&ValidationResult> {
        match self {
            DonationError::Validation(result) => Some(result),
            _ => None,
        }
    }
}

fn summarize(result: &ValidationResult) -> String {
    let error_messages: Vec<String> = result
        .errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect();
    error_messages.join(", ")
}

/// Helper conversion from a failed ValidationResult
impl From<ValidationResult> for DonationError {
    fn from(result: ValidationResult) -> Self {
        DonationError::Validation(result)
    }
}
