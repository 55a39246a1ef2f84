// src/lib.rs
//! Validation rules for the Zakat Maal donation form and the gate in
//! front of the payment hand-off.

pub mod common;
pub mod donations;

pub use common::{DonationError, EngineConfig, ErrorKind, FieldError, FieldId, ValidationResult};
pub use donations::{CurrencyFormatter, DonationForm, DonationService, ValidationEngine};
