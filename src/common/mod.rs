// Common module - shared types and utilities across all modules

pub mod config;
pub mod error;
pub mod helpers;
pub mod validation;

// Re-export commonly used types for convenience
pub use config::EngineConfig;
pub use error::DonationError;
pub use helpers::{safe_email_log, safe_phone_log};
pub use validation::{ErrorKind, FieldError, FieldId, ValidationResult, Validator};
