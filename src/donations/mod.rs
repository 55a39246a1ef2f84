// src/donations/mod.rs

pub mod cross_field;
pub mod currency;
pub mod engine;
pub mod messages;
pub mod models;
pub mod submission;
pub mod validators;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use cross_field::CrossFieldValidator;
pub use currency::CurrencyFormatter;
pub use engine::ValidationEngine;
pub use messages::{MessageCatalog, Violation};
pub use models::*;
pub use submission::{DonationService, InMemoryTransactionGateway, TransactionGateway};
