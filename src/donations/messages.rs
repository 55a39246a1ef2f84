// src/donations/messages.rs

use crate::common::{EngineConfig, ErrorKind, FieldId};

use super::currency::CurrencyFormatter;

/// Every rule the engine can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    NominalRequired,
    NominalNotNumeric,
    NominalBelowMinimum,
    PaymentMethodRequired,
    FullNameRequired,
    FullNameLeadingWhitespace,
    FullNameNumeric,
    PhoneNotNumeric,
    PhoneMissingCountryCode,
    PhoneLength,
    EmailMissingAt,
    EmailMalformed,
    ContactRequired,
}

impl Violation {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Violation::NominalRequired
            | Violation::PaymentMethodRequired
            | Violation::FullNameRequired => ErrorKind::Required,
            Violation::NominalNotNumeric
            | Violation::FullNameLeadingWhitespace
            | Violation::FullNameNumeric
            | Violation::PhoneNotNumeric
            | Violation::PhoneMissingCountryCode
            | Violation::EmailMissingAt
            | Violation::EmailMalformed => ErrorKind::Format,
            Violation::NominalBelowMinimum | Violation::PhoneLength => ErrorKind::Range,
            Violation::ContactRequired => ErrorKind::CrossField,
        }
    }

    /// Owning field; `None` for rules that span several fields
    pub fn field(&self) -> Option<FieldId> {
        match self {
            Violation::NominalRequired
            | Violation::NominalNotNumeric
            | Violation::NominalBelowMinimum => Some(FieldId::Nominal),
            Violation::PaymentMethodRequired => Some(FieldId::PaymentMethod),
            Violation::FullNameRequired
            | Violation::FullNameLeadingWhitespace
            | Violation::FullNameNumeric => Some(FieldId::FullName),
            Violation::PhoneNotNumeric
            | Violation::PhoneMissingCountryCode
            | Violation::PhoneLength => Some(FieldId::PhoneNumber),
            Violation::EmailMissingAt | Violation::EmailMalformed => Some(FieldId::Email),
            Violation::ContactRequired => None,
        }
    }
}

/// User-facing strings for each violation
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    min_nominal: String,
    phone_length: String,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl MessageCatalog {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            min_nominal: format!(
                "Minimal donasi {}",
                CurrencyFormatter::format_amount(config.min_nominal)
            ),
            phone_length: format!(
                "Nomor HP harus {}-{} digit",
                config.phone_min_digits, config.phone_max_digits
            ),
        }
    }

    pub fn message(&self, violation: Violation) -> &str {
        match violation {
            Violation::NominalRequired => "Nominal wajib diisi",
            Violation::NominalNotNumeric => "Nominal harus berupa angka",
            Violation::NominalBelowMinimum => &self.min_nominal,
            Violation::PaymentMethodRequired => "Invalid input",
            Violation::FullNameRequired => "Nama lengkap wajib diisi",
            Violation::FullNameLeadingWhitespace => "Nama lengkap tidak boleh diawali spasi",
            Violation::FullNameNumeric => "Nama lengkap tidak boleh hanya angka",
            Violation::PhoneNotNumeric | Violation::PhoneMissingCountryCode => {
                "Nomor HP harus diawali kode negara"
            }
            Violation::PhoneLength => &self.phone_length,
            // Browser-native constraint validation wording
            Violation::EmailMissingAt => "Please include an '@' in the email address.",
            Violation::EmailMalformed => "Please match the requested format.",
            Violation::ContactRequired => "Isi salah satu: Email atau WhatsApp",
        }
    }
}
