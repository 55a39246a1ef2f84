// Common validation types and traits

use serde::{Deserialize, Serialize};
use std::fmt;

/// Named inputs of the donation form, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    Nominal,
    PaymentMethod,
    FullName,
    PhoneNumber,
    Email,
}

impl FieldId {
    pub const ALL: [FieldId; 5] = [
        FieldId::Nominal,
        FieldId::PaymentMethod,
        FieldId::FullName,
        FieldId::PhoneNumber,
        FieldId::Email,
    ];

    /// Input name as rendered in the form markup
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::Nominal => "nominal",
            FieldId::PaymentMethod => "payment_method",
            FieldId::FullName => "full_name",
            FieldId::PhoneNumber => "phone_number",
            FieldId::Email => "email",
        }
    }

    pub fn parse(name: &str) -> Option<FieldId> {
        FieldId::ALL.into_iter().find(|f| f.as_str() == name)
    }

    fn position(&self) -> usize {
        FieldId::ALL
            .iter()
            .position(|f| f == self)
            .unwrap_or(FieldId::ALL.len())
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a field failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Required,
    Format,
    Range,
    CrossField,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: FieldId,
    pub kind: ErrorKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<FieldError>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    pub fn from_errors(errors: Vec<FieldError>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    pub fn add_error(&mut self, field: FieldId, kind: ErrorKind, message: impl Into<String>) {
        self.is_valid = false;
        self.errors.push(FieldError {
            field,
            kind,
            message: message.into(),
        });
    }

    pub fn merge(&mut self, other: ValidationResult) {
        if !other.is_valid {
            self.is_valid = false;
            self.errors.extend(other.errors);
        }
    }

    /// Fields that should carry the "invalid" accessibility flag
    pub fn invalid_fields(&self) -> Vec<FieldId> {
        let mut fields: Vec<FieldId> = Vec::new();
        for error in &self.errors {
            if !fields.contains(&error.field) {
                fields.push(error.field);
            }
        }
        fields.sort_by_key(FieldId::position);
        fields
    }

    pub fn errors_for(&self, field: FieldId) -> impl Iterator<Item = &FieldError> {
        self.errors.iter().filter(move |e| e.field == field)
    }

    pub fn messages_for(&self, field: FieldId) -> Vec<&str> {
        self.errors_for(field).map(|e| e.message.as_str()).collect()
    }
}

pub trait Validator<T> {
    fn validate(&self, data: &T) -> ValidationResult;
}
