//! Tests for donations module
//!
//! These tests drive the validation engine the way the donation page does:
//! - Live per-field validation on input change
//! - Full validation and the submit gate
//! - Hand-off to the payment gateway after a successful submit

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::common::{
        DonationError, EngineConfig, ErrorKind, FieldId, ValidationResult, Validator,
    };
    use std::sync::Arc;

    const CONTACT_MESSAGE: &str = "Isi salah satu: Email atau WhatsApp";

    fn valid_form() -> DonationForm {
        DonationForm {
            nominal: "100000".to_string(),
            payment_method: Some(PaymentMethod::Flip),
            full_name: "Fulanah".to_string(),
            phone_number: "628123456789".to_string(),
            email: "fulanah@example.com".to_string(),
        }
    }

    fn base_form() -> DonationForm {
        DonationForm {
            nominal: "10000".to_string(),
            payment_method: Some(PaymentMethod::Flip),
            full_name: "Fulanah".to_string(),
            ..DonationForm::default()
        }
    }

    fn engine() -> ValidationEngine {
        ValidationEngine::default()
    }

    fn count_message(result: &ValidationResult, message: &str) -> usize {
        result.errors.iter().filter(|e| e.message == message).count()
    }

    // ============================================================================
    // Full Validation
    // ============================================================================

    #[test]
    fn test_complete_form_is_valid() {
        let result = engine().validate_all(&valid_form());

        assert!(result.is_valid, "Complete form should pass: {:?}", result.errors);
        assert!(result.errors.is_empty());
        assert!(engine().can_submit(&valid_form()));
    }

    #[test]
    fn test_empty_form_reports_every_rule_in_field_order() {
        let result = engine().validate_all(&DonationForm::default());

        let fields: Vec<FieldId> = result.errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                FieldId::Nominal,
                FieldId::PaymentMethod,
                FieldId::FullName,
                FieldId::PhoneNumber,
                FieldId::Email,
            ]
        );
        assert!(!result.is_valid);
        assert_eq!(result.messages_for(FieldId::Nominal), vec!["Nominal wajib diisi"]);
        assert_eq!(result.messages_for(FieldId::PaymentMethod), vec!["Invalid input"]);
        assert_eq!(
            result.messages_for(FieldId::FullName),
            vec!["Nama lengkap wajib diisi"]
        );
    }

    #[test]
    fn test_nominal_below_minimum_is_range_error() {
        let form = DonationForm {
            nominal: "9999".to_string(),
            ..valid_form()
        };
        let result = engine().validate_all(&form);

        let error = result.errors_for(FieldId::Nominal).next().unwrap();
        assert_eq!(error.kind, ErrorKind::Range);
        assert_eq!(error.message, "Minimal donasi Rp 10.000");
        assert!(!engine().can_submit(&form));
    }

    #[test]
    fn test_empty_nominal_is_required_not_range() {
        let form = DonationForm {
            nominal: String::new(),
            ..valid_form()
        };
        let result = engine().validate_all(&form);

        let kinds: Vec<ErrorKind> = result.errors_for(FieldId::Nominal).map(|e| e.kind).collect();
        assert_eq!(kinds, vec![ErrorKind::Required]);
    }

    #[test]
    fn test_mixed_nominal_is_format_error() {
        let form = DonationForm {
            nominal: "10a00".to_string(),
            ..valid_form()
        };
        let result = engine().validate_all(&form);

        let error = result.errors_for(FieldId::Nominal).next().unwrap();
        assert_eq!(error.kind, ErrorKind::Format);
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn test_missing_payment_method_blocks_submit() {
        let form = DonationForm {
            payment_method: None,
            ..valid_form()
        };
        let result = engine().validate_all(&form);

        assert!(!engine().can_submit(&form));
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].field, FieldId::PaymentMethod);
        assert_eq!(result.errors[0].kind, ErrorKind::Required);
        assert_eq!(result.errors[0].message, "Invalid input");
    }

    #[test]
    fn test_invalid_full_names_flag_field() {
        for (name, kind) in [
            ("", ErrorKind::Required),
            (" ", ErrorKind::Required),
            ("123", ErrorKind::Format),
            (" Fulanah", ErrorKind::Format),
        ] {
            let form = DonationForm {
                full_name: name.to_string(),
                ..valid_form()
            };
            let result = engine().validate_all(&form);

            assert_eq!(result.invalid_fields(), vec![FieldId::FullName], "{name:?}");
            assert_eq!(result.errors[0].kind, kind, "{name:?}");
        }
    }

    // ============================================================================
    // Contact Rules
    // ============================================================================

    #[test]
    fn test_missing_contact_flags_both_fields_once() {
        let result = engine().validate_all(&base_form());

        assert_eq!(count_message(&result, CONTACT_MESSAGE), 2);
        assert_eq!(
            result.invalid_fields(),
            vec![FieldId::PhoneNumber, FieldId::Email]
        );
        assert!(result
            .errors
            .iter()
            .all(|e| e.kind == ErrorKind::CrossField));
    }

    #[test]
    fn test_phone_only_can_submit() {
        let form = DonationForm {
            phone_number: "628123456789".to_string(),
            ..base_form()
        };
        assert!(engine().can_submit(&form));
    }

    #[test]
    fn test_email_only_can_submit() {
        let form = DonationForm {
            email: "fulanah@example.com".to_string(),
            ..base_form()
        };
        assert!(engine().can_submit(&form));
    }

    #[test]
    fn test_phone_without_country_code() {
        for phone in ["08123456789", "abc"] {
            let form = DonationForm {
                phone_number: phone.to_string(),
                ..base_form()
            };
            let result = engine().validate_all(&form);

            assert_eq!(result.errors.len(), 1, "{phone:?}");
            assert_eq!(result.errors[0].kind, ErrorKind::Format);
            assert!(result.errors[0]
                .message
                .contains("Nomor HP harus diawali kode negara"));
            assert_eq!(count_message(&result, CONTACT_MESSAGE), 0);
        }
    }

    #[test]
    fn test_short_phone_is_range_error() {
        let form = DonationForm {
            phone_number: "6281234".to_string(),
            ..base_form()
        };
        let result = engine().validate_all(&form);

        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].kind, ErrorKind::Range);
        assert!(result.errors[0].message.contains("8-15 digit"));
    }

    #[test]
    fn test_malformed_email_has_browser_message() {
        for email in ["fulanah", "fulanah@example"] {
            let form = DonationForm {
                email: email.to_string(),
                ..base_form()
            };
            let result = engine().validate_all(&form);

            assert_eq!(result.invalid_fields(), vec![FieldId::Email], "{email:?}");
            assert_eq!(result.errors[0].kind, ErrorKind::Format);
            assert!(!result.errors[0].message.is_empty());
        }
    }

    #[test]
    fn test_invalid_phone_with_valid_email_still_fails() {
        let form = DonationForm {
            phone_number: "08123456789".to_string(),
            email: "fulanah@example.com".to_string(),
            ..base_form()
        };
        let result = engine().validate_all(&form);

        assert_eq!(result.invalid_fields(), vec![FieldId::PhoneNumber]);
    }

    // ============================================================================
    // Live Field Validation
    // ============================================================================

    #[test]
    fn test_validate_field_contact_syncs_both_fields() {
        let errors = engine().validate_field(&base_form(), FieldId::Email);

        let fields: Vec<FieldId> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![FieldId::PhoneNumber, FieldId::Email]);
        assert!(errors.iter().all(|e| e.message == CONTACT_MESSAGE));
    }

    #[test]
    fn test_validate_field_clears_contact_error_once_filled() {
        let form = DonationForm {
            phone_number: "628123456789".to_string(),
            ..base_form()
        };
        assert!(engine().validate_field(&form, FieldId::PhoneNumber).is_empty());
        assert!(engine().validate_field(&form, FieldId::Email).is_empty());
    }

    #[test]
    fn test_validate_field_only_reports_requested_field() {
        let errors = engine().validate_field(&DonationForm::default(), FieldId::Nominal);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, FieldId::Nominal);
        assert_eq!(errors[0].kind, ErrorKind::Required);
    }

    #[test]
    fn test_validation_does_not_mutate_form() {
        let form = DonationForm {
            full_name: " Fulanah".to_string(),
            ..valid_form()
        };
        let snapshot = form.clone();

        let _ = engine().validate_all(&form);
        let _ = engine().can_submit(&form);
        for field in FieldId::ALL {
            let _ = engine().validate_field(&form, field);
        }

        assert_eq!(form, snapshot);
    }

    #[test]
    fn test_validator_trait_matches_validate_all() {
        let engine = engine();
        let form = DonationForm::default();
        assert_eq!(engine.validate(&form), engine.validate_all(&form));
    }

    #[test]
    fn test_configured_minimum() {
        let engine = ValidationEngine::new(EngineConfig {
            min_nominal: 50_000,
            ..EngineConfig::default()
        });
        let result = engine.validate_all(&base_form());

        assert_eq!(
            result.messages_for(FieldId::Nominal),
            vec!["Minimal donasi Rp 50.000"]
        );
    }

    #[test]
    fn test_form_deserializes_from_input_names() {
        let form: DonationForm = serde_json::from_str(
            r#"{"nominal":"100000","payment_method":"flip","full_name":"Fulanah","phone_number":"628123456789"}"#,
        )
        .unwrap();

        assert_eq!(form.payment_method, Some(PaymentMethod::Flip));
        assert_eq!(form.email, "");
        assert!(engine().can_submit(&form));
    }

    #[test]
    fn test_result_serializes_for_ui() {
        let result = engine().validate_all(&base_form());
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["is_valid"], false);
        assert_eq!(json["errors"][0]["field"], "phone_number");
        assert_eq!(json["errors"][0]["kind"], "cross_field");
    }

    // ============================================================================
    // Submission
    // ============================================================================

    #[test]
    fn test_prepare_request_normalises_valid_form() {
        let form = DonationForm {
            nominal: " 100000 ".to_string(),
            full_name: "Fulanah ".to_string(),
            phone_number: "  ".to_string(),
            email: " fulanah@example.com ".to_string(),
            ..valid_form()
        };

        let request = engine().prepare_request(&form).unwrap();

        assert_eq!(request.amount, 100_000);
        assert_eq!(request.payment_method, PaymentMethod::Flip);
        assert_eq!(request.full_name, "Fulanah");
        assert_eq!(request.phone_number, None);
        assert_eq!(request.email.as_deref(), Some("fulanah@example.com"));
    }

    #[test]
    fn test_prepare_request_without_payment_method_returns_validation_result() {
        let form = DonationForm {
            payment_method: None,
            ..valid_form()
        };

        let result = engine().prepare_request(&form).unwrap_err();

        assert!(!result.is_valid);
        assert_eq!(result.invalid_fields(), vec![FieldId::PaymentMethod]);
        assert_eq!(result.errors[0].kind, ErrorKind::Required);
    }

    #[tokio::test]
    async fn test_submit_without_payment_method_is_validation_error() {
        let (service, gateway) = service();
        let form = DonationForm {
            payment_method: None,
            ..valid_form()
        };

        let err = service.submit(&form).await.unwrap_err();

        assert!(matches!(err, DonationError::Validation(_)));
        assert!(gateway.transactions().await.is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_submits_record_ids_in_order() {
        let (service, gateway) = service();

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let service = service.clone();
                tokio::spawn(async move { service.submit(&valid_form()).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let ids: Vec<u64> = gateway.transactions().await.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, (1..=16).collect::<Vec<u64>>());
    }

    fn service() -> (DonationService, Arc<InMemoryTransactionGateway>) {
        let config = EngineConfig::default();
        let gateway = Arc::new(InMemoryTransactionGateway::new(&config));
        let service = DonationService::new(ValidationEngine::new(config), gateway.clone());
        (service, gateway)
    }

    #[tokio::test]
    async fn test_submit_valid_form_returns_payment_instructions() {
        let (service, gateway) = service();

        let instructions = service.submit(&valid_form()).await.unwrap();

        assert_eq!(instructions.transaction_id, 1);
        assert_eq!(instructions.amount, 100_000);
        assert_eq!(instructions.amount_display, "Rp 100.000");
        assert_eq!(instructions.instructions_path, "/bayar/zakat-maal/1");
        assert_eq!(instructions.payment_link_label, "Bayar Via Flip");
        assert!(instructions.payment_url.contains("flip.id"));

        let transactions = gateway.transactions().await;
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].1.full_name, "Fulanah");
        assert_eq!(transactions[0].1.email.as_deref(), Some("fulanah@example.com"));
    }

    #[tokio::test]
    async fn test_submit_invalid_form_never_reaches_gateway() {
        let (service, gateway) = service();

        let err = service.submit(&base_form()).await.unwrap_err();

        assert!(matches!(err, DonationError::Validation(_)));
        assert_eq!(
            count_message(err.validation_result().unwrap(), CONTACT_MESSAGE),
            2
        );
        assert!(gateway.transactions().await.is_empty());
    }

    #[tokio::test]
    async fn test_submit_issues_sequential_ids() {
        let (service, _) = service();
        let email_only = DonationForm {
            email: "fulanah@example.com".to_string(),
            ..base_form()
        };

        let first = service.submit(&valid_form()).await.unwrap();
        let second = service.submit(&email_only).await.unwrap();

        assert_eq!(first.transaction_id, 1);
        assert_eq!(second.transaction_id, 2);
        assert_eq!(second.amount, 10_000);
    }
}
