// src/donations/submission.rs
//! Hand-off from a validated form to the payment flow

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use super::currency::CurrencyFormatter;
use super::engine::ValidationEngine;
use super::models::{CreatedTransaction, DonationForm, DonationRequest, PaymentInstructions};
use crate::common::{safe_email_log, safe_phone_log, DonationError, EngineConfig};

/// Creates donation transactions with the payment provider
#[async_trait]
pub trait TransactionGateway: Send + Sync {
    async fn create_transaction(
        &self,
        request: &DonationRequest,
    ) -> Result<CreatedTransaction, DonationError>;
}

/// Gateway that keeps transactions in memory and issues sequential ids
#[derive(Debug)]
pub struct InMemoryTransactionGateway {
    payment_base_url: String,
    requests: RwLock<Vec<(u64, DonationRequest)>>,
}

impl InMemoryTransactionGateway {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            payment_base_url: config.payment_base_url.clone(),
            requests: RwLock::new(Vec::new()),
        }
    }

    pub async fn transactions(&self) -> Vec<(u64, DonationRequest)> {
        self.requests.read().await.clone()
    }
}

#[async_trait]
impl TransactionGateway for InMemoryTransactionGateway {
    async fn create_transaction(
        &self,
        request: &DonationRequest,
    ) -> Result<CreatedTransaction, DonationError> {
        // Ids are assigned under the write lock so they stay in insertion order
        let mut requests = self.requests.write().await;
        let id = requests.len() as u64 + 1;
        requests.push((id, request.clone()));

        Ok(CreatedTransaction {
            id,
            payment_url: format!("{}/zakat-maal/{}", self.payment_base_url, id),
        })
    }
}

/// Gates transaction creation behind the validation engine
#[derive(Clone)]
pub struct DonationService {
    engine: ValidationEngine,
    gateway: Arc<dyn TransactionGateway>,
}

impl DonationService {
    pub fn new(engine: ValidationEngine, gateway: Arc<dyn TransactionGateway>) -> Self {
        Self { engine, gateway }
    }

    /// Validates `form` and, only if it passes, creates the transaction.
    /// The gateway is never called for an invalid form.
    pub async fn submit(&self, form: &DonationForm) -> Result<PaymentInstructions, DonationError> {
        let request = match self.engine.prepare_request(form) {
            Ok(request) => request,
            Err(result) => {
                warn!(
                    errors = result.errors.len(),
                    invalid_fields = ?result.invalid_fields(),
                    "Donation submission rejected"
                );
                return Err(DonationError::Validation(result));
            }
        };
        let transaction = self.gateway.create_transaction(&request).await?;

        info!(
            transaction_id = transaction.id,
            amount = request.amount,
            payment_method = %request.payment_method,
            phone = %request.phone_number.as_deref().map(safe_phone_log).unwrap_or_default(),
            email = %request.email.as_deref().map(safe_email_log).unwrap_or_default(),
            "Donation transaction created"
        );

        Ok(PaymentInstructions {
            transaction_id: transaction.id,
            amount: request.amount,
            amount_display: CurrencyFormatter::format_amount(request.amount),
            payment_method: request.payment_method,
            instructions_path: format!(
                "{}/{}",
                self.engine.config().instructions_path,
                transaction.id
            ),
            payment_link_label: format!("Bayar Via {}", request.payment_method),
            payment_url: transaction.payment_url,
            created_at: Utc::now().to_rfc3339(),
        })
    }
}
