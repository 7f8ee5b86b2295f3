use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument, warn};

use crate::dto::quote_dto::CreateQuoteRequest;
use crate::model::quote::QuoteRecord;
use crate::repository::quote_repo::QuoteRepository;
use crate::service::pricing;
use crate::util::email::Notifier;
use crate::util::error::ServiceError;
use crate::util::id;

/// What the caller gets back for an accepted quote request.
#[derive(Debug, Clone)]
pub struct QuoteReceipt {
    pub quote_id: String,
    pub estimated_cost: i64,
}

#[async_trait]
pub trait QuoteService: Send + Sync {
    /// Accept a validated quote request: estimate, assign an id, persist,
    /// log, notify. Notification failure does not fail the submission.
    async fn submit_quote(&self, request: CreateQuoteRequest) -> Result<QuoteReceipt, ServiceError>;
}

pub struct QuoteServiceImpl {
    pub quote_repo: Arc<dyn QuoteRepository>,
    pub notifier: Arc<dyn Notifier>,
}

#[async_trait]
impl QuoteService for QuoteServiceImpl {
    #[instrument(skip(self, request), fields(email = %request.email))]
    async fn submit_quote(&self, request: CreateQuoteRequest) -> Result<QuoteReceipt, ServiceError> {
        let quote = request.into_domain().ok_or_else(|| {
            ServiceError::Internal("Unrecognized enum value after validation".to_string())
        })?;

        let estimated_cost = pricing::estimate_for(&quote);
        let id = id::submission_id(id::QUOTE_PREFIX);
        let record = QuoteRecord {
            id,
            request: quote,
            estimated_cost,
            created_at: chrono::Utc::now().to_rfc3339(),
        };

        let record = self.quote_repo.save(record).await.map_err(ServiceError::from)?;

        info!(
            quote_id = %record.id,
            customer = %record.request.customer_name(),
            email = %record.request.email,
            move_type = %record.request.move_type.as_str(),
            move_date = %record.request.move_date,
            estimated_cost = record.estimated_cost,
            "New quote request"
        );

        if let Err(e) = self.notifier.quote_received(&record).await {
            warn!("Failed to send quote notifications: {e}");
        }

        Ok(QuoteReceipt {
            quote_id: record.id,
            estimated_cost: record.estimated_cost,
        })
    }
}
