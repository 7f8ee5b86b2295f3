use crate::config::StripeConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// Gateway errors, split by who should see them: `Rejected` carries the
/// processor's own message and is surfaced to the user verbatim;
/// `Transport` stays internal.
#[derive(Debug, thiserror::Error)]
pub enum PaymentGatewayError {
    #[error("{0}")]
    Rejected(String),

    #[error("Payment provider request failed: {0}")]
    Transport(String),
}

/// What the submission pipeline needs to open a deposit charge.
#[derive(Debug, Clone)]
pub struct PaymentIntentParams {
    pub amount_cents: i64,
    pub quote_id: String,
    pub customer_email: String,
    pub customer_name: String,
}

/// The processor's handle for an in-progress charge. The client secret is
/// handed to the hosted card widget; the id is kept for bookkeeping.
#[derive(Debug, Clone)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
}

/// Seam to the external payment processor. One operation; confirmation,
/// webhooks, and reconciliation are the processor's problem, not ours.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_payment_intent(
        &self,
        params: PaymentIntentParams,
    ) -> Result<PaymentIntent, PaymentGatewayError>;
}

#[derive(Debug, Deserialize)]
struct IntentBody {
    id: String,
    client_secret: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: Option<String>,
}

/// Stripe REST implementation of [`PaymentGateway`].
pub struct StripeGateway {
    config: StripeConfig,
    client: Client,
}

impl StripeGateway {
    pub fn new(config: StripeConfig) -> Result<Self, PaymentGatewayError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| PaymentGatewayError::Transport(format!("HTTP client error: {}", e)))?;
        Ok(Self { config, client })
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    #[instrument(skip(self, params), fields(quote_id = %params.quote_id, amount_cents = params.amount_cents))]
    async fn create_payment_intent(
        &self,
        params: PaymentIntentParams,
    ) -> Result<PaymentIntent, PaymentGatewayError> {
        let url = format!("{}/v1/payment_intents", self.config.api_base);
        let description = format!("Moving deposit for quote {}", params.quote_id);
        debug!("POST {}", url);

        let form = [
            ("amount", params.amount_cents.to_string()),
            ("currency", self.config.currency.clone()),
            ("automatic_payment_methods[enabled]", "true".to_string()),
            ("metadata[quoteId]", params.quote_id.clone()),
            ("metadata[customerEmail]", params.customer_email.clone()),
            ("metadata[customerName]", params.customer_name.clone()),
            ("metadata[paymentType]", "moving_deposit".to_string()),
            ("description", description),
            ("receipt_email", params.customer_email.clone()),
        ];

        let resp = self
            .client
            .post(&url)
            .basic_auth(&self.config.secret_key, None::<&str>)
            .form(&form)
            .send()
            .await
            .map_err(|e| PaymentGatewayError::Transport(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| PaymentGatewayError::Transport(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|parsed| parsed.error.message)
                .unwrap_or_else(|| format!("HTTP {}", status));
            error!("Payment intent rejected: {}", message);
            return Err(PaymentGatewayError::Rejected(message));
        }

        let intent: IntentBody = serde_json::from_str(&body)
            .map_err(|e| PaymentGatewayError::Transport(format!("Failed to decode response: {}", e)))?;

        info!(intent_id = %intent.id, "Payment intent created");
        Ok(PaymentIntent {
            id: intent.id,
            client_secret: intent.client_secret,
        })
    }
}
