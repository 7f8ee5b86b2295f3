use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, instrument};

use crate::dto::payment_dto::CreatePaymentIntentRequest;
use crate::util::error::ServiceError;
use crate::util::stripe::{PaymentGateway, PaymentGatewayError, PaymentIntent, PaymentIntentParams};

#[async_trait]
pub trait PaymentService: Send + Sync {
    /// Open a deposit charge with the payment processor for a quoted move.
    async fn create_deposit_intent(
        &self,
        request: CreatePaymentIntentRequest,
    ) -> Result<PaymentIntent, ServiceError>;
}

pub struct PaymentServiceImpl {
    pub gateway: Arc<dyn PaymentGateway>,
}

#[async_trait]
impl PaymentService for PaymentServiceImpl {
    #[instrument(skip(self, request), fields(quote_id = %request.quoteId))]
    async fn create_deposit_intent(
        &self,
        request: CreatePaymentIntentRequest,
    ) -> Result<PaymentIntent, ServiceError> {
        let params = PaymentIntentParams {
            amount_cents: request.amount_cents(),
            quote_id: request.quoteId.clone(),
            customer_email: request.customerEmail.clone(),
            customer_name: request.customerName.clone(),
        };

        let intent = self
            .gateway
            .create_payment_intent(params)
            .await
            .map_err(|e| match e {
                PaymentGatewayError::Rejected(msg) => ServiceError::Upstream(msg),
                PaymentGatewayError::Transport(msg) => {
                    error!("Payment gateway transport failure: {msg}");
                    ServiceError::Internal(msg)
                }
            })?;

        info!(intent_id = %intent.id, "Deposit payment intent created");
        Ok(intent)
    }
}
