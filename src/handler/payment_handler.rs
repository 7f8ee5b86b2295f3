use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::warn;
use validator::Validate;

use crate::dto::payment_dto::{CreatePaymentIntentRequest, PaymentIntentResponse};
use crate::service::payment_service::{PaymentService, PaymentServiceImpl};
use crate::util::error::PaymentError;

pub async fn create_payment_intent_handler(
    State(service): State<Arc<PaymentServiceImpl>>,
    payload: Result<Json<CreatePaymentIntentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, PaymentError> {
    let Json(payload) = payload.map_err(|e| {
        warn!("Rejected payment intent body: {e}");
        PaymentError::bad_request(format!("Invalid request body: {}", e))
    })?;

    // Amounts below the $50 deposit floor never reach the processor.
    if let Err(errors) = payload.validate() {
        return Err(PaymentError::validation(&errors));
    }

    let intent = service
        .create_deposit_intent(payload)
        .await
        .map_err(PaymentError::from)?;

    Ok(Json(PaymentIntentResponse {
        clientSecret: intent.client_secret,
        paymentIntentId: intent.id,
    }))
}
