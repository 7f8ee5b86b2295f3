use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::warn;
use validator::Validate;

use crate::dto::quote_dto::{CreateQuoteRequest, QuoteSubmissionResponse};
use crate::service::quote_service::{QuoteService, QuoteServiceImpl};
use crate::util::error::HandlerError;

pub async fn submit_quote_handler(
    State(service): State<Arc<QuoteServiceImpl>>,
    payload: Result<Json<CreateQuoteRequest>, JsonRejection>,
) -> Result<impl IntoResponse, HandlerError> {
    let Json(payload) = payload.map_err(|e| {
        warn!("Rejected quote submission body: {e}");
        HandlerError::bad_request(format!("Invalid request body: {}", e))
    })?;

    if let Err(errors) = payload.validate() {
        return Err(HandlerError::validation(&errors));
    }

    let receipt = service
        .submit_quote(payload)
        .await
        .map_err(HandlerError::from)?;

    Ok(Json(QuoteSubmissionResponse {
        success: true,
        quoteId: receipt.quote_id,
        estimatedCost: receipt.estimated_cost,
        message: "Quote request submitted successfully".to_string(),
    }))
}
