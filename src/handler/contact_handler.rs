use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::warn;
use validator::Validate;

use crate::dto::contact_dto::{ContactSubmissionResponse, CreateContactRequest};
use crate::service::contact_service::{ContactService, ContactServiceImpl};
use crate::util::error::HandlerError;

pub async fn submit_contact_handler(
    State(service): State<Arc<ContactServiceImpl>>,
    payload: Result<Json<CreateContactRequest>, JsonRejection>,
) -> Result<impl IntoResponse, HandlerError> {
    let Json(payload) = payload.map_err(|e| {
        warn!("Rejected contact submission body: {e}");
        HandlerError::bad_request(format!("Invalid request body: {}", e))
    })?;

    if let Err(errors) = payload.validate() {
        return Err(HandlerError::validation(&errors));
    }

    let receipt = service
        .submit_contact(payload)
        .await
        .map_err(HandlerError::from)?;

    Ok(Json(ContactSubmissionResponse {
        success: true,
        contactId: receipt.contact_id,
        message: "Contact form submitted successfully".to_string(),
    }))
}
