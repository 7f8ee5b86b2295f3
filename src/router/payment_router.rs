use axum::{routing::post, Router};
use std::sync::Arc;

use crate::handler::payment_handler::create_payment_intent_handler;
use crate::service::payment_service::PaymentServiceImpl;

pub fn payment_router(service: Arc<PaymentServiceImpl>) -> Router {
    Router::new()
        .route("/api/create-payment-intent", post(create_payment_intent_handler))
        .with_state(service)
}
