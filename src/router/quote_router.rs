use axum::{routing::post, Router};
use std::sync::Arc;

use crate::handler::quote_handler::submit_quote_handler;
use crate::service::quote_service::QuoteServiceImpl;

pub fn quote_router(service: Arc<QuoteServiceImpl>) -> Router {
    Router::new()
        .route("/api/quote", post(submit_quote_handler))
        .with_state(service)
}
