use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt; // for .oneshot()

use packit_backend::router::payment_router::payment_router;
use packit_backend::service::payment_service::PaymentServiceImpl;
use packit_backend::util::stripe::{
    PaymentGateway, PaymentGatewayError, PaymentIntent, PaymentIntentParams,
};

enum StubMode {
    Success,
    Rejected(&'static str),
    Transport(&'static str),
}

struct StubGateway {
    mode: StubMode,
    calls: AtomicUsize,
    last_params: Mutex<Option<PaymentIntentParams>>,
}

impl StubGateway {
    fn new(mode: StubMode) -> Arc<Self> {
        Arc::new(StubGateway {
            mode,
            calls: AtomicUsize::new(0),
            last_params: Mutex::new(None),
        })
    }
}

#[async_trait]
impl PaymentGateway for StubGateway {
    async fn create_payment_intent(
        &self,
        params: PaymentIntentParams,
    ) -> Result<PaymentIntent, PaymentGatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_params.lock().unwrap() = Some(params);
        match &self.mode {
            StubMode::Success => Ok(PaymentIntent {
                id: "pi_test_123".to_string(),
                client_secret: "pi_test_123_secret_abc".to_string(),
            }),
            StubMode::Rejected(msg) => Err(PaymentGatewayError::Rejected(msg.to_string())),
            StubMode::Transport(msg) => Err(PaymentGatewayError::Transport(msg.to_string())),
        }
    }
}

fn payment_app(gateway: Arc<StubGateway>) -> Router {
    let service = Arc::new(PaymentServiceImpl { gateway });
    payment_router(service)
}

async fn post_json(app: Router, body: String) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri("/api/create-payment-intent")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn valid_payment_body() -> Value {
    json!({
        "amount": 150.0,
        "quoteId": "QT-1730000000000-a1b2c3d4e",
        "customerEmail": "jordan@example.com",
        "customerName": "Jordan Reyes"
    })
}

#[tokio::test]
async fn test_intent_created_with_amount_in_cents() {
    let gateway = StubGateway::new(StubMode::Success);
    let app = payment_app(gateway.clone());

    let (status, body) = post_json(app, valid_payment_body().to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["clientSecret"], json!("pi_test_123_secret_abc"));
    assert_eq!(body["paymentIntentId"], json!("pi_test_123"));

    assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
    let params = gateway.last_params.lock().unwrap().clone().unwrap();
    assert_eq!(params.amount_cents, 15000);
    assert_eq!(params.quote_id, "QT-1730000000000-a1b2c3d4e");
    assert_eq!(params.customer_email, "jordan@example.com");
}

#[tokio::test]
async fn test_amount_below_minimum_never_reaches_gateway() {
    let gateway = StubGateway::new(StubMode::Success);
    let app = payment_app(gateway.clone());

    let mut body = valid_payment_body();
    body["amount"] = json!(25.0);

    let (status, body) = post_json(app, body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Invalid payment data"));
    let fields: Vec<&str> = body["details"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|d| d["field"].as_str())
        .collect();
    assert!(fields.contains(&"amount"));
    assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_missing_fields_are_listed() {
    let gateway = StubGateway::new(StubMode::Success);
    let app = payment_app(gateway.clone());

    let (status, body) = post_json(app, json!({}).to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let fields: Vec<&str> = body["details"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|d| d["field"].as_str())
        .collect();
    assert!(fields.contains(&"amount"));
    assert!(fields.contains(&"quoteId"));
    assert!(fields.contains(&"customerEmail"));
    assert!(fields.contains(&"customerName"));
    assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_processor_rejection_is_surfaced_verbatim() {
    let gateway = StubGateway::new(StubMode::Rejected("Your card was declined."));
    let app = payment_app(gateway.clone());

    let (status, body) = post_json(app, valid_payment_body().to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Your card was declined."));
}

#[tokio::test]
async fn test_transport_failure_is_a_generic_internal_error() {
    let gateway = StubGateway::new(StubMode::Transport("connection reset by peer"));
    let app = payment_app(gateway.clone());

    let (status, body) = post_json(app, valid_payment_body().to_string()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], json!("Internal server error"));
    assert!(!body["error"].as_str().unwrap().contains("connection reset"));
}
