use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt; // for .oneshot()

use packit_backend::model::contact::ContactRecord;
use packit_backend::model::quote::QuoteRecord;
use packit_backend::repository::quote_repo::{InMemoryQuoteRepository, QuoteRepository};
use packit_backend::router::quote_router::quote_router;
use packit_backend::service::quote_service::QuoteServiceImpl;
use packit_backend::util::email::{EmailError, Notifier};

#[derive(Default)]
struct RecordingNotifier {
    quotes: AtomicUsize,
    contacts: AtomicUsize,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn quote_received(&self, _record: &QuoteRecord) -> Result<(), EmailError> {
        self.quotes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn contact_received(&self, _record: &ContactRecord) -> Result<(), EmailError> {
        self.contacts.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn quote_app() -> (Router, Arc<InMemoryQuoteRepository>, Arc<RecordingNotifier>) {
    let repo = Arc::new(InMemoryQuoteRepository::new());
    let notifier = Arc::new(RecordingNotifier::default());
    let service = Arc::new(QuoteServiceImpl {
        quote_repo: repo.clone(),
        notifier: notifier.clone(),
    });
    (quote_router(service), repo, notifier)
}

async fn post_json(app: Router, uri: &str, body: String) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn valid_quote_body() -> Value {
    json!({
        "firstName": "Jordan",
        "lastName": "Reyes",
        "email": "jordan@example.com",
        "phone": "7135550123",
        "moveType": "long-distance",
        "moveDate": "2025-11-01",
        "fromAddress": "123 Heights Blvd",
        "fromCity": "Houston",
        "fromState": "TX",
        "fromZip": "77008",
        "toAddress": "456 Elm Ave",
        "toCity": "Austin",
        "toState": "TX",
        "toZip": "78701",
        "homeSize": "3-bedroom",
        "packingService": true,
        "storageService": false,
        "specialItems": "Upright piano",
        "hearAboutUs": "referral"
    })
}

fn detail_fields(body: &Value) -> Vec<&str> {
    body["details"]
        .as_array()
        .map(|details| {
            details
                .iter()
                .filter_map(|d| d["field"].as_str())
                .collect()
        })
        .unwrap_or_default()
}

#[tokio::test]
async fn test_valid_quote_is_accepted_with_estimate() {
    let (app, repo, notifier) = quote_app();

    let (status, body) = post_json(app, "/api/quote", valid_quote_body().to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    // 1200 * 1.8 + 300
    assert_eq!(body["estimatedCost"], json!(2460));
    assert_eq!(body["message"], json!("Quote request submitted successfully"));

    let quote_id = body["quoteId"].as_str().unwrap();
    let parts: Vec<&str> = quote_id.split('-').collect();
    assert_eq!(parts[0], "QT");
    assert!(parts[1].parse::<i64>().is_ok());
    assert_eq!(parts[2].len(), 9);

    assert_eq!(repo.count().await.unwrap(), 1);
    assert_eq!(notifier.quotes.load(Ordering::SeqCst), 1);

    let stored = repo.find_by_id(quote_id).await.unwrap();
    assert_eq!(stored.estimated_cost, 2460);
    assert_eq!(stored.request.from_zip, "77008");
}

#[tokio::test]
async fn test_add_on_flags_default_to_false() {
    let (app, _repo, _notifier) = quote_app();

    let mut body = valid_quote_body();
    body["moveType"] = json!("local");
    body["homeSize"] = json!("1-bedroom");
    body.as_object_mut().unwrap().remove("packingService");
    body.as_object_mut().unwrap().remove("storageService");

    let (status, body) = post_json(app, "/api/quote", body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["estimatedCost"], json!(400));
}

#[tokio::test]
async fn test_invalid_fields_are_rejected_per_field() {
    let (app, repo, notifier) = quote_app();

    let mut body = valid_quote_body();
    body["email"] = json!("not-an-email");
    body["fromZip"] = json!("77");

    let (status, body) = post_json(app, "/api/quote", body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!("Invalid form data"));
    let fields = detail_fields(&body);
    assert!(fields.contains(&"email"));
    assert!(fields.contains(&"fromZip"));

    // Nothing downstream runs for an invalid submission
    assert_eq!(repo.count().await.unwrap(), 0);
    assert_eq!(notifier.quotes.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_missing_required_fields_are_listed() {
    let (app, repo, _notifier) = quote_app();

    let (status, body) = post_json(app, "/api/quote", json!({}).to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    let fields = detail_fields(&body);
    assert!(!fields.is_empty());
    assert!(fields.contains(&"firstName"));
    assert!(fields.contains(&"moveType"));
    assert!(fields.contains(&"homeSize"));
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_unknown_enum_values_are_rejected() {
    let (app, _repo, _notifier) = quote_app();

    let mut body = valid_quote_body();
    body["moveType"] = json!("teleport");
    body["homeSize"] = json!("castle");

    let (status, body) = post_json(app, "/api/quote", body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let fields = detail_fields(&body);
    assert!(fields.contains(&"moveType"));
    assert!(fields.contains(&"homeSize"));
}

#[tokio::test]
async fn test_malformed_json_is_a_bad_request() {
    let (app, repo, _notifier) = quote_app();

    let (status, body) = post_json(app, "/api/quote", "{not json".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert_eq!(repo.count().await.unwrap(), 0);
}
