use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::app_conf::AppConfig;
use crate::config::{ConfigError, EmailConfig, StripeConfig};
use crate::repository::contact_repo::InMemoryContactRepository;
use crate::repository::quote_repo::InMemoryQuoteRepository;
use crate::router::contact_router::contact_router;
use crate::router::payment_router::payment_router;
use crate::router::quote_router::quote_router;
use crate::service::contact_service::ContactServiceImpl;
use crate::service::payment_service::PaymentServiceImpl;
use crate::service::quote_service::QuoteServiceImpl;
use crate::util::email::{LogNotifier, Notifier, SmtpNotifier};
use crate::util::stripe::{PaymentGateway, StripeGateway};

pub struct App {
    config: AppConfig,
    router: Router,
    pub quote_service: Arc<QuoteServiceImpl>,
    pub contact_service: Arc<ContactServiceImpl>,
    pub payment_service: Arc<PaymentServiceImpl>,
}

impl App {
    /// Wire configuration, repositories, notifier, gateway, and services.
    /// Configuration problems abort startup here rather than surfacing on
    /// the first request.
    pub fn new() -> Result<Self, ConfigError> {
        let config = AppConfig::from_env();

        let stripe_config = StripeConfig::from_env()?;
        let gateway: Arc<dyn PaymentGateway> = Arc::new(
            StripeGateway::new(stripe_config).map_err(|e| {
                ConfigError::InvalidValue(format!("Payment gateway init failed: {e}"))
            })?,
        );

        // Email is optional: without SMTP settings, submissions are logged
        // instead of mailed.
        let notifier: Arc<dyn Notifier> = match EmailConfig::from_env() {
            Ok(email_config) => Arc::new(SmtpNotifier::new(email_config).map_err(|e| {
                ConfigError::ValidationError(format!("SMTP notifier init failed: {e}"))
            })?),
            Err(e) => {
                warn!("Email not configured ({e}); using the logging notifier");
                Arc::new(LogNotifier::new())
            }
        };

        let quote_repo = Arc::new(InMemoryQuoteRepository::new());
        let contact_repo = Arc::new(InMemoryContactRepository::new());

        let quote_service = Arc::new(QuoteServiceImpl {
            quote_repo,
            notifier: notifier.clone(),
        });
        let contact_service = Arc::new(ContactServiceImpl {
            contact_repo,
            notifier,
        });
        let payment_service = Arc::new(PaymentServiceImpl { gateway });

        let router = Router::new()
            .merge(quote_router(quote_service.clone()))
            .merge(contact_router(contact_service.clone()))
            .merge(payment_router(payment_service.clone()))
            .route("/health", get(|| async { "OK" }));

        Ok(App {
            config,
            router,
            quote_service,
            contact_service,
            payment_service,
        })
    }

    pub async fn start(self) {
        let addr = SocketAddr::new(self.config.host.parse().expect("Invalid host"), self.config.port);
        info!("🚀 Server running at http://{}", addr);
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .expect("Failed to bind address");
        axum::serve(listener, self.router).await.expect("Failed to start server");
    }
}
