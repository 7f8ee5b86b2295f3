use serde::{Deserialize, Serialize};
use std::env;
use tracing::{debug, error, info, warn};

use crate::config::ConfigError;

/// Payment processor configuration. Loaded once at boot and validated
/// eagerly so a missing key fails startup instead of the first checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StripeConfig {
    /// Secret API key used as the basic-auth username
    #[serde(skip_serializing)]
    pub secret_key: String,
    /// Base URL of the processor's REST API
    pub api_base: String,
    /// ISO currency code charged for deposits
    pub currency: String,
    /// Request timeout in seconds
    pub request_timeout_secs: u64,
}

impl StripeConfig {
    /// Create StripeConfig from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading payment processor configuration from environment variables");

        let secret_key = env::var("STRIPE_SECRET_KEY").map_err(|_| {
            error!("STRIPE_SECRET_KEY environment variable not found");
            ConfigError::EnvVarNotFound("STRIPE_SECRET_KEY".to_string())
        })?;
        debug!("Stripe secret key: [REDACTED]");

        let api_base = env::var("STRIPE_API_BASE").unwrap_or_else(|_| {
            "https://api.stripe.com".to_string()
        });
        debug!("Stripe API base: {}", api_base);

        let currency = env::var("PAYMENT_CURRENCY").unwrap_or_else(|_| {
            warn!("PAYMENT_CURRENCY not set, defaulting to usd");
            "usd".to_string()
        });
        debug!("Payment currency: {}", currency);

        let request_timeout_secs = env::var("STRIPE_REQUEST_TIMEOUT")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<u64>()
            .unwrap_or(30);
        debug!("Request timeout: {} seconds", request_timeout_secs);

        let config = StripeConfig {
            secret_key,
            api_base,
            currency,
            request_timeout_secs,
        };

        config.validate()?;
        info!("Payment processor configuration loaded successfully");
        Ok(config)
    }

    /// Create StripeConfig for testing
    pub fn from_test_env() -> Self {
        StripeConfig {
            secret_key: "sk_test_0000000000".to_string(),
            api_base: "http://localhost:12111".to_string(),
            currency: "usd".to_string(),
            request_timeout_secs: 10,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret_key.trim().is_empty() {
            error!("Stripe secret key is empty");
            return Err(ConfigError::ValidationError(
                "Stripe secret key cannot be empty".to_string(),
            ));
        }

        if !self.api_base.starts_with("http://") && !self.api_base.starts_with("https://") {
            error!("Invalid Stripe API base: {}", self.api_base);
            return Err(ConfigError::ValidationError(
                "Stripe API base must be an http(s) URL".to_string(),
            ));
        }

        if self.currency.len() != 3 {
            error!("Invalid payment currency: {}", self.currency);
            return Err(ConfigError::ValidationError(
                "Payment currency must be a 3-letter ISO code".to_string(),
            ));
        }

        if self.request_timeout_secs == 0 {
            error!("Request timeout is 0");
            return Err(ConfigError::ValidationError(
                "Request timeout cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}
