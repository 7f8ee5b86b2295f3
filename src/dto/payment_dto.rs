use serde::{Deserialize, Serialize};
use validator::Validate;

#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePaymentIntentRequest {
    #[serde(default)]
    #[validate(range(min = 50.0, message = "Minimum payment amount is $50"))]
    pub amount: f64,

    #[serde(default)]
    #[validate(length(min = 1, message = "Quote ID is required"))]
    pub quoteId: String,

    #[serde(default)]
    #[validate(email(message = "Valid email is required"))]
    pub customerEmail: String,

    #[serde(default)]
    #[validate(length(min = 2, message = "Customer name is required"))]
    pub customerName: String,
}

impl CreatePaymentIntentRequest {
    /// Deposit amount in minor currency units, as the processor expects.
    pub fn amount_cents(&self) -> i64 {
        (self.amount * 100.0).round() as i64
    }
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentIntentResponse {
    pub clientSecret: String,
    pub paymentIntentId: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreatePaymentIntentRequest {
        CreatePaymentIntentRequest {
            amount: 150.0,
            quoteId: "QT-1730000000000-a1b2c3d4e".to_string(),
            customerEmail: "jordan@example.com".to_string(),
            customerName: "Jordan Reyes".to_string(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_amount_below_minimum_fails() {
        let mut request = valid_request();
        request.amount = 49.99;
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("amount"));
    }

    #[test]
    fn test_amount_cents_conversion() {
        let mut request = valid_request();
        assert_eq!(request.amount_cents(), 15000);
        request.amount = 62.5;
        assert_eq!(request.amount_cents(), 6250);
    }
}
