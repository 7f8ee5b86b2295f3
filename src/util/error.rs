use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use validator::ValidationErrors;

/// One field-level rule violation, reported with the wire field name.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// Flatten `validator` output into a deterministic field/message list.
pub fn field_violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations: Vec<FieldViolation> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |error| FieldViolation {
                field: field.to_string(),
                message: error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field)),
            })
        })
        .collect();
    violations.sort_by(|a, b| a.field.cmp(&b.field));
    violations
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerErrorKind {
    Validation,
    BadRequest,
    NotFound,
    Upstream,
    Internal,
}

impl HandlerErrorKind {
    fn status(self) -> StatusCode {
        match self {
            HandlerErrorKind::Validation
            | HandlerErrorKind::BadRequest
            | HandlerErrorKind::Upstream => StatusCode::BAD_REQUEST,
            HandlerErrorKind::NotFound => StatusCode::NOT_FOUND,
            HandlerErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error shape of the form endpoints:
/// `{ "success": false, "error": ..., "details": [...] }`.
#[derive(Debug)]
pub struct HandlerError {
    pub kind: HandlerErrorKind,
    pub message: String,
    pub details: Option<Vec<FieldViolation>>,
}

impl HandlerError {
    pub fn validation(errors: &ValidationErrors) -> Self {
        HandlerError {
            kind: HandlerErrorKind::Validation,
            message: "Invalid form data".to_string(),
            details: Some(field_violations(errors)),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        HandlerError {
            kind: HandlerErrorKind::BadRequest,
            message: message.into(),
            details: None,
        }
    }

    pub fn internal() -> Self {
        HandlerError {
            kind: HandlerErrorKind::Internal,
            message: "Internal server error".to_string(),
            details: None,
        }
    }
}

impl std::fmt::Display for HandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for HandlerError {}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let mut body = json!({
            "success": false,
            "error": self.message,
        });
        if let Some(details) = self.details {
            body["details"] = json!(details);
        }
        (self.kind.status(), axum::Json(body)).into_response()
    }
}

/// Error shape of the payment endpoint: `{ "error": ..., "details": [...] }`.
#[derive(Debug)]
pub struct PaymentError {
    pub kind: HandlerErrorKind,
    pub message: String,
    pub details: Option<Vec<FieldViolation>>,
}

impl PaymentError {
    pub fn validation(errors: &ValidationErrors) -> Self {
        PaymentError {
            kind: HandlerErrorKind::Validation,
            message: "Invalid payment data".to_string(),
            details: Some(field_violations(errors)),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        PaymentError {
            kind: HandlerErrorKind::BadRequest,
            message: message.into(),
            details: None,
        }
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        PaymentError {
            kind: HandlerErrorKind::Upstream,
            message: message.into(),
            details: None,
        }
    }

    pub fn internal() -> Self {
        PaymentError {
            kind: HandlerErrorKind::Internal,
            message: "Internal server error".to_string(),
            details: None,
        }
    }
}

impl std::fmt::Display for PaymentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for PaymentError {}

impl IntoResponse for PaymentError {
    fn into_response(self) -> Response {
        let mut body = json!({
            "error": self.message,
        });
        if let Some(details) = self.details {
            body["details"] = json!(details);
        }
        (self.kind.status(), axum::Json(body)).into_response()
    }
}

/// Errors surfaced by the service layer.
#[derive(Debug, Clone)]
pub enum ServiceError {
    NotFound(String),
    Conflict(String),
    /// The payment processor rejected the request; the message is shown to
    /// the user as-is.
    Upstream(String),
    Internal(String),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            ServiceError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ServiceError::Upstream(msg) => write!(f, "Upstream: {}", msg),
            ServiceError::Internal(msg) => write!(f, "Internal Error: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<crate::repository::repository_error::RepositoryError> for ServiceError {
    fn from(err: crate::repository::repository_error::RepositoryError) -> Self {
        use crate::repository::repository_error::RepositoryError;
        match err {
            RepositoryError::NotFound(msg) => ServiceError::NotFound(msg),
            RepositoryError::AlreadyExists(msg) => ServiceError::Conflict(msg),
            RepositoryError::Storage(msg) => ServiceError::Internal(msg),
        }
    }
}

impl From<ServiceError> for HandlerError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(msg) => HandlerError {
                kind: HandlerErrorKind::NotFound,
                message: msg,
                details: None,
            },
            ServiceError::Upstream(msg) => HandlerError {
                kind: HandlerErrorKind::Upstream,
                message: msg,
                details: None,
            },
            ServiceError::Conflict(_) | ServiceError::Internal(_) => HandlerError::internal(),
        }
    }
}

impl From<ServiceError> for PaymentError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Upstream(msg) => PaymentError::upstream(msg),
            ServiceError::NotFound(msg) => PaymentError {
                kind: HandlerErrorKind::NotFound,
                message: msg,
                details: None,
            },
            ServiceError::Conflict(_) | ServiceError::Internal(_) => PaymentError::internal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Debug, Validate)]
    struct Probe {
        #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
        name: String,
        #[validate(email(message = "Please enter a valid email address"))]
        email: String,
    }

    #[test]
    fn test_field_violations_carry_messages() {
        let probe = Probe {
            name: "a".to_string(),
            email: "nope".to_string(),
        };
        let errors = probe.validate().unwrap_err();
        let violations = field_violations(&errors);
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].field, "email");
        assert_eq!(violations[0].message, "Please enter a valid email address");
        assert_eq!(violations[1].field, "name");
        assert_eq!(violations[1].message, "Name must be at least 2 characters");
    }

    #[test]
    fn test_internal_errors_do_not_leak_detail() {
        let err: HandlerError = ServiceError::Internal("db socket hung up".to_string()).into();
        assert_eq!(err.kind, HandlerErrorKind::Internal);
        assert_eq!(err.message, "Internal server error");
    }

    #[test]
    fn test_upstream_errors_surface_verbatim() {
        let err: PaymentError = ServiceError::Upstream("Your card was declined.".to_string()).into();
        assert_eq!(err.kind, HandlerErrorKind::Upstream);
        assert_eq!(err.message, "Your card was declined.");
    }
}
