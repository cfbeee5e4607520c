/// Error types for the API surface.
///
/// Every handler failure maps to one of the variants below, and every
/// variant renders as a JSON body of the shape `{"error": "<message>"}`
/// with the matching HTTP status. Persistence failures are deliberately
/// absent: the message store is best-effort and its errors never reach
/// the caller.

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use std::error::Error as StdError;
use std::fmt;

/// Validation failures on request payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Body absent or not parseable as JSON.
    MissingPayload,
    /// The hidden honeypot field was filled in.
    BotDetected,
    /// A field exceeds its length bound.
    FieldTooLong,
    /// name, email or message empty after trimming.
    MissingRequiredFields,
    /// Email fails the loose shape check.
    InvalidEmail,
    /// Alert simulation called without rule or log text.
    MissingAlertFields,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingPayload => write!(f, "No data provided"),
            ValidationError::BotDetected => write!(f, "Bot detected"),
            ValidationError::FieldTooLong => write!(f, "Field too long"),
            ValidationError::MissingRequiredFields => write!(f, "All fields required"),
            ValidationError::InvalidEmail => write!(f, "Invalid email"),
            ValidationError::MissingAlertFields => write!(f, "Rule and log required"),
        }
    }
}

impl StdError for ValidationError {}

/// Central error type for request handlers.
#[derive(Debug)]
pub enum ApiError {
    RateLimitExceeded,
    CsrfMismatch,
    Validation(ValidationError),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::RateLimitExceeded => write!(f, "Rate limit exceeded"),
            ApiError::CsrfMismatch => write!(f, "Invalid CSRF token"),
            ApiError::Validation(e) => write!(f, "{}", e),
        }
    }
}

impl StdError for ApiError {}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err)
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        let request_id = uuid::Uuid::new_v4().to_string();
        match self {
            ApiError::RateLimitExceeded => {
                tracing::warn!(request_id = %request_id, "Rate limit exceeded");
            }
            ApiError::CsrfMismatch => {
                tracing::warn!(request_id = %request_id, "CSRF validation failed");
            }
            ApiError::Validation(e) => {
                tracing::warn!(request_id = %request_id, error = %e, "Validation error");
            }
        }

        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "error": self.to_string() }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
            ApiError::CsrfMismatch => StatusCode::FORBIDDEN,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}
