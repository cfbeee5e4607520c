use actix_web::{web, HttpRequest, HttpResponse};

use crate::csrf::{validate_token, CSRF_COOKIE, CSRF_HEADER};
use crate::error::{ApiError, ValidationError};
use crate::rate_limit::SlidingWindowLimiter;
use crate::storage::{ContactMessage, MessageStore};
use crate::validators::{validate_contact, ContactForm};

/// Handles a contact form submission.
///
/// The rate limiter runs first and records the attempt before CSRF or
/// payload validation, so failed submissions still consume budget.
/// Persistence is best-effort: a storage failure is logged and the
/// client still receives a success response.
pub async fn submit_contact(
    req: HttpRequest,
    body: web::Bytes,
    limiter: web::Data<SlidingWindowLimiter>,
    store: web::Data<MessageStore>,
) -> Result<HttpResponse, ApiError> {
    let client_ip = client_ip(&req);

    if !limiter.check(&client_ip) {
        return Err(ApiError::RateLimitExceeded);
    }

    let header_token = req
        .headers()
        .get(CSRF_HEADER)
        .and_then(|value| value.to_str().ok());
    let cookie = req.cookie(CSRF_COOKIE);
    if !validate_token(header_token, cookie.as_ref().map(|c| c.value())) {
        return Err(ApiError::CsrfMismatch);
    }

    let form: ContactForm =
        serde_json::from_slice(&body).map_err(|_| ValidationError::MissingPayload)?;
    let contact = validate_contact(&form)?;

    let message = ContactMessage::new(contact.name, contact.email, contact.message, client_ip);
    if let Err(e) = store.append(&message) {
        tracing::warn!(error = %e, "Failed to persist contact message");
    }

    tracing::info!(ip = %message.ip, "Contact message received");

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Message received"
    })))
}

/// First X-Forwarded-For entry when present, otherwise the peer address.
fn client_ip(req: &HttpRequest) -> String {
    req.headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .or_else(|| req.peer_addr().map(|addr| addr.ip().to_string()))
        .unwrap_or_else(|| "unknown".to_string())
}
