use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::error::{ApiError, ValidationError};
use crate::triage;

#[derive(Debug, Deserialize)]
pub struct AlertRequest {
    pub rule: Option<String>,
    pub log: Option<String>,
}

/// Runs the mock triage over a submitted detection rule and log excerpt.
/// The rule text only participates in the presence check; the verdict is
/// keyed on the log alone.
pub async fn simulate_alert(body: web::Bytes) -> Result<HttpResponse, ApiError> {
    let request: AlertRequest =
        serde_json::from_slice(&body).map_err(|_| ValidationError::MissingPayload)?;

    let rule = request.rule.as_deref().unwrap_or("").trim();
    let log = request.log.as_deref().unwrap_or("").trim();
    if rule.is_empty() || log.is_empty() {
        return Err(ValidationError::MissingAlertFields.into());
    }

    let result = triage::triage(log);
    tracing::info!(severity = ?result.severity, matched = result.matched, "Alert simulated");

    Ok(HttpResponse::Ok().json(result))
}
