/// Contact form validation.
///
/// Checks run in a fixed order: honeypot, length bounds, required
/// fields, email shape. The email check is deliberately loose (an `@`
/// with a dot somewhere after the last `@`), not RFC validation.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;

use crate::error::ValidationError;

pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_EMAIL_LENGTH: usize = 254; // RFC 5321
pub const MAX_MESSAGE_LENGTH: usize = 1000;

lazy_static! {
    // matches iff the text after the last '@' contains a '.'
    static ref EMAIL_SHAPE: Regex = Regex::new(r"@[^@]*\.[^@]*$").unwrap();
}

/// Raw contact submission as deserialized from the request body.
/// `honeypot` is a hidden field; humans never fill it in.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    pub honeypot: Option<String>,
}

/// A submission that passed every check, fields trimmed.
#[derive(Debug, PartialEq, Eq)]
pub struct ValidContact {
    pub name: String,
    pub email: String,
    pub message: String,
}

pub fn validate_contact(form: &ContactForm) -> Result<ValidContact, ValidationError> {
    let name = form.name.as_deref().unwrap_or("").trim();
    let email = form.email.as_deref().unwrap_or("").trim();
    let message = form.message.as_deref().unwrap_or("").trim();
    let honeypot = form.honeypot.as_deref().unwrap_or("");

    if !honeypot.is_empty() {
        return Err(ValidationError::BotDetected);
    }

    if name.chars().count() > MAX_NAME_LENGTH
        || email.chars().count() > MAX_EMAIL_LENGTH
        || message.chars().count() > MAX_MESSAGE_LENGTH
    {
        return Err(ValidationError::FieldTooLong);
    }

    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Err(ValidationError::MissingRequiredFields);
    }

    if !EMAIL_SHAPE.is_match(email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(ValidContact {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    })
}
