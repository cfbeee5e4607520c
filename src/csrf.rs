use actix_web::cookie::{Cookie, SameSite};
use rand::{distributions::Alphanumeric, Rng};

pub const CSRF_COOKIE: &str = "csrf_token";
pub const CSRF_HEADER: &str = "X-CSRF-Token";

/// 43 alphanumeric characters carry just over 256 bits of entropy.
const TOKEN_LENGTH: usize = 43;

/// Generates a random URL-safe CSRF token.
pub fn generate_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

/// Builds the double-submit cookie carrying the token to the client.
pub fn token_cookie(token: &str) -> Cookie<'static> {
    Cookie::build(CSRF_COOKIE, token.to_owned())
        .path("/")
        .secure(true)
        .http_only(true)
        .same_site(SameSite::Strict)
        .finish()
}

/// Double-submit check: header and cookie must both be present,
/// non-empty and equal. No server-side state is consulted, so a token
/// stays valid for as long as the cookie does.
pub fn validate_token(header_token: Option<&str>, cookie_token: Option<&str>) -> bool {
    match (header_token, cookie_token) {
        (Some(header), Some(cookie)) if !header.is_empty() && !cookie.is_empty() => {
            header == cookie
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_tokens_are_url_safe_and_distinct() {
        let first = generate_token();
        let second = generate_token();

        assert_eq!(first.len(), TOKEN_LENGTH);
        assert!(first.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(first, second);
    }

    #[test]
    fn matching_pair_passes() {
        assert!(validate_token(Some("abc123"), Some("abc123")));
    }

    #[test]
    fn mismatch_or_missing_fails() {
        assert!(!validate_token(Some("abc123"), Some("abc124")));
        assert!(!validate_token(None, Some("abc123")));
        assert!(!validate_token(Some("abc123"), None));
        assert!(!validate_token(None, None));
    }

    #[test]
    fn empty_values_fail() {
        assert!(!validate_token(Some(""), Some("")));
        assert!(!validate_token(Some(""), Some("abc123")));
        assert!(!validate_token(Some("abc123"), Some("")));
    }

    #[test]
    fn cookie_carries_double_submit_attributes() {
        let cookie = token_cookie("abc123");

        assert_eq!(cookie.name(), CSRF_COOKIE);
        assert_eq!(cookie.value(), "abc123");
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
    }
}
