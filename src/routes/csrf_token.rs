use actix_web::HttpResponse;

use crate::csrf;

/// Issues a fresh CSRF token. The token travels both in the response
/// body and in the `csrf_token` cookie; the client echoes it back in the
/// X-CSRF-Token header on protected requests (double-submit pattern).
pub async fn issue_csrf_token() -> HttpResponse {
    let token = csrf::generate_token();

    HttpResponse::Ok()
        .cookie(csrf::token_cookie(&token))
        .json(serde_json::json!({ "token": token }))
}
