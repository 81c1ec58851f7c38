use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use std::collections::HashMap;

use kw_core::domain::value_objects::KeyIntent;
use kw_core::repositories::SigningKeyRepository;

use crate::app::AppState;
use crate::handlers::error::handle_domain_error;

/// Query key that switches the endpoint to expired-key mode
pub const EXPIRED_PARAM: &str = "expired";

/// Intent requested by a query string
///
/// Only the presence of `expired` matters. Its value, a missing value and
/// repeats of the key are all accepted.
pub fn intent_from_query(query: &HashMap<String, String>) -> KeyIntent {
    KeyIntent::from_expired_flag(query.contains_key(EXPIRED_PARAM))
}

/// Handler for POST /auth
///
/// Issues an RS256 token signed by the lowest-id unexpired key. With
/// `?expired` the token is signed by an expired key and carries an `exp`
/// in the past. The request body is ignored.
///
/// # Response
///
/// ## Success (200 OK)
/// The compact JWT as `text/plain`.
///
/// ## Errors
/// - 404 Not Found: `Key not found.` when no key matches the request
/// - 500 Internal Server Error: key store or key material failure
pub async fn issue_token<R>(
    state: web::Data<AppState<R>>,
    query: web::Query<HashMap<String, String>>,
) -> HttpResponse
where
    R: SigningKeyRepository + 'static,
{
    match state.issuer.issue(intent_from_query(&query)).await {
        Ok(token) => HttpResponse::Ok()
            .content_type(ContentType::plaintext())
            .body(token),
        Err(error) => handle_domain_error(&error),
    }
}
