use actix_web::{web, HttpResponse};

use kw_core::repositories::SigningKeyRepository;

use crate::app::AppState;
use crate::handlers::error::handle_domain_error;

/// Handler for GET /.well-known/jwks.json
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "keys": [
///         {"alg": "RS256", "kty": "RSA", "use": "sig", "kid": "1", "n": "...", "e": "AQAB"}
///     ]
/// }
/// ```
///
/// Expired keys never appear. An empty store yields `{"keys": []}`.
///
/// ## Errors
/// - 500 Internal Server Error: key store or key material failure
pub async fn jwks<R>(state: web::Data<AppState<R>>) -> HttpResponse
where
    R: SigningKeyRepository + 'static,
{
    match state.publisher.publish().await {
        Ok(set) => HttpResponse::Ok().json(set),
        Err(error) => handle_domain_error(&error),
    }
}
