//! Mapping from domain errors to HTTP responses

use actix_web::http::header::ContentType;
use actix_web::{http::StatusCode, HttpResponse};

use kw_core::errors::DomainError;

/// Body of every 404 from the token endpoint
pub const KEY_NOT_FOUND_BODY: &str = "Key not found.";

/// Status code for a domain error
///
/// Issuance failures (no matching key, signing failure) are 404. Store and
/// key material failures are 500.
pub fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Token(_) => StatusCode::NOT_FOUND,
        DomainError::Storage { .. } | DomainError::Key(_) | DomainError::Internal { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Converts a domain error into a response
///
/// 404s carry a fixed plain-text body. 500s carry no body; the cause goes
/// to the log only.
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let status = status_for(error);

    if status == StatusCode::NOT_FOUND {
        tracing::info!(error = %error, "request could not be served");
        return HttpResponse::build(status)
            .content_type(ContentType::plaintext())
            .body(KEY_NOT_FOUND_BODY);
    }

    tracing::error!(error = %error, "request failed");
    HttpResponse::build(status).finish()
}
