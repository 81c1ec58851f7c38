//! Application state and factory
//!
//! Builds the actix-web application around a key store. Two resources exist;
//! every other method and path combination answers 405 with an empty body.
//! The discovery document is only served on its bare path, so a query string
//! there is also a 405.

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{guard, web, App, HttpResponse};
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

use kw_core::repositories::SigningKeyRepository;
use kw_core::services::{DiscoveryPublisher, TokenIssuer, TokenIssuerConfig};

use crate::routes::{auth::issue_token, jwks::jwks};

/// Path of the token endpoint
pub const AUTH_PATH: &str = "/auth";

/// Path of the key discovery document
pub const JWKS_PATH: &str = "/.well-known/jwks.json";

/// Application state that holds shared services
///
/// Both services share one key store; request handlers only read from it.
pub struct AppState<R: SigningKeyRepository> {
    pub issuer: TokenIssuer<R>,
    pub publisher: DiscoveryPublisher<R>,
}

impl<R: SigningKeyRepository> AppState<R> {
    pub fn new(repository: Arc<R>, issuer_config: TokenIssuerConfig) -> Self {
        Self {
            issuer: TokenIssuer::new(Arc::clone(&repository), issuer_config),
            publisher: DiscoveryPublisher::new(repository),
        }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<R>(
    app_state: web::Data<AppState<R>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    R: SigningKeyRepository + 'static,
{
    App::new()
        .app_data(app_state)
        .wrap(TracingLogger::default())
        .service(
            web::resource(AUTH_PATH)
                .route(web::post().to(issue_token::<R>))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource(JWKS_PATH)
                .route(
                    web::get()
                        .guard(guard::fn_guard(|ctx| ctx.head().uri.query().is_none()))
                        .to(jwks::<R>),
                )
                .default_service(web::to(method_not_allowed)),
        )
        .default_service(web::to(method_not_allowed))
}

/// Fallback for every unsupported method or path
async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().finish()
}
