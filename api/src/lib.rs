//! # Keywarden API
//!
//! actix-web boundary: request routing, error-to-status mapping, telemetry
//! and server startup. Handlers are generic over the key store so the same
//! application runs against SQLite in production and in tests.

pub mod app;
pub mod handlers;
pub mod routes;
pub mod startup;
pub mod telemetry;

pub use app::{create_app, AppState};
pub use startup::Application;
