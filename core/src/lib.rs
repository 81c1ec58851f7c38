//! # Keywarden Core
//!
//! Domain layer for the Keywarden token issuer: signing key entities, the
//! key store interface, the RSA key codec and the services that select keys,
//! issue RS256 tokens, publish the JWKS document and seed keys at startup.
//! No database or HTTP code lives here.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;


// Re-export commonly used types for convenience
pub use domain::entities::{SigningKey, TokenClaims};
pub use domain::value_objects::{ExpiryPredicate, Jwk, JwkSet, KeyIntent};
pub use errors::{DomainError, DomainResult, KeyError, TokenError};
pub use repositories::SigningKeyRepository;
pub use services::{
    DiscoveryPublisher, KeyCodec, KeySeeder, KeySelector, SeedReport, SelectedKey, TokenIssuer,
    TokenIssuerConfig,
};
