//! Value objects representing immutable domain concepts.

pub mod jwks;
pub mod key_intent;

// Re-export commonly used types
pub use jwks::{Jwk, JwkSet, JWK_ALGORITHM, JWK_KEY_TYPE, JWK_USE};
pub use key_intent::{ExpiryPredicate, KeyIntent};
