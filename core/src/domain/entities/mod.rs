//! Domain entities representing persisted and issued objects.

pub mod signing_key;
pub mod token;


// Re-export commonly used types
pub use signing_key::SigningKey;
pub use token::{TokenClaims, TOKEN_SUBJECT, TOKEN_TYPE};
