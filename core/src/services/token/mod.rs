//! Token issuance
//!
//! Selects a signing key for the requested scenario, builds the claims and
//! signs them with RS256. The header's `kid` names the key that signed.

mod config;
mod service;
mod signer;

#[cfg(test)]
mod tests;

pub use config::TokenIssuerConfig;
pub use service::TokenIssuer;
pub use signer::Rs256Signer;
