//! Route handlers
//!
//! - `auth` - `POST /auth` token issuance
//! - `jwks` - `GET /.well-known/jwks.json` key discovery

pub mod auth;
pub mod jwks;
