//! Error types for key material handling and token issuance

use thiserror::Error;

use crate::domain::value_objects::KeyIntent;

/// Key codec errors
///
/// Raised while generating, serializing or parsing RSA key material.
#[derive(Error, Debug)]
pub enum KeyError {
    #[error("Malformed key material: {message}")]
    MalformedKey { message: String },

    #[error("Key generation failed: {message}")]
    GenerationFailed { message: String },

    #[error("Key encoding failed: {message}")]
    EncodingFailed { message: String },
}

/// Token issuance errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("No {intent} signing key found")]
    KeyNotFound { intent: KeyIntent },

    #[error("Token signing failed: {message}")]
    SigningFailed { message: String },
}
