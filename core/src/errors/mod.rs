//! Domain error types and error handling.

mod types;


pub use types::{KeyError, TokenError};

use thiserror::Error;

/// Core domain errors
///
/// Every fallible operation in the crate returns this type. The HTTP layer
/// maps each variant to a status code deterministically.
#[derive(Error, Debug)]
pub enum DomainError {
    /// The key store could not be reached or refused a write.
    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    pub fn storage(message: impl Into<String>) -> Self {
        DomainError::Storage {
            message: message.into(),
        }
    }

    /// Whether the error means "nothing matched" rather than "something broke"
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::Token(TokenError::KeyNotFound { .. }))
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
