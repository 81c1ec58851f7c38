//! Builds the JWKS document from the key store

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::domain::entities::SigningKey;
use crate::domain::value_objects::{ExpiryPredicate, Jwk, JwkSet};
use crate::errors::{DomainError, KeyError};
use crate::repositories::SigningKeyRepository;
use crate::services::key_codec::KeyCodec;

/// Publishes the public half of every unexpired key
///
/// Read-only: publishing never touches the store beyond a single query, so
/// repeated calls with the same `now` return the same document.
pub struct DiscoveryPublisher<R: SigningKeyRepository> {
    repository: Arc<R>,
}

impl<R: SigningKeyRepository> Clone for DiscoveryPublisher<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: SigningKeyRepository> DiscoveryPublisher<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn publish(&self) -> Result<JwkSet, DomainError> {
        self.publish_at(Utc::now()).await
    }

    /// Key set of all keys with `expires_at > now`, ordered by id
    ///
    /// # Returns
    /// * `Ok(JwkSet)` - Possibly empty set
    /// * `Err(DomainError::Storage)` - The store failed
    /// * `Err(DomainError::Key)` - A stored key does not parse; the whole
    ///   document is withheld rather than published partially
    pub async fn publish_at(&self, now: DateTime<Utc>) -> Result<JwkSet, DomainError> {
        let keys = self
            .repository
            .find_all(ExpiryPredicate::ExpiresAfter(now))
            .await?;

        let keys = keys
            .iter()
            .map(Self::to_jwk)
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(count = keys.len(), "published key set");

        Ok(JwkSet { keys })
    }

    fn to_jwk(key: &SigningKey) -> Result<Jwk, KeyError> {
        let key_pair = KeyCodec::deserialize(&key.material).map_err(|e| {
            tracing::error!(kid = key.id, error = %e, "stored signing key does not parse");
            e
        })?;
        let (n, e) = KeyCodec::public_parameters(&key_pair);

        Ok(Jwk::rsa_signing(
            key.kid(),
            KeyCodec::encode_unsigned_int(&n),
            KeyCodec::encode_unsigned_int(&e),
        ))
    }
}
