//! Picks the signing key for an issuance request.

use chrono::{DateTime, Utc};
use rsa::RsaPrivateKey;
use std::sync::Arc;

use crate::domain::value_objects::KeyIntent;
use crate::errors::DomainError;
use crate::repositories::SigningKeyRepository;
use crate::services::key_codec::KeyCodec;

/// A key chosen for signing, parsed and ready to use
#[derive(Clone)]
pub struct SelectedKey {
    pub kid: i64,
    pub key_pair: RsaPrivateKey,
    /// Stored PEM the key pair was parsed from
    pub material: Vec<u8>,
    pub expires_at: DateTime<Utc>,
}

impl std::fmt::Debug for SelectedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectedKey")
            .field("kid", &self.kid)
            .field("expires_at", &self.expires_at)
            .finish_non_exhaustive()
    }
}

/// Queries the key store for a key matching an intent
pub struct KeySelector<R: SigningKeyRepository> {
    repository: Arc<R>,
}

impl<R: SigningKeyRepository> Clone for KeySelector<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: SigningKeyRepository> KeySelector<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn select(&self, intent: KeyIntent) -> Result<Option<SelectedKey>, DomainError> {
        self.select_at(intent, Utc::now()).await
    }

    /// Selects the lowest-id key for `intent` as of `now`
    ///
    /// # Returns
    /// * `Ok(Some(SelectedKey))` - A key was found and parsed
    /// * `Ok(None)` - No key matches; an expected outcome, e.g. when no
    ///   pre-expired key was seeded
    /// * `Err(DomainError::Storage)` - The store failed
    /// * `Err(DomainError::Key)` - The stored material does not parse
    pub async fn select_at(
        &self,
        intent: KeyIntent,
        now: DateTime<Utc>,
    ) -> Result<Option<SelectedKey>, DomainError> {
        let Some(key) = self.repository.find_one(intent.predicate(now)).await? else {
            tracing::debug!(%intent, "no signing key matches");
            return Ok(None);
        };

        let key_pair = KeyCodec::deserialize(&key.material).map_err(|e| {
            tracing::error!(kid = key.id, error = %e, "stored signing key does not parse");
            e
        })?;
        tracing::debug!(%intent, kid = key.id, "selected signing key");

        Ok(Some(SelectedKey {
            kid: key.id,
            key_pair,
            material: key.material,
            expires_at: key.expires_at,
        }))
    }
}
