//! Mock implementation of SigningKeyRepository for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::SigningKey;
use crate::domain::value_objects::ExpiryPredicate;
use crate::errors::DomainError;

use super::r#trait::SigningKeyRepository;

#[derive(Default)]
struct Data {
    keys: Vec<SigningKey>,
    last_id: i64,
}

/// In-memory key store
///
/// Mirrors the SQLite implementation: ids start at 1 and only grow,
/// `expires_at` is truncated to whole seconds, results come back in id
/// order. `set_unavailable(true)` makes every call fail with a storage
/// error.
#[derive(Clone, Default)]
pub struct MockSigningKeyRepository {
    data: Arc<RwLock<Data>>,
    unavailable: Arc<AtomicBool>,
}

impl MockSigningKeyRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Every stored key, in insertion order
    pub async fn all(&self) -> Vec<SigningKey> {
        self.data.read().await.keys.clone()
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::storage("mock store unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl SigningKeyRepository for MockSigningKeyRepository {
    async fn insert(&self, material: &[u8], expires_at: DateTime<Utc>) -> Result<i64, DomainError> {
        self.check_available()?;
        let mut data = self.data.write().await;

        data.last_id += 1;
        let id = data.last_id;
        let key = SigningKey::from_row(id, material.to_vec(), expires_at.timestamp())
            .ok_or_else(|| DomainError::storage("expiry out of range"))?;
        data.keys.push(key);

        Ok(id)
    }

    async fn find_one(&self, predicate: ExpiryPredicate) -> Result<Option<SigningKey>, DomainError> {
        Ok(self.find_all(predicate).await?.into_iter().next())
    }

    async fn find_all(&self, predicate: ExpiryPredicate) -> Result<Vec<SigningKey>, DomainError> {
        self.check_available()?;
        let data = self.data.read().await;

        // Whole-second comparison, same as the SQL implementation
        let at = predicate.instant().timestamp();
        let mut keys: Vec<SigningKey> = data
            .keys
            .iter()
            .filter(|key| {
                let exp = key.expires_at.timestamp();
                match predicate {
                    ExpiryPredicate::ExpiresAfter(_) => exp > at,
                    ExpiryPredicate::ExpiresBefore(_) => exp < at,
                }
            })
            .cloned()
            .collect();
        keys.sort_by_key(|key| key.id);

        Ok(keys)
    }

    async fn count(&self) -> Result<i64, DomainError> {
        self.check_available()?;
        Ok(self.data.read().await.keys.len() as i64)
    }
}
