//! Key store trait defining the interface for signing key persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::SigningKey;
use crate::domain::value_objects::ExpiryPredicate;
use crate::errors::DomainError;

/// Repository trait for [`SigningKey`] persistence
///
/// Implementations must make each call atomic with respect to the others and
/// must fail fast with [`DomainError::Storage`] instead of retrying when the
/// medium is unavailable. Keys are never updated or deleted.
#[async_trait]
pub trait SigningKeyRepository: Send + Sync {
    /// Persist a new key
    ///
    /// # Arguments
    /// * `material` - Serialized private key
    /// * `expires_at` - Expiry instant, stored with second precision
    ///
    /// # Returns
    /// * `Ok(i64)` - The new key's id, strictly greater than every id handed
    ///   out before by this store
    /// * `Err(DomainError::Storage)` - The write failed
    ///
    /// # Example
    /// ```no_run
    /// # use chrono::{Duration, Utc};
    /// # use kw_core::repositories::SigningKeyRepository;
    /// # async fn example(repo: &impl SigningKeyRepository, pem: Vec<u8>) -> Result<(), Box<dyn std::error::Error>> {
    /// let kid = repo.insert(&pem, Utc::now() + Duration::hours(1)).await?;
    /// println!("stored key {}", kid);
    /// # Ok(())
    /// # }
    /// ```
    async fn insert(&self, material: &[u8], expires_at: DateTime<Utc>) -> Result<i64, DomainError>;

    /// Find one key matching `predicate`
    ///
    /// When several keys match, the one with the smallest id wins.
    ///
    /// # Returns
    /// * `Ok(Some(SigningKey))` - A matching key
    /// * `Ok(None)` - Nothing matches
    /// * `Err(DomainError::Storage)` - The query failed
    async fn find_one(&self, predicate: ExpiryPredicate) -> Result<Option<SigningKey>, DomainError>;

    /// Find every key matching `predicate`, ordered by id ascending
    async fn find_all(&self, predicate: ExpiryPredicate) -> Result<Vec<SigningKey>, DomainError>;

    /// Number of keys in the store, expired ones included
    async fn count(&self) -> Result<i64, DomainError>;
}
