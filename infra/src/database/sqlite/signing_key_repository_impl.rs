//! SQLite implementation of the SigningKeyRepository trait.
//!
//! Keys live in the `keys` table: `kid` is an autoincrement primary key,
//! `key` the serialized private key and `exp` the expiry in epoch seconds.
//! Every method is a single statement, so SQLite's own locking makes each
//! call atomic.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use kw_core::domain::entities::SigningKey;
use kw_core::domain::value_objects::ExpiryPredicate;
use kw_core::errors::DomainError;
use kw_core::repositories::SigningKeyRepository;

/// SQLite implementation of SigningKeyRepository
#[derive(Clone)]
pub struct SqliteSigningKeyRepository {
    /// Database connection pool
    pool: SqlitePool,
}

impl SqliteSigningKeyRepository {
    /// Create a new SQLite key repository
    ///
    /// The `keys` table must already exist; see
    /// [`DatabasePool::init_schema`](crate::database::DatabasePool::init_schema).
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// `WHERE` clause and bound instant for a predicate
    fn filter(predicate: ExpiryPredicate) -> (&'static str, i64) {
        match predicate {
            ExpiryPredicate::ExpiresAfter(now) => ("exp > ?", now.timestamp()),
            ExpiryPredicate::ExpiresBefore(now) => ("exp < ?", now.timestamp()),
        }
    }

    fn row_to_key(row: &SqliteRow) -> Result<SigningKey, DomainError> {
        let id: i64 = row
            .try_get("kid")
            .map_err(|e| DomainError::storage(format!("Failed to get kid: {}", e)))?;
        let material: Vec<u8> = row
            .try_get("key")
            .map_err(|e| DomainError::storage(format!("Failed to get key: {}", e)))?;
        let exp: i64 = row
            .try_get("exp")
            .map_err(|e| DomainError::storage(format!("Failed to get exp: {}", e)))?;

        SigningKey::from_row(id, material, exp).ok_or_else(|| DomainError::Internal {
            message: format!("Key {} has an out-of-range expiry: {}", id, exp),
        })
    }
}

#[async_trait]
impl SigningKeyRepository for SqliteSigningKeyRepository {
    async fn insert(&self, material: &[u8], expires_at: DateTime<Utc>) -> Result<i64, DomainError> {
        let result = sqlx::query("INSERT INTO keys (key, exp) VALUES (?, ?)")
            .bind(material)
            .bind(expires_at.timestamp())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to insert key: {}", e)))?;

        Ok(result.last_insert_rowid())
    }

    async fn find_one(&self, predicate: ExpiryPredicate) -> Result<Option<SigningKey>, DomainError> {
        let (condition, instant) = Self::filter(predicate);
        let query = format!(
            "SELECT kid, key, exp FROM keys WHERE {} ORDER BY kid ASC LIMIT 1",
            condition
        );

        let row = sqlx::query(&query)
            .bind(instant)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to find key: {}", e)))?;

        row.as_ref().map(Self::row_to_key).transpose()
    }

    async fn find_all(&self, predicate: ExpiryPredicate) -> Result<Vec<SigningKey>, DomainError> {
        let (condition, instant) = Self::filter(predicate);
        let query = format!(
            "SELECT kid, key, exp FROM keys WHERE {} ORDER BY kid ASC",
            condition
        );

        let rows = sqlx::query(&query)
            .bind(instant)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to list keys: {}", e)))?;

        rows.iter().map(Self::row_to_key).collect()
    }

    async fn count(&self) -> Result<i64, DomainError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM keys")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to count keys: {}", e)))
    }
}
