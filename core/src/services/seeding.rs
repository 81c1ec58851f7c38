//! Startup key seeding.

use chrono::{DateTime, Duration, Utc};
use kw_shared::{KeyConfig, SeedPolicy};
use std::sync::Arc;

use crate::domain::value_objects::KeyIntent;
use crate::errors::DomainError;
use crate::repositories::SigningKeyRepository;
use crate::services::key_codec::KeyCodec;

/// Outcome of a seeding run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Id of the valid key inserted by this run
    pub valid_kid: Option<i64>,
    /// Id of the pre-expired key inserted by this run
    pub expired_kid: Option<i64>,
    /// Rows present before seeding
    pub existing_keys: i64,
}

impl SeedReport {
    pub fn inserted(&self) -> usize {
        usize::from(self.valid_kid.is_some()) + usize::from(self.expired_kid.is_some())
    }
}

/// Generates the keys the service needs before it accepts requests
///
/// Two distinct key pairs are generated: one expiring `key_lifetime` after
/// startup and one that expired `key_lifetime` before it.
pub struct KeySeeder<R: SigningKeyRepository> {
    repository: Arc<R>,
    config: KeyConfig,
}

impl<R: SigningKeyRepository> KeySeeder<R> {
    pub fn new(repository: Arc<R>, config: KeyConfig) -> Self {
        Self { repository, config }
    }

    pub async fn seed(&self) -> Result<SeedReport, DomainError> {
        self.seed_at(Utc::now()).await
    }

    /// Seeds the store according to the configured [`SeedPolicy`]
    ///
    /// Key generation runs on the calling task and is CPU bound; call this
    /// before the server starts accepting connections.
    pub async fn seed_at(&self, now: DateTime<Utc>) -> Result<SeedReport, DomainError> {
        let existing_keys = self.repository.count().await?;
        let mut report = SeedReport {
            existing_keys,
            ..SeedReport::default()
        };

        match self.config.seed_policy {
            SeedPolicy::Always => {
                if existing_keys > 0 {
                    tracing::warn!(
                        existing_keys,
                        "key store already holds keys; seeding another pair"
                    );
                }
                report.valid_kid = Some(self.insert_for(KeyIntent::Valid, now).await?);
                report.expired_kid = Some(self.insert_for(KeyIntent::Expired, now).await?);
            }
            SeedPolicy::IfMissing => {
                if self.is_missing(KeyIntent::Valid, now).await? {
                    report.valid_kid = Some(self.insert_for(KeyIntent::Valid, now).await?);
                }
                if self.is_missing(KeyIntent::Expired, now).await? {
                    report.expired_kid = Some(self.insert_for(KeyIntent::Expired, now).await?);
                }
            }
        }

        tracing::info!(
            policy = %self.config.seed_policy,
            valid_kid = ?report.valid_kid,
            expired_kid = ?report.expired_kid,
            existing_keys,
            "seeded signing keys"
        );
        Ok(report)
    }

    async fn is_missing(&self, intent: KeyIntent, now: DateTime<Utc>) -> Result<bool, DomainError> {
        Ok(self
            .repository
            .find_one(intent.predicate(now))
            .await?
            .is_none())
    }

    async fn insert_for(&self, intent: KeyIntent, now: DateTime<Utc>) -> Result<i64, DomainError> {
        let lifetime = Duration::seconds(self.config.key_lifetime_seconds);
        let expires_at = match intent {
            KeyIntent::Valid => now + lifetime,
            KeyIntent::Expired => now - lifetime,
        };

        let key_pair = KeyCodec::generate(self.config.key_size_bits)?;
        let material = KeyCodec::serialize(&key_pair)?;
        let kid = self.repository.insert(&material, expires_at).await?;
        tracing::debug!(%intent, kid, %expires_at, "stored signing key");
        Ok(kid)
    }
}
