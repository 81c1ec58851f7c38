//! Token issuer implementation

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::domain::entities::TokenClaims;
use crate::domain::value_objects::KeyIntent;
use crate::errors::{DomainError, TokenError};
use crate::repositories::SigningKeyRepository;
use crate::services::key_selector::{KeySelector, SelectedKey};

use super::config::TokenIssuerConfig;
use super::signer::Rs256Signer;

/// Issues RS256 tokens signed by a key chosen from the key store
pub struct TokenIssuer<R: SigningKeyRepository> {
    selector: KeySelector<R>,
    config: TokenIssuerConfig,
}

impl<R: SigningKeyRepository> Clone for TokenIssuer<R> {
    fn clone(&self) -> Self {
        Self {
            selector: self.selector.clone(),
            config: self.config.clone(),
        }
    }
}

impl<R: SigningKeyRepository> TokenIssuer<R> {
    /// Creates a new token issuer
    ///
    /// # Arguments
    ///
    /// * `repository` - Key store to select signing keys from
    /// * `config` - Issuer configuration
    pub fn new(repository: Arc<R>, config: TokenIssuerConfig) -> Self {
        Self {
            selector: KeySelector::new(repository),
            config,
        }
    }

    pub fn config(&self) -> &TokenIssuerConfig {
        &self.config
    }

    /// Issues a token for `intent` using the current time
    pub async fn issue(&self, intent: KeyIntent) -> Result<String, DomainError> {
        self.issue_at(intent, Utc::now()).await
    }

    /// Issues a token for `intent` as of `now`
    ///
    /// A valid intent signs with an unexpired key and sets `exp` one token
    /// lifetime ahead. An expired intent signs with an already-expired key
    /// and sets `exp` one lifetime behind.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Compact JWT
    /// * `Err(DomainError::Token(TokenError::KeyNotFound))` - No key matches
    /// * `Err(DomainError)` - Store, key material or signing failure
    pub async fn issue_at(
        &self,
        intent: KeyIntent,
        now: DateTime<Utc>,
    ) -> Result<String, DomainError> {
        let Some(selected) = self.selector.select_at(intent, now).await? else {
            tracing::warn!(%intent, "token requested but no matching signing key exists");
            return Err(TokenError::KeyNotFound { intent }.into());
        };

        let token = self.sign(&selected, intent, now)?;
        tracing::info!(%intent, kid = selected.kid, "issued token");
        Ok(token)
    }

    /// Signs claims for `intent` with an already selected key
    pub fn sign(
        &self,
        selected: &SelectedKey,
        intent: KeyIntent,
        now: DateTime<Utc>,
    ) -> Result<String, DomainError> {
        let claims = TokenClaims::for_intent(intent, now, self.config.lifetime());
        let signer = Rs256Signer::from_pem(selected.kid, &selected.material)?;
        Ok(signer.sign(&claims)?)
    }
}
