//! Configuration for the token issuer

use chrono::Duration;
use kw_shared::KeyConfig;

/// Configuration for the token issuer
#[derive(Debug, Clone)]
pub struct TokenIssuerConfig {
    /// Distance between issuance time and the token's `exp`, in seconds.
    /// Applied forward for valid tokens and backward for expired ones.
    pub token_lifetime_seconds: i64,
}

impl Default for TokenIssuerConfig {
    fn default() -> Self {
        Self {
            token_lifetime_seconds: 3600,
        }
    }
}

impl From<&KeyConfig> for TokenIssuerConfig {
    fn from(keys: &KeyConfig) -> Self {
        Self {
            token_lifetime_seconds: keys.token_lifetime_seconds,
        }
    }
}

impl TokenIssuerConfig {
    pub fn lifetime(&self) -> Duration {
        Duration::seconds(self.token_lifetime_seconds)
    }
}
