//! Signing key and token configuration module

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::env_or;

/// What the startup seeder does when the store already holds keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedPolicy {
    /// Insert a fresh valid and a fresh expired key on every start.
    /// Rows accumulate in a durable store.
    #[default]
    Always,
    /// Only insert a key for an intent that has no matching key yet.
    IfMissing,
}

impl fmt::Display for SeedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedPolicy::Always => write!(f, "always"),
            SeedPolicy::IfMissing => write!(f, "if_missing"),
        }
    }
}

impl FromStr for SeedPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "always" => Ok(SeedPolicy::Always),
            "if_missing" | "if-missing" | "ifmissing" => Ok(SeedPolicy::IfMissing),
            _ => Err(format!("Invalid seed policy: {}", s)),
        }
    }
}

/// Key generation, seeding and token lifetime settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KeyConfig {
    /// RSA modulus size in bits
    #[serde(default = "default_key_size_bits")]
    pub key_size_bits: usize,

    /// Seconds between startup and the seeded keys' expiry, forward for the
    /// valid key and backward for the expired one
    #[serde(default = "default_lifetime_seconds")]
    pub key_lifetime_seconds: i64,

    /// Seconds added to (or subtracted from) "now" for a token's `exp`
    #[serde(default = "default_lifetime_seconds")]
    pub token_lifetime_seconds: i64,

    /// Startup seeding behaviour
    #[serde(default)]
    pub seed_policy: SeedPolicy,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            key_size_bits: default_key_size_bits(),
            key_lifetime_seconds: default_lifetime_seconds(),
            token_lifetime_seconds: default_lifetime_seconds(),
            seed_policy: SeedPolicy::default(),
        }
    }
}

impl KeyConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            key_size_bits: env_or("KEY_SIZE_BITS", defaults.key_size_bits),
            key_lifetime_seconds: env_or("KEY_LIFETIME_SECONDS", defaults.key_lifetime_seconds),
            token_lifetime_seconds: env_or(
                "TOKEN_LIFETIME_SECONDS",
                defaults.token_lifetime_seconds,
            ),
            seed_policy: env_or("KEY_SEED_POLICY", defaults.seed_policy),
        }
    }

    /// Set the seeding policy
    pub fn with_seed_policy(mut self, policy: SeedPolicy) -> Self {
        self.seed_policy = policy;
        self
    }
}

fn default_key_size_bits() -> usize {
    2048
}

fn default_lifetime_seconds() -> i64 {
    3600 // 1 hour
}
