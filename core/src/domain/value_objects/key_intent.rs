//! Which side of its expiry a signing key should be on.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The caller's requested scenario for issuance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyIntent {
    /// Sign with a key that is still published
    Valid,
    /// Sign with a key that has already dropped out of discovery
    Expired,
}

impl KeyIntent {
    /// Intent for the `expired` flag of an issuance request
    pub fn from_expired_flag(expired: bool) -> Self {
        if expired {
            KeyIntent::Expired
        } else {
            KeyIntent::Valid
        }
    }

    /// Store predicate selecting keys for this intent at `now`
    pub fn predicate(self, now: DateTime<Utc>) -> ExpiryPredicate {
        match self {
            KeyIntent::Valid => ExpiryPredicate::ExpiresAfter(now),
            KeyIntent::Expired => ExpiryPredicate::ExpiresBefore(now),
        }
    }
}

impl fmt::Display for KeyIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyIntent::Valid => f.write_str("valid"),
            KeyIntent::Expired => f.write_str("expired"),
        }
    }
}

/// Filter on a key's `expires_at`. Both comparisons are strict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryPredicate {
    /// `expires_at > instant`
    ExpiresAfter(DateTime<Utc>),
    /// `expires_at < instant`
    ExpiresBefore(DateTime<Utc>),
}

impl ExpiryPredicate {
    pub fn instant(&self) -> DateTime<Utc> {
        match self {
            ExpiryPredicate::ExpiresAfter(at) | ExpiryPredicate::ExpiresBefore(at) => *at,
        }
    }

    pub fn matches(&self, expires_at: DateTime<Utc>) -> bool {
        match self {
            ExpiryPredicate::ExpiresAfter(at) => expires_at > *at,
            ExpiryPredicate::ExpiresBefore(at) => expires_at < *at,
        }
    }
}
