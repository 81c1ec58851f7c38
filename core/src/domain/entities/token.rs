//! Claims carried by issued bearer tokens.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::KeyIntent;

/// Placeholder subject written into every token
pub const TOKEN_SUBJECT: &str = "username";

/// `typ` header value
pub const TOKEN_TYPE: &str = "JWT";

/// Claims structure for the JWT payload
///
/// `exp` is the token's own expiry. It mirrors the requested scenario and
/// is unrelated to the signing key's `expires_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Fixed test subject
    pub user: String,

    /// Expiration timestamp
    pub exp: i64,
}

impl TokenClaims {
    /// Claims for `intent` at `now`: `exp` lies `lifetime` ahead for a valid
    /// token and `lifetime` behind for an expired one.
    pub fn for_intent(intent: KeyIntent, now: DateTime<Utc>, lifetime: Duration) -> Self {
        let exp = match intent {
            KeyIntent::Valid => now + lifetime,
            KeyIntent::Expired => now - lifetime,
        };

        Self {
            user: TOKEN_SUBJECT.to_string(),
            exp: exp.timestamp(),
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}
