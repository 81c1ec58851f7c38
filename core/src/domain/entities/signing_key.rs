//! Signing key entity stored in the key store.

use chrono::{DateTime, TimeZone, Utc};

/// One RSA key pair bound to an expiry instant
///
/// `material` is the PKCS#1 PEM encoding of the private key. The public half
/// is never stored; it is derived from `material` whenever it is needed.
/// `expires_at` is fixed at insertion and has second precision.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningKey {
    /// Store-assigned identifier, published as the `kid`
    pub id: i64,

    /// Serialized private key
    pub material: Vec<u8>,

    /// Instant after which the key no longer appears in discovery
    pub expires_at: DateTime<Utc>,
}

// Private key bytes must not end up in logs.
impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey")
            .field("id", &self.id)
            .field("material", &format_args!("<{} bytes>", self.material.len()))
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

impl SigningKey {
    pub fn new(id: i64, material: Vec<u8>, expires_at: DateTime<Utc>) -> Self {
        Self {
            id,
            material,
            expires_at,
        }
    }

    /// Rebuilds an entity from a stored row, where `exp` is epoch seconds
    pub fn from_row(id: i64, material: Vec<u8>, exp: i64) -> Option<Self> {
        let expires_at = Utc.timestamp_opt(exp, 0).single()?;
        Some(Self::new(id, material, expires_at))
    }

    /// The identifier as it appears in token headers and JWKS records
    pub fn kid(&self) -> String {
        self.id.to_string()
    }

    /// `true` while `expires_at` is strictly in the future
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }

    /// `true` once `expires_at` is strictly in the past
    ///
    /// A key expiring exactly at `now` is neither valid nor expired.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }
}
