//! JSON Web Key Set published at the discovery endpoint.

use serde::{Deserialize, Serialize};

pub const JWK_KEY_TYPE: &str = "RSA";
pub const JWK_USE: &str = "sig";
pub const JWK_ALGORITHM: &str = "RS256";

/// Public RSA key record
///
/// `n` and `e` are unpadded base64url encodings of the big-endian modulus
/// and exponent. Field order matches the published document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jwk {
    pub alg: String,
    pub kty: String,
    #[serde(rename = "use")]
    pub key_use: String,
    pub kid: String,
    pub n: String,
    pub e: String,
}

impl Jwk {
    /// RS256 signature key record
    pub fn rsa_signing(kid: impl Into<String>, n: String, e: String) -> Self {
        Self {
            alg: JWK_ALGORITHM.to_string(),
            kty: JWK_KEY_TYPE.to_string(),
            key_use: JWK_USE.to_string(),
            kid: kid.into(),
            n,
            e,
        }
    }
}

/// `{"keys": [...]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwkSet {
    pub keys: Vec<Jwk>,
}

impl JwkSet {
    pub fn find(&self, kid: &str) -> Option<&Jwk> {
        self.keys.iter().find(|key| key.kid == kid)
    }

    pub fn kids(&self) -> Vec<&str> {
        self.keys.iter().map(|key| key.kid.as_str()).collect()
    }
}
