//! RS256 signing with stored key material

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use crate::domain::entities::{TokenClaims, TOKEN_TYPE};
use crate::errors::TokenError;

/// Signs claims with one stored key, stamping its id into the header
#[derive(Clone)]
pub struct Rs256Signer {
    kid: String,
    encoding_key: EncodingKey,
}

impl std::fmt::Debug for Rs256Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rs256Signer")
            .field("kid", &self.kid)
            .finish_non_exhaustive()
    }
}

impl Rs256Signer {
    /// Creates a signer from PEM-encoded private key material
    ///
    /// # Arguments
    ///
    /// * `kid` - Key id written into the token header
    /// * `material` - PKCS#1 or PKCS#8 PEM bytes as held by the key store
    ///
    /// # Returns
    ///
    /// * `Ok(Rs256Signer)` - Key loaded
    /// * `Err(TokenError::SigningFailed)` - The PEM was rejected by the signer
    pub fn from_pem(kid: i64, material: &[u8]) -> Result<Self, TokenError> {
        let encoding_key =
            EncodingKey::from_rsa_pem(material).map_err(|e| TokenError::SigningFailed {
                message: format!("Invalid private key format: {}", e),
            })?;

        Ok(Self {
            kid: kid.to_string(),
            encoding_key,
        })
    }

    pub fn kid(&self) -> &str {
        &self.kid
    }

    /// Header used for every issued token: RS256, `typ` JWT and the key id
    pub fn header(&self) -> Header {
        let mut header = Header::new(Algorithm::RS256);
        header.typ = Some(TOKEN_TYPE.to_string());
        header.kid = Some(self.kid.clone());
        header
    }

    /// Produces the compact `header.payload.signature` serialization
    pub fn sign(&self, claims: &TokenClaims) -> Result<String, TokenError> {
        encode(&self.header(), claims, &self.encoding_key).map_err(|e| TokenError::SigningFailed {
            message: e.to_string(),
        })
    }
}
