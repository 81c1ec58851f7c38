
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, TokenData, Validation};
use rsa::RsaPrivateKey;

use crate::domain::entities::TokenClaims;
use crate::services::key_codec::KeyCodec;

/// Verifies `token` against the public half of `key_pair`, ignoring `exp`
pub(super) fn verify(token: &str, key_pair: &RsaPrivateKey) -> TokenData<TokenClaims> {
    let (n, e) = KeyCodec::public_parameters(key_pair);
    let decoding_key = DecodingKey::from_rsa_components(
        &KeyCodec::encode_unsigned_int(&n),
        &KeyCodec::encode_unsigned_int(&e),
    )
    .unwrap();

    let mut validation = Validation::new(Algorithm::RS256);
    validation.validate_exp = false;
    decode::<TokenClaims>(token, &decoding_key, &validation).unwrap()
}

pub(super) fn header_kid(token: &str) -> Option<String> {
    decode_header(token).unwrap().kid
}
