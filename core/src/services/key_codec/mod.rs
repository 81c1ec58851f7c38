//! Conversion between in-memory RSA key pairs and their stored form
//!
//! This module handles:
//! - Key pair generation
//! - PKCS#1 PEM serialization without a passphrase
//! - Public parameter extraction and JWK integer encoding

mod codec;


pub use codec::{KeyCodec, PUBLIC_EXPONENT};
