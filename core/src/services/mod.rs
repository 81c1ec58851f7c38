//! Services layer
//!
//! Key handling, selection, issuance, discovery and startup seeding, all
//! generic over a [`SigningKeyRepository`](crate::repositories::SigningKeyRepository).

pub mod discovery;
pub mod key_codec;
pub mod key_selector;
pub mod seeding;
pub mod token;

pub use discovery::DiscoveryPublisher;
pub use key_codec::{KeyCodec, PUBLIC_EXPONENT};
pub use key_selector::{KeySelector, SelectedKey};
pub use seeding::{KeySeeder, SeedReport};
pub use token::{Rs256Signer, TokenIssuer, TokenIssuerConfig};
