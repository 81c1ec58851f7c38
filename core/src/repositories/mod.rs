pub mod signing_key;

pub use signing_key::SigningKeyRepository;

#[cfg(test)]
pub use signing_key::MockSigningKeyRepository;
