//! SQLite repository implementations

mod signing_key_repository_impl;

pub use signing_key_repository_impl::SqliteSigningKeyRepository;
