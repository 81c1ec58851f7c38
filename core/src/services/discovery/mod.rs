//! Public key discovery document

mod publisher;


pub use publisher::DiscoveryPublisher;
