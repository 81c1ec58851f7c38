//! Shared configuration for the Keywarden server crates
//!
//! Every crate in the workspace reads its settings through the types in
//! [`config`]. Values come from the process environment (optionally seeded
//! from a `.env` file by the binary) and fall back to development defaults.

pub mod config;

pub use config::{
    AppConfig, DatabaseConfig, Environment, KeyConfig, LogFormat, LoggingConfig, SeedPolicy,
    ServerConfig,
};
