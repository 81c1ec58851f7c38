//! # Infrastructure Layer
//!
//! Concrete persistence for Keywarden. The key store lives in a single
//! SQLite table accessed through a `sqlx` connection pool; the repository
//! implements [`kw_core::repositories::SigningKeyRepository`].

// Re-export core types for convenience
pub use kw_core::errors::*;

/// Database module - SQLite implementations using SQLx
pub mod database;

pub use database::{DatabasePool, PoolStatistics, SqliteSigningKeyRepository};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Schema bootstrap error
    #[error("Migration error: {0}")]
    Migration(String),
}
