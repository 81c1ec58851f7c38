//! Database module - SQLite implementations using SQLx
//!
//! This module provides:
//! - Connection pool management and schema bootstrap
//! - The key store repository implementation

pub mod connection;
pub mod sqlite;


// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use sqlite::SqliteSigningKeyRepository;
