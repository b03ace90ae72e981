//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod giphy;
pub mod sqlite;

// Re-exports
pub use giphy::GiphyClient;
pub use sqlite::SqliteToleranceRepository;
