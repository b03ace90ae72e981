//! GIF Search Service Port
//!
//! Abstract interface for picking a reaction GIF.

use async_trait::async_trait;

use crate::domain::errors::DomainError;

/// Service interface for GIF lookups
#[async_trait]
pub trait GifSearch: Send + Sync {
    /// URL of a random GIF matching `query`, or `None` when nothing matched
    async fn random_gif(&self, query: &str) -> Result<Option<String>, DomainError>;
}
