//! Space Directory Port

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Space, SpaceId};

/// Lookup of a space and its channels
#[async_trait]
pub trait SpaceDirectory: Send + Sync {
    /// Snapshot of the space with its channels in enumeration order.
    ///
    /// The order must be stable for the duration of one search.
    async fn space(&self, space_id: SpaceId) -> Result<Space, DomainError>;
}
