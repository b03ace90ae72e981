//! Tolerance Repository Port
//!
//! Per-user, per-space tolerance levels.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, SpaceId, ToleranceLevel, UserId};

/// Repository interface for tolerance levels
#[async_trait]
pub trait ToleranceRepository: Send + Sync {
    /// Get the stored level, creating a `Mild` entry when none exists
    async fn find_or_create(
        &self,
        user_id: UserId,
        space_id: SpaceId,
    ) -> Result<ToleranceLevel, DomainError>;

    /// Store a level
    async fn save(
        &self,
        user_id: UserId,
        space_id: SpaceId,
        level: ToleranceLevel,
    ) -> Result<(), DomainError>;
}
