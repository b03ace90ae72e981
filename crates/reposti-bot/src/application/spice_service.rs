//! Spice Application Service (Use Case)
//!
//! Reads and adjusts a user's tolerance level within one guild.

use std::sync::Arc;

use reposti::{DomainError, SpaceId, ToleranceLevel, ToleranceRepository, UserId};

/// Requested tolerance adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpiceAdjustment {
    More,
    Less,
    Max,
    Min,
}

/// Application service for tolerance operations
pub struct SpiceService<R: ToleranceRepository> {
    repo: Arc<R>,
}

impl<R: ToleranceRepository> SpiceService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Current level, `Mild` for users never seen before
    pub async fn get(&self, user_id: UserId, space_id: SpaceId) -> Result<ToleranceLevel, DomainError> {
        self.repo.find_or_create(user_id, space_id).await
    }

    /// Apply an adjustment and return the new level.
    ///
    /// Fails with `ToleranceLimit` when the level is already at the bound the
    /// adjustment moves toward.
    pub async fn adjust(
        &self,
        user_id: UserId,
        space_id: SpaceId,
        adjustment: SpiceAdjustment,
    ) -> Result<ToleranceLevel, DomainError> {
        let current = self.repo.find_or_create(user_id, space_id).await?;

        let next = match adjustment {
            SpiceAdjustment::More => current.raised(),
            SpiceAdjustment::Less => current.lowered(),
            SpiceAdjustment::Max => Some(ToleranceLevel::MAX).filter(|max| *max != current),
            SpiceAdjustment::Min => Some(ToleranceLevel::MIN).filter(|min| *min != current),
        }
        .ok_or(DomainError::ToleranceLimit { level: current })?;

        self.repo.save(user_id, space_id, next).await?;
        tracing::info!(user_id = %user_id, guild_id = %space_id, level = %next, "Updated tolerance");

        Ok(next)
    }

    pub async fn more(&self, user_id: UserId, space_id: SpaceId) -> Result<ToleranceLevel, DomainError> {
        self.adjust(user_id, space_id, SpiceAdjustment::More).await
    }

    pub async fn less(&self, user_id: UserId, space_id: SpaceId) -> Result<ToleranceLevel, DomainError> {
        self.adjust(user_id, space_id, SpiceAdjustment::Less).await
    }

    pub async fn max(&self, user_id: UserId, space_id: SpaceId) -> Result<ToleranceLevel, DomainError> {
        self.adjust(user_id, space_id, SpiceAdjustment::Max).await
    }

    pub async fn min(&self, user_id: UserId, space_id: SpaceId) -> Result<ToleranceLevel, DomainError> {
        self.adjust(user_id, space_id, SpiceAdjustment::Min).await
    }
}

impl SpiceAdjustment {
    /// Whether the adjustment moves toward `Hot`
    pub fn is_upward(self) -> bool {
        matches!(self, Self::More | Self::Max)
    }
}

impl std::str::FromStr for SpiceAdjustment {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "more" => Ok(Self::More),
            "less" => Ok(Self::Less),
            "max" => Ok(Self::Max),
            "min" => Ok(Self::Min),
            other => Err(DomainError::Validation(format!("Unknown tolerance adjustment: {}", other))),
        }
    }
}
