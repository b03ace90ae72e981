//! SQLite implementation of ToleranceRepository

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use reposti::{DomainError, SpaceId, ToleranceLevel, ToleranceRepository, UserId};

/// SQLite implementation of ToleranceRepository
pub struct SqliteToleranceRepository {
    pool: SqlitePool,
}

impl SqliteToleranceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct ToleranceRow {
    level: i64,
}

impl TryFrom<ToleranceRow> for ToleranceLevel {
    type Error = DomainError;

    fn try_from(row: ToleranceRow) -> Result<Self, Self::Error> {
        ToleranceLevel::from_level(row.level).ok_or_else(|| {
            DomainError::Repository(format!("Stored tolerance level out of range: {}", row.level))
        })
    }
}

#[async_trait]
impl ToleranceRepository for SqliteToleranceRepository {
    async fn find_or_create(
        &self,
        user_id: UserId,
        space_id: SpaceId,
    ) -> Result<ToleranceLevel, DomainError> {
        sqlx::query(
            "INSERT INTO tolerances (user_id, guild_id, level) VALUES (?, ?, ?)
             ON CONFLICT (user_id, guild_id) DO NOTHING",
        )
        .bind(user_id.to_string())
        .bind(space_id.to_string())
        .bind(ToleranceLevel::default().level())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        let row = sqlx::query_as::<_, ToleranceRow>(
            "SELECT level FROM tolerances WHERE user_id = ? AND guild_id = ?",
        )
        .bind(user_id.to_string())
        .bind(space_id.to_string())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        let level = ToleranceLevel::try_from(row)?;
        debug!(user_id = %user_id, guild_id = %space_id, level = %level, "Loaded tolerance");
        Ok(level)
    }

    async fn save(
        &self,
        user_id: UserId,
        space_id: SpaceId,
        level: ToleranceLevel,
    ) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT INTO tolerances (user_id, guild_id, level) VALUES (?, ?, ?)
             ON CONFLICT (user_id, guild_id)
             DO UPDATE SET level = excluded.level, updated_at = CURRENT_TIMESTAMP",
        )
        .bind(user_id.to_string())
        .bind(space_id.to_string())
        .bind(level.level())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(())
    }
}
