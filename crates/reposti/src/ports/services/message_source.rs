//! Message Source Port
//!
//! Two-tier access to a channel's history: a synchronous local cache that
//! may be incomplete, and an authoritative remote fetch that is rate limited.
//! The engine only reads; the cache is owned by the platform client.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{errors::DomainError, Channel, Message};

/// Cache/fetch provider for channel history
#[async_trait]
pub trait MessageSource: Send + Sync {
    /// Cached messages in `channel` created strictly before `before`, any order.
    ///
    /// Must not block; the cache may have evicted or never seen older entries.
    fn cached_before(&self, channel: &Channel, before: DateTime<Utc>) -> Vec<Message>;

    /// Whether the cache is known to hold the channel's entire history
    fn cache_is_exhaustive(&self, _channel: &Channel) -> bool {
        false
    }

    /// Fetch up to `limit` messages older than `before` from the platform
    async fn fetch_before(
        &self,
        channel: &Channel,
        before: DateTime<Utc>,
        limit: u8,
    ) -> Result<Vec<Message>, DomainError>;

    /// Fetch the channel's pinned messages
    async fn fetch_pinned(&self, channel: &Channel) -> Result<Vec<Message>, DomainError>;
}
