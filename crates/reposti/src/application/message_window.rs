//! Message Window
//!
//! Bounded views over a channel's history. The recent window is served from
//! the local cache when the cache can prove it holds enough history, and from
//! a remote fetch otherwise. The two tiers are never merged.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::domain::{
    errors::DomainError, sort_most_recent_first, Channel, Message, SliceKind,
};
use crate::ports::MessageSource;

/// Maximum size of a recent window
pub const RECENT_WINDOW_LIMIT: u8 = 100;

/// Cached message count at which the cache is trusted without a fetch
pub const CACHE_COMPLETENESS_THRESHOLD: usize = 100;

/// Where a recent window is read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowTier {
    Cache,
    Remote,
}

impl WindowTier {
    /// Completeness predicate: trust the cache once it holds enough
    /// qualifying messages, or when it is known to hold everything.
    pub fn select(cached: usize, exhaustive: bool) -> Self {
        if cached >= CACHE_COMPLETENESS_THRESHOLD || exhaustive {
            WindowTier::Cache
        } else {
            WindowTier::Remote
        }
    }
}

/// Read-only window accessor over a message source
pub struct MessageWindow<'a, S: MessageSource + ?Sized> {
    source: &'a S,
}

impl<'a, S: MessageSource + ?Sized> MessageWindow<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Up to `limit` messages in `channel` created strictly before `before`,
    /// most recent first
    pub async fn recent(
        &self,
        channel: &Channel,
        before: DateTime<Utc>,
        limit: u8,
    ) -> Result<Vec<Message>, DomainError> {
        ensure_text(channel)?;

        let cached = self.source.cached_before(channel, before);
        let tier = WindowTier::select(cached.len(), self.source.cache_is_exhaustive(channel));

        let mut messages = match tier {
            WindowTier::Cache => {
                debug!(channel = %channel.name, cached = cached.len(), "Serving window from cache");
                cached
            }
            WindowTier::Remote => {
                info!(
                    channel = %channel.name,
                    cached = cached.len(),
                    "Channel might not be fully cached, fetching from API"
                );
                self.source.fetch_before(channel, before, limit).await?
            }
        };

        messages.retain(|m| m.created_at < before);
        sort_most_recent_first(&mut messages);
        messages.truncate(usize::from(limit));
        Ok(messages)
    }

    /// The channel's pinned messages, unfiltered
    pub async fn pinned(&self, channel: &Channel) -> Result<Vec<Message>, DomainError> {
        ensure_text(channel)?;
        self.source.fetch_pinned(channel).await
    }

    /// Dispatch on slice kind; `before` only applies to recent windows
    pub async fn slice(
        &self,
        channel: &Channel,
        kind: SliceKind,
        before: DateTime<Utc>,
    ) -> Result<Vec<Message>, DomainError> {
        match kind {
            SliceKind::Recent => self.recent(channel, before, RECENT_WINDOW_LIMIT).await,
            SliceKind::Pinned => self.pinned(channel).await,
        }
    }
}

fn ensure_text(channel: &Channel) -> Result<(), DomainError> {
    if channel.is_text() {
        Ok(())
    } else {
        Err(DomainError::ChannelType {
            channel_id: channel.id,
            kind: channel.kind,
        })
    }
}
