//! Discord API client wrapper
//!
//! Bundles the gateway cache (local, possibly incomplete) with the HTTP
//! client (authoritative, rate limited).

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serenity::builder::GetMessages;
use serenity::cache::Cache;
use serenity::http::Http;
use serenity::model::channel::Message as SerenityMessage;
use serenity::model::id::ChannelId;
use tracing::{debug, error};

use crate::convert;

/// Discord API client
#[derive(Clone)]
pub struct DiscordClient {
    http: Arc<Http>,
    cache: Arc<Cache>,
}

impl DiscordClient {
    /// Wrap the HTTP client and cache of a running serenity client
    pub fn new(http: Arc<Http>, cache: Arc<Cache>) -> Self {
        Self { http, cache }
    }

    /// Cached messages of a channel created before `before`
    pub fn cached_messages(&self, channel_id: u64, before: DateTime<Utc>) -> Vec<SerenityMessage> {
        let channel = ChannelId::new(channel_id);

        self.cache
            .channel_messages(channel)
            .map(|messages| {
                messages
                    .values()
                    .filter(|m| convert::timestamp(&m.timestamp) < before)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Get up to `limit` messages sent before `before`
    pub async fn get_messages_before(
        &self,
        channel_id: u64,
        before: DateTime<Utc>,
        limit: u8,
    ) -> Result<Vec<SerenityMessage>, serenity::Error> {
        let channel = ChannelId::new(channel_id);
        debug!(channel_id = %channel_id, limit = %limit, before = %before, "Fetching messages from Discord");

        let messages = channel
            .messages(
                &self.http,
                GetMessages::new()
                    .before(convert::snowflake_at(before))
                    .limit(limit),
            )
            .await
            .inspect_err(|e| error!(error = %e, channel_id = %channel_id, "Failed to fetch Discord messages"))?;

        Ok(messages)
    }

    /// Get the pinned messages of a channel
    pub async fn get_pins(&self, channel_id: u64) -> Result<Vec<SerenityMessage>, serenity::Error> {
        let channel = ChannelId::new(channel_id);
        debug!(channel_id = %channel_id, "Fetching pinned messages from Discord");

        let pins = channel
            .pins(&self.http)
            .await
            .inspect_err(|e| error!(error = %e, channel_id = %channel_id, "Failed to fetch Discord pins"))?;

        Ok(pins)
    }

    /// Get the underlying HTTP client for advanced operations
    pub fn http(&self) -> &Arc<Http> {
        &self.http
    }

    /// Get the gateway cache
    pub fn cache(&self) -> &Arc<Cache> {
        &self.cache
    }
}
