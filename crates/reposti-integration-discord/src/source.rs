//! MessageSource and SpaceDirectory implementations for Discord

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serenity::model::channel::GuildChannel;
use serenity::model::id::GuildId;
use tracing::debug;

use reposti::{
    Channel, DomainError, Message, MessageSource, Space, SpaceDirectory, SpaceId,
};

use crate::client::DiscordClient;
use crate::convert;

/// Discord-backed message source and space directory
#[derive(Clone)]
pub struct DiscordMessageSource {
    client: DiscordClient,
}

impl DiscordMessageSource {
    pub fn new(client: DiscordClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &DiscordClient {
        &self.client
    }

    /// Build a space snapshot from the gateway cache.
    ///
    /// Channels are ordered by (position, id), the order Discord displays them in.
    fn cached_space(&self, space_id: SpaceId) -> Result<Space, DomainError> {
        let cache = self.client.cache();
        let bot_id = cache.current_user().id;
        let guild = cache
            .guild(GuildId::new(space_id.get()))
            .ok_or_else(|| DomainError::not_found("Guild", space_id))?;
        let member = guild.members.get(&bot_id);

        let mut guild_channels: Vec<&GuildChannel> = guild.channels.values().collect();
        guild_channels.sort_by_key(|c| (c.position, c.id));

        let channels = guild_channels
            .into_iter()
            .map(|c| {
                let viewable = member
                    .map(|m| guild.user_permissions_in(c, m).view_channel())
                    .unwrap_or(false);
                convert::channel(c, viewable)
            })
            .collect();

        Ok(Space {
            id: space_id,
            name: guild.name.clone(),
            channels,
        })
    }
}

#[async_trait]
impl MessageSource for DiscordMessageSource {
    fn cached_before(&self, channel: &Channel, before: DateTime<Utc>) -> Vec<Message> {
        self.client
            .cached_messages(channel.id.get(), before)
            .iter()
            .map(convert::message)
            .collect()
    }

    async fn fetch_before(
        &self,
        channel: &Channel,
        before: DateTime<Utc>,
        limit: u8,
    ) -> Result<Vec<Message>, DomainError> {
        let messages = self
            .client
            .get_messages_before(channel.id.get(), before, limit)
            .await
            .map_err(|e| DomainError::Transport(format!("Discord API error: {}", e)))?;

        debug!(channel = %channel.name, fetched = messages.len(), "Fetched window from Discord");
        Ok(messages.iter().map(convert::message).collect())
    }

    async fn fetch_pinned(&self, channel: &Channel) -> Result<Vec<Message>, DomainError> {
        let pins = self
            .client
            .get_pins(channel.id.get())
            .await
            .map_err(|e| DomainError::Transport(format!("Discord API error: {}", e)))?;

        Ok(pins.iter().map(convert::message).collect())
    }
}

#[async_trait]
impl SpaceDirectory for DiscordMessageSource {
    async fn space(&self, space_id: SpaceId) -> Result<Space, DomainError> {
        self.cached_space(space_id)
    }
}
