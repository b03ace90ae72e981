//! Message Entity
//!
//! An immutable snapshot of a chat message as observed by the bot.
//! A message that later acquires embeds (link unfurling) is observed as a
//! new snapshot, never mutated in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{ChannelId, MessageId, SpaceId, UserId};
use crate::domain::value_objects::EmbedKind;

/// Rich preview attached to a message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Embed {
    /// Platform type tag ("rich", "image", "gifv", ...)
    pub kind: EmbedKind,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
}

impl Embed {
    /// Create an embed of the given kind with no fields set
    pub fn new(kind: EmbedKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// A message posted in a channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Platform message ID, only used as a tiebreaker when ordering
    pub id: MessageId,
    pub channel_id: ChannelId,
    /// `None` for direct/private conversations
    pub space_id: Option<SpaceId>,
    pub author_id: UserId,
    /// Primary ordering key
    pub created_at: DateTime<Utc>,
    /// Message text, may be empty
    pub content: String,
    /// Only the first embed is ever consulted
    #[serde(default)]
    pub embeds: Vec<Embed>,
}

impl Message {
    /// Create a new message with no embeds, stamped now
    pub fn new(
        id: impl Into<MessageId>,
        channel_id: impl Into<ChannelId>,
        author_id: impl Into<UserId>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            channel_id: channel_id.into(),
            space_id: None,
            author_id: author_id.into(),
            created_at: Utc::now(),
            content: content.into(),
            embeds: Vec::new(),
        }
    }

    /// Set timestamp
    pub fn with_timestamp(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Attach the message to a space
    pub fn with_space(mut self, space_id: impl Into<SpaceId>) -> Self {
        self.space_id = Some(space_id.into());
        self
    }

    /// Append an embed
    pub fn with_embed(mut self, embed: Embed) -> Self {
        self.embeds.push(embed);
        self
    }

    pub fn first_embed(&self) -> Option<&Embed> {
        self.embeds.first()
    }

    pub fn has_embeds(&self) -> bool {
        !self.embeds.is_empty()
    }
}

/// Most recent first, ties broken by the larger id
pub fn sort_most_recent_first(messages: &mut [Message]) {
    messages.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}
