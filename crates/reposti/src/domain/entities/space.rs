//! Space and Channel Entities
//!
//! A space (guild) is an ordered set of channels. The order of
//! `Space::channels` is the enumeration order used during a search.

use serde::{Deserialize, Serialize};

use super::ids::{ChannelId, SpaceId};
use crate::domain::value_objects::ChannelKind;

/// A channel inside a space
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: ChannelId,
    pub name: String,
    pub kind: ChannelKind,
    /// Whether the bot has read access
    pub viewable: bool,
}

impl Channel {
    /// Create a viewable text channel
    pub fn text(id: impl Into<ChannelId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: ChannelKind::Text,
            viewable: true,
        }
    }

    pub fn with_kind(mut self, kind: ChannelKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_viewable(mut self, viewable: bool) -> Self {
        self.viewable = viewable;
        self
    }

    pub fn is_text(&self) -> bool {
        self.kind == ChannelKind::Text
    }
}

/// Multi-channel community container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    pub id: SpaceId,
    pub name: String,
    pub channels: Vec<Channel>,
}

impl Space {
    pub fn new(id: impl Into<SpaceId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            channels: Vec::new(),
        }
    }

    /// Append a channel at the end of the enumeration order
    pub fn with_channel(mut self, channel: Channel) -> Self {
        self.channels.push(channel);
        self
    }

    /// Look up a channel by ID
    pub fn channel(&self, id: ChannelId) -> Option<&Channel> {
        self.channels.iter().find(|c| c.id == id)
    }
}
