//! ChannelKind - What a channel carries

use serde::{Deserialize, Serialize};

/// Channel classification; only `Text` channels are searched
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    #[default]
    Text,
    Voice,
    Category,
    Announcement,
    Thread,
    Forum,
    Other,
}

impl std::fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChannelKind::Text => write!(f, "text"),
            ChannelKind::Voice => write!(f, "voice"),
            ChannelKind::Category => write!(f, "category"),
            ChannelKind::Announcement => write!(f, "announcement"),
            ChannelKind::Thread => write!(f, "thread"),
            ChannelKind::Forum => write!(f, "forum"),
            ChannelKind::Other => write!(f, "other"),
        }
    }
}
