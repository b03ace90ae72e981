//! EmbedKind - Platform type tag of an embed

use serde::{Deserialize, Serialize};

/// Embed classification as reported by the platform
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EmbedKind {
    /// Author-built or generic link preview
    #[default]
    Rich,
    Image,
    Gifv,
    Video,
    Article,
    Link,
    Other(String),
}

impl EmbedKind {
    /// Raw image/gif attachments never start a repost search
    pub fn is_media_attachment(&self) -> bool {
        matches!(self, EmbedKind::Image | EmbedKind::Gifv)
    }
}

impl std::fmt::Display for EmbedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmbedKind::Rich => write!(f, "rich"),
            EmbedKind::Image => write!(f, "image"),
            EmbedKind::Gifv => write!(f, "gifv"),
            EmbedKind::Video => write!(f, "video"),
            EmbedKind::Article => write!(f, "article"),
            EmbedKind::Link => write!(f, "link"),
            EmbedKind::Other(tag) => write!(f, "{}", tag),
        }
    }
}

impl From<&str> for EmbedKind {
    fn from(tag: &str) -> Self {
        match tag.to_lowercase().as_str() {
            "rich" => EmbedKind::Rich,
            "image" => EmbedKind::Image,
            "gifv" => EmbedKind::Gifv,
            "video" => EmbedKind::Video,
            "article" => EmbedKind::Article,
            "link" => EmbedKind::Link,
            other => EmbedKind::Other(other.to_string()),
        }
    }
}

impl std::str::FromStr for EmbedKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(EmbedKind::from(s))
    }
}
