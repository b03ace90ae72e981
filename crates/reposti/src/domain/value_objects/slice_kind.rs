//! SliceKind - Which part of a channel's history is examined

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SliceKind {
    /// Up to 100 most recent messages older than the target
    Recent,
    /// The channel's pinned messages, unordered
    Pinned,
}

impl std::fmt::Display for SliceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SliceKind::Recent => write!(f, "recent"),
            SliceKind::Pinned => write!(f, "pinned"),
        }
    }
}
