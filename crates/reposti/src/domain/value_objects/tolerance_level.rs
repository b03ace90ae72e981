//! ToleranceLevel - How loudly a user wants reposts called out
//!
//! Users adjust it with the `spice` command; the bot scales its response to
//! a detected repost accordingly.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ToleranceLevel {
    /// Reactions only
    #[default]
    Mild,
    /// Reactions and a reply pointing at the original
    Medium,
    /// Reactions and an image reply
    Hot,
}

impl ToleranceLevel {
    pub const MIN: ToleranceLevel = ToleranceLevel::Mild;
    pub const MAX: ToleranceLevel = ToleranceLevel::Hot;

    /// Stored integer representation
    pub fn level(self) -> i64 {
        match self {
            ToleranceLevel::Mild => 0,
            ToleranceLevel::Medium => 1,
            ToleranceLevel::Hot => 2,
        }
    }

    /// Parse the stored integer; out-of-range values are rejected
    pub fn from_level(level: i64) -> Option<Self> {
        match level {
            0 => Some(ToleranceLevel::Mild),
            1 => Some(ToleranceLevel::Medium),
            2 => Some(ToleranceLevel::Hot),
            _ => None,
        }
    }

    /// One step spicier, `None` at the top
    pub fn raised(self) -> Option<Self> {
        Self::from_level(self.level() + 1)
    }

    /// One step milder, `None` at the bottom
    pub fn lowered(self) -> Option<Self> {
        Self::from_level(self.level() - 1)
    }
}

impl std::fmt::Display for ToleranceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToleranceLevel::Mild => write!(f, "Mild"),
            ToleranceLevel::Medium => write!(f, "Medium"),
            ToleranceLevel::Hot => write!(f, "HOT"),
        }
    }
}
