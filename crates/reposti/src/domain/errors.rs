//! Domain Errors
//!
//! Error types for domain operations. Every failure is scoped to the one
//! event that triggered it; nothing here ends the process.

use thiserror::Error;

use super::entities::ChannelId;
use super::value_objects::{ChannelKind, ToleranceLevel};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// A non-text channel was handed to a message accessor
    #[error("Channel {channel_id} is a {kind} channel, expected text")]
    ChannelType {
        channel_id: ChannelId,
        kind: ChannelKind,
    },

    /// Remote fetch failed (rate limit, network, platform error)
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Repository error: {0}")]
    Repository(String),

    /// Tolerance adjustment would leave the range or change nothing
    #[error("Tolerance already at {level}")]
    ToleranceLimit { level: ToleranceLevel },
}

impl DomainError {
    pub fn not_found<T: AsRef<str>, I: std::fmt::Display>(entity_type: T, id: I) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }

    pub fn transport<E: std::fmt::Display>(err: E) -> Self {
        Self::Transport(err.to_string())
    }
}
