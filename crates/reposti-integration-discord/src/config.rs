//! Discord configuration

use serde::{Deserialize, Serialize};

/// Messages kept per channel by the gateway cache
pub const DEFAULT_CACHE_MAX_MESSAGES: usize = 10_000;

/// Configuration for Discord integration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordConfig {
    /// Discord bot token
    pub token: String,
    /// Guild to register slash commands in; global registration when unset
    pub guild_id: Option<u64>,
    /// Whether to register slash commands on startup
    pub enable_slash_commands: bool,
    /// Per-channel message cache size
    pub cache_max_messages: usize,
}

impl DiscordConfig {
    /// Create a new Discord configuration with just a token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Self::default()
        }
    }

    /// Set the guild ID
    pub fn with_guild_id(mut self, guild_id: u64) -> Self {
        self.guild_id = Some(guild_id);
        self
    }

    /// Enable slash commands
    pub fn with_slash_commands(mut self, enable: bool) -> Self {
        self.enable_slash_commands = enable;
        self
    }

    /// Set the per-channel message cache size
    pub fn with_cache_max_messages(mut self, max_messages: usize) -> Self {
        self.cache_max_messages = max_messages;
        self
    }

    /// Gateway cache settings for the serenity client
    pub fn cache_settings(&self) -> serenity::cache::Settings {
        let mut settings = serenity::cache::Settings::default();
        settings.max_messages = self.cache_max_messages;
        settings
    }
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            guild_id: None,
            enable_slash_commands: true,
            cache_max_messages: DEFAULT_CACHE_MAX_MESSAGES,
        }
    }
}
