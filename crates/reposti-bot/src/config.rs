//! Bot configuration
//!
//! Read from the environment after loading `.env`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use reposti_integration_discord::{DiscordConfig, DEFAULT_CACHE_MAX_MESSAGES};

const DEFAULT_DATABASE_URL: &str = "sqlite://db/spice_store.sqlite?mode=rwc";
const DEFAULT_ALERT_EMOJI: u64 = 848_382_888_096_825_355;
const DEFAULT_MASCOT_EMOJI: u64 = 856_036_233_426_763_777;

/// Custom emoji the bot reacts with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmojiConfig {
    /// Rotating light, first reaction to a repost
    pub alert: u64,
    /// Bot mascot, second reaction to a repost and the "nice" reaction
    pub mascot: u64,
}

impl Default for EmojiConfig {
    fn default() -> Self {
        Self {
            alert: DEFAULT_ALERT_EMOJI,
            mascot: DEFAULT_MASCOT_EMOJI,
        }
    }
}

/// Full bot configuration
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub discord: DiscordConfig,
    pub database_url: String,
    pub giphy_api_key: Option<String>,
    pub emoji: EmojiConfig,
}

impl BotConfig {
    /// Load `.env` (if present) and read the environment
    pub fn from_env() -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!("No .env loaded: {}", e);
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup("DISCORD_TOKEN")
            .filter(|t| !t.is_empty())
            .context("DISCORD_TOKEN not found in environment")?;

        let cache_max_messages = parse_or(&lookup, "REPOSTI_CACHE_MAX_MESSAGES", DEFAULT_CACHE_MAX_MESSAGES)?;
        let mut discord = DiscordConfig::new(token).with_cache_max_messages(cache_max_messages);
        if let Some(guild_id) = parse_opt(&lookup, "REPOSTI_GUILD_ID")? {
            discord = discord.with_guild_id(guild_id);
        }

        let emoji = EmojiConfig {
            alert: parse_or(&lookup, "REPOSTI_ALERT_EMOJI", DEFAULT_ALERT_EMOJI)?,
            mascot: parse_or(&lookup, "REPOSTI_MASCOT_EMOJI", DEFAULT_MASCOT_EMOJI)?,
        };

        Ok(Self {
            discord,
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            giphy_api_key: lookup("GIPHY_API_KEY").filter(|k| !k.is_empty()),
            emoji,
        })
    }

    /// Directory holding a file-backed SQLite database, if any
    pub fn database_dir(&self) -> Option<PathBuf> {
        let path = self.database_url.strip_prefix("sqlite://")?;
        let path = path.split('?').next().unwrap_or(path);
        if path.is_empty() || path == ":memory:" {
            return None;
        }

        Path::new(path)
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(Path::to_path_buf)
    }
}

fn parse_opt<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(key)
        .map(|raw| raw.trim().parse::<T>().with_context(|| format!("Invalid {}: {:?}", key, raw)))
        .transpose()
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    Ok(parse_opt(lookup, key)?.unwrap_or(default))
}
