//! Discord Integration for Reposti
//!
//! This crate adapts serenity to the ports of the `reposti` domain library:
//! the gateway cache serves as the local message tier, the HTTP API as the
//! remote tier, and cached guilds as the space directory.
//!
//! # Usage
//!
//! ```rust,ignore
//! use reposti::RepostFinder;
//! use reposti_integration_discord::{DiscordClient, DiscordMessageSource};
//!
//! let source = Arc::new(DiscordMessageSource::new(DiscordClient::new(ctx.http.clone(), ctx.cache.clone())));
//! let finder = RepostFinder::new(source);
//! ```

mod client;
mod config;
pub mod convert;
mod source;

pub use client::DiscordClient;
pub use config::{DiscordConfig, DEFAULT_CACHE_MAX_MESSAGES};
pub use source::DiscordMessageSource;
