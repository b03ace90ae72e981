use std::sync::Arc;

use anyhow::Context;
use serenity::prelude::{Client, GatewayIntents};
use sqlx::sqlite::SqlitePoolOptions;
use tracing_subscriber::EnvFilter;

mod adapters;
mod application;
mod commands;
mod config;
mod handler;
mod replies;

use adapters::{GiphyClient, SqliteToleranceRepository};
use application::SpiceService;
use config::BotConfig;
use handler::Handler;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = BotConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("🌶️  Reposti initializing...");

    if let Some(dir) = config.database_dir() {
        tokio::fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("Failed to create database directory {}", dir.display()))?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to the spice store")?;

    sqlx::migrate!()
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("✅ Database migrations completed");

    let spice = Arc::new(SpiceService::new(Arc::new(SqliteToleranceRepository::new(pool))));

    if config.giphy_api_key.is_none() {
        tracing::warn!("⚠️  No GIPHY_API_KEY set - GIF replies disabled");
    }
    let giphy = GiphyClient::new(config.giphy_api_key.clone());

    let intents = GatewayIntents::non_privileged() | GatewayIntents::MESSAGE_CONTENT;
    let token = config.discord.token.clone();
    let cache_settings = config.discord.cache_settings();

    let mut client = Client::builder(&token, intents)
        .cache_settings(cache_settings)
        .event_handler(Handler::new(config, spice, giphy))
        .await
        .context("Failed to create Discord client")?;

    tracing::info!("🚀 Connecting to Discord");
    client.start().await.context("Discord client stopped")?;

    Ok(())
}
