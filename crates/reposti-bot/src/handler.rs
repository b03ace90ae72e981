//! Gateway event handler
//!
//! Routes Discord events to the repost finder, the spice service, and the
//! reply builders.

use std::sync::Arc;
use std::time::Instant;

use serenity::async_trait;
use serenity::builder::{CreateEmbed, CreateInteractionResponse, CreateInteractionResponseMessage, CreateMessage};
use serenity::model::application::{Command, CommandInteraction, Interaction};
use serenity::model::channel::{Message as SerenityMessage, ReactionType};
use serenity::model::event::MessageUpdateEvent;
use serenity::model::gateway::Ready;
use serenity::model::id::{EmojiId, GuildId};
use serenity::prelude::{Context, EventHandler};
use tracing::{debug, error, info, warn};

use reposti::{
    should_search_created, should_search_edited, Channel, GifSearch, Message, RepostFinder, SpaceDirectory,
    SpaceId, ToleranceLevel, TriggerContext, UserId,
};
use reposti_integration_discord::{convert, DiscordClient, DiscordMessageSource};

use crate::adapters::{GiphyClient, SqliteToleranceRepository};
use crate::application::SpiceService;
use crate::commands::{self, BotCommand};
use crate::config::BotConfig;
use crate::replies::{self, FALLBACK_REPLY};

/// Spice service over the SQLite repository
pub type AppSpiceService = SpiceService<SqliteToleranceRepository>;

const RESET_COMMAND: &str = "!reposti";

pub struct Handler {
    config: BotConfig,
    spice: Arc<AppSpiceService>,
    giphy: GiphyClient,
}

impl Handler {
    pub fn new(config: BotConfig, spice: Arc<AppSpiceService>, giphy: GiphyClient) -> Self {
        Self { config, spice, giphy }
    }

    fn alert(&self) -> String {
        replies::emoji("alert", self.config.emoji.alert)
    }

    fn mascot(&self) -> String {
        replies::emoji("reposti", self.config.emoji.mascot)
    }

    async fn gif(&self, query: &str) -> Option<String> {
        match self.giphy.random_gif(query).await {
            Ok(url) => url,
            Err(e) => {
                warn!(query = %query, error = %e, "GIF lookup failed");
                None
            }
        }
    }

    async fn tolerance(&self, user_id: UserId, space_id: SpaceId) -> ToleranceLevel {
        self.spice.get(user_id, space_id).await.unwrap_or_else(|e| {
            warn!(user_id = %user_id, guild_id = %space_id, error = %e, "Falling back to default tolerance");
            ToleranceLevel::default()
        })
    }

    async fn react(&self, ctx: &Context, msg: &SerenityMessage, emoji_id: u64) {
        let reaction = ReactionType::Custom {
            animated: false,
            id: EmojiId::new(emoji_id),
            name: None,
        };
        if let Err(e) = msg.react(ctx, reaction).await {
            warn!(message_id = %msg.id, emoji_id = %emoji_id, error = %e, "Failed to react");
        }
    }

    async fn reply_embed(&self, ctx: &Context, msg: &SerenityMessage, embed: CreateEmbed) {
        let reply = CreateMessage::new().embed(embed).reference_message(msg);
        if let Err(e) = msg.channel_id.send_message(&ctx.http, reply).await {
            error!(message_id = %msg.id, error = %e, "Failed to send reply");
        }
    }

    async fn reply_fallback(&self, ctx: &Context, msg: &SerenityMessage) {
        if let Err(e) = msg.reply(ctx, FALLBACK_REPLY).await {
            error!(message_id = %msg.id, error = %e, "Failed to send fallback reply");
        }
    }

    /// Search the space for an earlier copy of `target` and respond to it
    async fn handle_repost(&self, ctx: &Context, msg: &SerenityMessage, target: &Message) {
        let Some(space_id) = target.space_id else {
            return;
        };
        let start = Instant::now();

        let source = Arc::new(DiscordMessageSource::new(DiscordClient::new(
            ctx.http.clone(),
            ctx.cache.clone(),
        )));

        let space = match source.space(space_id).await {
            Ok(space) => space,
            Err(e) => {
                warn!(guild_id = %space_id, error = %e, "Guild not available for repost search");
                return;
            }
        };

        // Threads and other non-text homes are not searched
        if !space.channel(target.channel_id).is_some_and(Channel::is_text) {
            debug!(channel_id = %target.channel_id, "Home channel is not a guild text channel, skipping");
            return;
        }

        match RepostFinder::new(source).find(target, &space).await {
            Ok(Some(original)) => self.respond_to_repost(ctx, msg, space_id, &original, start).await,
            Ok(None) => debug!(message_id = %target.id, "No repost found"),
            Err(e) => {
                error!(message_id = %target.id, guild = %space.name, error = %e, "Repost search failed");
                self.reply_fallback(ctx, msg).await;
            }
        }
    }

    async fn respond_to_repost(
        &self,
        ctx: &Context,
        msg: &SerenityMessage,
        space_id: SpaceId,
        original: &Message,
        start: Instant,
    ) {
        let level = self.tolerance(UserId::new(msg.author.id.get()), space_id).await;
        info!(
            message_id = %msg.id,
            original_id = %original.id,
            guild_id = %space_id,
            level = %level,
            "🚨 Repost found"
        );

        self.react(ctx, msg, self.config.emoji.alert).await;
        self.react(ctx, msg, self.config.emoji.mascot).await;

        let embed = match level {
            ToleranceLevel::Mild => return,
            ToleranceLevel::Medium => {
                let thumbnail = self.gif("emergency").await;
                replies::medium_embed(
                    &self.alert(),
                    space_id,
                    original,
                    start.elapsed().as_millis(),
                    thumbnail,
                )
            }
            ToleranceLevel::Hot => {
                let image = self.gif("repost").await;
                replies::hot_embed(&self.alert(), start.elapsed().as_millis(), image)
            }
        };

        self.reply_embed(ctx, msg, embed).await;
    }

    async fn handle_nice(&self, ctx: &Context, msg: &SerenityMessage, space_id: SpaceId) {
        info!(message_id = %msg.id, guild_id = %space_id, "Nice found");
        self.react(ctx, msg, self.config.emoji.mascot).await;

        if self.tolerance(UserId::new(msg.author.id.get()), space_id).await == ToleranceLevel::MAX {
            let image = self.gif("nice").await;
            self.reply_embed(ctx, msg, replies::nice_embed(&self.mascot(), image)).await;
        }
    }

    async fn handle_mention(&self, ctx: &Context, msg: &SerenityMessage) {
        if let Some(url) = self.gif("obi wan").await {
            self.reply_embed(ctx, msg, replies::gif_embed(url)).await;
        }
    }

    /// Re-register slash commands when the application owner asks
    async fn handle_reset(&self, ctx: &Context, msg: &SerenityMessage) {
        let is_owner = match ctx.http.get_current_application_info().await {
            Ok(info) => info.owner.as_ref().is_some_and(|owner| owner.id == msg.author.id),
            Err(e) => {
                warn!(error = %e, "Failed to fetch application info");
                false
            }
        };

        if is_owner {
            info!(message_id = %msg.id, "Resetting commands");
            self.register_commands(ctx).await;
        }
    }

    async fn register_commands(&self, ctx: &Context) {
        let definitions = commands::definitions();

        let registered = match self.config.discord.guild_id {
            Some(guild_id) => GuildId::new(guild_id).set_commands(&ctx.http, definitions).await,
            None => Command::set_global_commands(&ctx.http, definitions).await,
        };

        match registered {
            Ok(registered) => info!(count = registered.len(), "✅ Slash commands registered"),
            Err(e) => error!(error = %e, "Failed to register slash commands"),
        }
    }

    async fn run_command(&self, command: &CommandInteraction) -> CreateInteractionResponseMessage {
        let Some(parsed) = BotCommand::from_interaction(command) else {
            info!(command = %command.data.name, "Unhandled command");
            return CreateInteractionResponseMessage::new().content(FALLBACK_REPLY);
        };

        let user_id = UserId::new(command.user.id.get());
        let space_id = command.guild_id.map(|g| SpaceId::new(g.get()));

        match (parsed, space_id) {
            (BotCommand::Coffee, _) => self.gif_response("coffee").await,
            (BotCommand::GoodMerlin, _) => self.gif_response("good morning").await,
            (BotCommand::SpiceGet, Some(space_id)) => {
                let content = match self.spice.get(user_id, space_id).await {
                    Ok(level) => replies::spice_current(level),
                    Err(e) => {
                        error!(user_id = %user_id, error = %e, "Failed to read tolerance");
                        FALLBACK_REPLY.to_string()
                    }
                };
                CreateInteractionResponseMessage::new().content(content)
            }
            (BotCommand::SpiceSet(adjustment), Some(space_id)) => {
                let result = self.spice.adjust(user_id, space_id, adjustment).await;
                if let Err(e) = &result {
                    warn!(user_id = %user_id, adjustment = ?adjustment, error = %e, "Tolerance not changed");
                }
                CreateInteractionResponseMessage::new().content(replies::spice_set_reply(adjustment, &result))
            }
            (BotCommand::SpiceGet | BotCommand::SpiceSet(_), None) => {
                CreateInteractionResponseMessage::new().content(FALLBACK_REPLY)
            }
        }
    }

    async fn gif_response(&self, query: &str) -> CreateInteractionResponseMessage {
        match self.gif(query).await {
            Some(url) => CreateInteractionResponseMessage::new().embed(replies::gif_embed(url)),
            None => CreateInteractionResponseMessage::new().content(FALLBACK_REPLY),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(user = %ready.user.name, guilds = ready.guilds.len(), "🤖 Reposti connected");

        if self.config.discord.enable_slash_commands {
            self.register_commands(&ctx).await;
        }
    }

    async fn message(&self, ctx: Context, msg: SerenityMessage) {
        let message = convert::message(&msg);
        let trigger = TriggerContext::new(ctx.cache.current_user().id.get());

        if should_search_created(&message, &trigger) {
            self.handle_repost(&ctx, &msg, &message).await;
            return;
        }

        let Some(space_id) = message.space_id else {
            return;
        };
        if message.content.is_empty() || message.author_id == trigger.bot_id || message.has_embeds() {
            return;
        }

        if msg.mentions_user_id(trigger.bot_id.get()) {
            self.handle_mention(&ctx, &msg).await;
        } else if replies::is_nice(&message.content) {
            self.handle_nice(&ctx, &msg, space_id).await;
        } else if message.content == RESET_COMMAND {
            self.handle_reset(&ctx, &msg).await;
        }
    }

    async fn message_update(
        &self,
        ctx: Context,
        old_if_available: Option<SerenityMessage>,
        new: Option<SerenityMessage>,
        _event: MessageUpdateEvent,
    ) {
        let Some(msg) = new else {
            return;
        };

        let before = old_if_available.as_ref().map(convert::message);
        let after = convert::message(&msg);
        let trigger = TriggerContext::new(ctx.cache.current_user().id.get());

        if should_search_edited(before.as_ref(), &after, &trigger) {
            self.handle_repost(&ctx, &msg, &after).await;
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            return;
        };

        let response = self.run_command(&command).await;
        if let Err(e) = command
            .create_response(&ctx.http, CreateInteractionResponse::Message(response))
            .await
        {
            error!(command = %command.data.name, error = %e, "Failed to respond to command");
        }
    }
}
