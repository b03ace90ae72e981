//! serenity model to domain conversions

use chrono::{DateTime, Utc};
use serenity::model::channel::{ChannelType, Embed as SerenityEmbed, GuildChannel, Message as SerenityMessage};
use serenity::model::id::MessageId as SerenityMessageId;
use serenity::model::Timestamp;

use reposti::{Channel, ChannelKind, Embed, EmbedKind, Message};

/// First second of 2015, the zero point of Discord snowflakes (ms)
pub const DISCORD_EPOCH_MS: i64 = 1_420_070_400_000;

/// Convert serenity's time::OffsetDateTime-backed timestamp to chrono
pub fn timestamp(ts: &Timestamp) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(ts.unix_timestamp(), ts.nanosecond()).unwrap_or_else(Utc::now)
}

/// Smallest snowflake created at `instant`; messages with a lower id are older.
///
/// Instants before the Discord epoch clamp to the first valid id.
pub fn snowflake_at(instant: DateTime<Utc>) -> SerenityMessageId {
    let since_epoch = (instant.timestamp_millis() - DISCORD_EPOCH_MS).max(0) as u64;
    SerenityMessageId::new((since_epoch << 22).max(1))
}

pub fn embed(embed: &SerenityEmbed) -> Embed {
    Embed {
        kind: embed
            .kind
            .as_deref()
            .map(EmbedKind::from)
            .unwrap_or_default(),
        title: embed.title.clone(),
        description: embed.description.clone(),
        url: embed.url.clone(),
    }
}

pub fn message(msg: &SerenityMessage) -> Message {
    let mut converted = Message::new(
        msg.id.get(),
        msg.channel_id.get(),
        msg.author.id.get(),
        msg.content.clone(),
    )
    .with_timestamp(timestamp(&msg.timestamp));

    if let Some(guild_id) = msg.guild_id {
        converted = converted.with_space(guild_id.get());
    }

    converted.embeds = msg.embeds.iter().map(embed).collect();
    converted
}

pub fn channel_kind(kind: ChannelType) -> ChannelKind {
    match kind {
        ChannelType::Text => ChannelKind::Text,
        ChannelType::Voice | ChannelType::Stage => ChannelKind::Voice,
        ChannelType::Category => ChannelKind::Category,
        ChannelType::News => ChannelKind::Announcement,
        ChannelType::NewsThread | ChannelType::PublicThread | ChannelType::PrivateThread => {
            ChannelKind::Thread
        }
        ChannelType::Forum => ChannelKind::Forum,
        _ => ChannelKind::Other,
    }
}

pub fn channel(channel: &GuildChannel, viewable: bool) -> Channel {
    Channel {
        id: channel.id.get().into(),
        name: channel.name.clone(),
        kind: channel_kind(channel.kind),
        viewable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_link_preview_embed() {
        let raw: SerenityEmbed = serde_json::from_value(serde_json::json!({
            "type": "article",
            "title": "Cat",
            "description": "funny cat",
            "url": "https://cats.example"
        }))
        .unwrap();

        let converted = embed(&raw);

        assert_eq!(converted.kind, EmbedKind::Article);
        assert_eq!(converted.title.as_deref(), Some("Cat"));
        assert_eq!(converted.description.as_deref(), Some("funny cat"));
        assert_eq!(converted.url.as_deref(), Some("https://cats.example"));
    }

    #[test]
    fn test_gifv_embed_is_media() {
        let raw: SerenityEmbed = serde_json::from_value(serde_json::json!({
            "type": "gifv",
            "url": "https://tenor.com/view/cat"
        }))
        .unwrap();

        let converted = embed(&raw);

        assert!(converted.kind.is_media_attachment());
        assert_eq!(converted.title, None);
    }

    #[test]
    fn test_snowflake_matches_discord_layout() {
        // 2016-04-30 11:18:25.796 UTC, from Discord's snowflake documentation
        let instant = Utc.timestamp_millis_opt(1_462_015_105_796).unwrap();
        let id = snowflake_at(instant);

        assert_eq!(id.get() >> 22, 41_944_705_796);
        assert_eq!(id.get() & ((1 << 22) - 1), 0);
    }

    #[test]
    fn test_snowflake_before_epoch_clamps() {
        let instant = Utc.timestamp_opt(0, 0).unwrap();
        assert_eq!(snowflake_at(instant).get(), 1);
    }

    #[test]
    fn test_channel_kinds() {
        assert_eq!(channel_kind(ChannelType::Text), ChannelKind::Text);
        assert_eq!(channel_kind(ChannelType::News), ChannelKind::Announcement);
        assert_eq!(channel_kind(ChannelType::PublicThread), ChannelKind::Thread);
        assert_eq!(channel_kind(ChannelType::Private), ChannelKind::Other);
    }
}
