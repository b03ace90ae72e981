//! Reply text and embeds
//!
//! Everything the bot says lives here so the handler only decides *when*.

use std::sync::OnceLock;

use regex_lite::Regex;
use serenity::builder::{CreateEmbed, CreateEmbedFooter};

use reposti::{DomainError, Message, SpaceId, ToleranceLevel};

use crate::application::SpiceAdjustment;

pub const FALLBACK_REPLY: &str = "Something went wrong. Ask my boss what's going on.";

const EMBED_COLOUR: u32 = 0xE9_1E_63;
const NICE_PATTERN: &str = r"(\D|\s|^)69(\D|\s|$)";

/// Does the message contain a standalone "69"?
pub fn is_nice(content: &str) -> bool {
    static NICE: OnceLock<Regex> = OnceLock::new();
    NICE.get_or_init(|| Regex::new(NICE_PATTERN).expect("nice pattern is valid"))
        .is_match(content)
}

/// Custom emoji markup; Discord resolves it by id alone
pub fn emoji(name: &str, id: u64) -> String {
    format!("<:{}:{}>", name, id)
}

pub fn jump_link(space_id: SpaceId, message: &Message) -> String {
    format!(
        "https://discord.com/channels/{}/{}/{}",
        space_id, message.channel_id, message.id
    )
}

pub fn repost_description(space_id: SpaceId, original: &Message) -> String {
    format!(
        "I found a similar message sent by <@{}> <t:{}:R>.\n\
         You can find the original [here]({}) in <#{}> to catch up on the discussion.",
        original.author_id,
        original.created_at.timestamp(),
        jump_link(space_id, original),
        original.channel_id,
    )
}

pub fn elapsed_footer(elapsed_ms: u128) -> String {
    format!("This response was calculated in {} ms.", elapsed_ms)
}

fn repost_title(alert: &str) -> String {
    format!("{alert}  REPOST DETECTED  {alert}")
}

/// Medium: description of the original with an "emergency" thumbnail
pub fn medium_embed(
    alert: &str,
    space_id: SpaceId,
    original: &Message,
    elapsed_ms: u128,
    thumbnail: Option<String>,
) -> CreateEmbed {
    let embed = CreateEmbed::new()
        .title(repost_title(alert))
        .description(repost_description(space_id, original))
        .footer(CreateEmbedFooter::new(elapsed_footer(elapsed_ms)))
        .colour(EMBED_COLOUR);

    match thumbnail {
        Some(url) => embed.thumbnail(url),
        None => embed,
    }
}

/// Hot: a full-size "repost" GIF
pub fn hot_embed(alert: &str, elapsed_ms: u128, image: Option<String>) -> CreateEmbed {
    let embed = CreateEmbed::new()
        .title(repost_title(alert))
        .footer(CreateEmbedFooter::new(elapsed_footer(elapsed_ms)))
        .colour(EMBED_COLOUR);

    match image {
        Some(url) => embed.image(url),
        None => embed,
    }
}

pub fn nice_embed(mascot: &str, image: Option<String>) -> CreateEmbed {
    let embed = CreateEmbed::new()
        .title(format!("{mascot} NICE {mascot}"))
        .colour(EMBED_COLOUR);

    match image {
        Some(url) => embed.image(url),
        None => embed,
    }
}

/// Bare image embed for GIF replies
pub fn gif_embed(url: String) -> CreateEmbed {
    CreateEmbed::new().image(url)
}

pub fn spice_current(level: ToleranceLevel) -> String {
    format!("Your spice level is currently **{}**", level)
}

pub fn spice_updated(level: ToleranceLevel) -> String {
    format!("Your spice level is now at **{}**", level)
}

/// Reply for `spice set`, whatever the outcome
pub fn spice_set_reply(adjustment: SpiceAdjustment, result: &Result<ToleranceLevel, DomainError>) -> String {
    match result {
        Ok(level) => spice_updated(*level),
        Err(DomainError::ToleranceLimit { .. }) if adjustment.is_upward() => {
            "You're already at the max spice level.".to_string()
        }
        Err(DomainError::ToleranceLimit { .. }) => "You're already at the min spice level.".to_string(),
        Err(_) => FALLBACK_REPLY.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_is_nice() {
        assert!(is_nice("69"));
        assert!(is_nice("I got 69 points"));
        assert!(is_nice("room 69!"));
        assert!(is_nice("#69"));
        assert!(!is_nice("690"));
        assert!(!is_nice("1969"));
        assert!(!is_nice("six nine"));
    }

    #[test]
    fn test_repost_description() {
        let original = Message::new(30, 20, 40, "https://example.com")
            .with_timestamp(Utc.timestamp_opt(1_623_000_000, 0).unwrap());

        let description = repost_description(SpaceId::new(10), &original);

        assert!(description.contains("<@40>"));
        assert!(description.contains("<t:1623000000:R>"));
        assert!(description.contains("(https://discord.com/channels/10/20/30)"));
        assert!(description.contains("in <#20>"));
    }

    #[test]
    fn test_footer_and_emoji() {
        assert_eq!(elapsed_footer(42), "This response was calculated in 42 ms.");
        assert_eq!(emoji("alert", 7), "<:alert:7>");
        assert_eq!(repost_title("!"), "!  REPOST DETECTED  !");
    }

    #[test]
    fn test_spice_replies() {
        assert_eq!(spice_current(ToleranceLevel::Hot), "Your spice level is currently **HOT**");
        assert_eq!(
            spice_set_reply(SpiceAdjustment::More, &Ok(ToleranceLevel::Medium)),
            "Your spice level is now at **Medium**"
        );
        assert_eq!(
            spice_set_reply(
                SpiceAdjustment::Max,
                &Err(DomainError::ToleranceLimit { level: ToleranceLevel::Hot })
            ),
            "You're already at the max spice level."
        );
        assert_eq!(
            spice_set_reply(
                SpiceAdjustment::Less,
                &Err(DomainError::ToleranceLimit { level: ToleranceLevel::Mild })
            ),
            "You're already at the min spice level."
        );
        assert_eq!(
            spice_set_reply(SpiceAdjustment::Less, &Err(DomainError::Repository("down".into()))),
            FALLBACK_REPLY
        );
    }
}
