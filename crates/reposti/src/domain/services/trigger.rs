//! Trigger Filter
//!
//! Decides whether an inbound message event should start a repost search.
//! Platforms often unfurl links after the message is sent, so an edit
//! triggers exactly once: when the first embed appears.

use crate::domain::{Message, UserId};

/// Facts about the observing bot needed to filter events
#[derive(Debug, Clone, Copy)]
pub struct TriggerContext {
    pub bot_id: UserId,
}

impl TriggerContext {
    pub fn new(bot_id: impl Into<UserId>) -> Self {
        Self {
            bot_id: bot_id.into(),
        }
    }
}

/// Should a newly created message be searched for?
pub fn should_search_created(message: &Message, ctx: &TriggerContext) -> bool {
    is_searchable(message, ctx)
}

/// Should an edit be searched for?
///
/// Only when `before` is known, had no embeds, and `after` has gained one.
pub fn should_search_edited(
    before: Option<&Message>,
    after: &Message,
    ctx: &TriggerContext,
) -> bool {
    let Some(before) = before else {
        return false;
    };

    !before.has_embeds() && after.has_embeds() && is_searchable(after, ctx)
}

fn is_searchable(message: &Message, ctx: &TriggerContext) -> bool {
    if message.content.is_empty() || message.author_id == ctx.bot_id {
        return false;
    }

    // Direct conversations have no space
    if message.space_id.is_none() {
        return false;
    }

    message
        .first_embed()
        .is_some_and(|embed| !embed.kind.is_media_attachment())
}
