//! Match Rule
//!
//! Decides whether a candidate message counts as a repost of a target.
//! Identical text always matches. Otherwise the first embeds are compared:
//! titles must agree, then the description decides when the target has one,
//! and the resolved URL decides when it does not. Link previews usually carry
//! a description while image and video previews usually don't.

use crate::domain::{Embed, Message};

/// Does `candidate` count as a repost of `target`?
pub fn is_repost_of(target: &Message, candidate: &Message) -> bool {
    if target.content == candidate.content {
        return true;
    }

    match (target.first_embed(), candidate.first_embed()) {
        (Some(target_embed), Some(candidate_embed)) => embeds_match(target_embed, candidate_embed),
        _ => false,
    }
}

fn embeds_match(target: &Embed, candidate: &Embed) -> bool {
    if target.title != candidate.title {
        return false;
    }

    // Only the target's description selects the branch; an empty one counts as absent.
    match target.description.as_deref().filter(|d| !d.is_empty()) {
        Some(description) => candidate.description.as_deref() == Some(description),
        None => target.url == candidate.url,
    }
}
