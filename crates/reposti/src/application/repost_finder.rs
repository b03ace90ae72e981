//! Repost Finder
//!
//! Answers "is this message a repost, and if so, of what" by walking the
//! traversal plan and applying the match rule to every slice member. The first
//! match wins; nothing after it is fetched.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{
    errors::DomainError, is_repost_of, plan_search, Message, SearchPhase, Space,
};
use crate::ports::MessageSource;

use super::message_window::MessageWindow;

/// Repost search over one space
pub struct RepostFinder<S: MessageSource> {
    source: Arc<S>,
}

impl<S: MessageSource> RepostFinder<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// First earlier message in `space` that `target` reposts, in traversal order.
    ///
    /// Transport errors propagate; no partial result is synthesized.
    pub async fn find(&self, target: &Message, space: &Space) -> Result<Option<Message>, DomainError> {
        info!(message_id = %target.id, guild = %space.name, "Starting repost search");

        let home = space
            .channel(target.channel_id)
            .ok_or_else(|| DomainError::not_found("Channel", target.channel_id))?;
        let window = MessageWindow::new(self.source.as_ref());
        let mut phase = SearchPhase::HomeRecent;

        for step in plan_search(home, space) {
            if step.phase != phase {
                phase = step.phase;
                match phase {
                    SearchPhase::OthersRecent => {
                        info!(message_id = %target.id, "Not found in original channel, searching others now")
                    }
                    SearchPhase::HomePinned => info!(message_id = %target.id, "Checking pins"),
                    _ => {}
                }
            }

            let slice = window
                .slice(step.channel, step.slice(), target.created_at)
                .await?;
            debug!(
                message_id = %target.id,
                channel = %step.channel.name,
                slice = %step.slice(),
                size = slice.len(),
                "Scanning slice"
            );

            if let Some(original) = slice.into_iter().find(|c| is_repost_of(target, c)) {
                info!(
                    message_id = %target.id,
                    original_id = %original.id,
                    channel = %step.channel.name,
                    slice = %step.slice(),
                    "Repost found"
                );
                return Ok(Some(original));
            }
        }

        info!(message_id = %target.id, "No repost found");
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{at, FakeSource, SourceCall};
    use crate::domain::{Channel, ChannelId, ChannelKind, Embed, EmbedKind};

    const HOME: u64 = 10;
    const B: u64 = 11;
    const C: u64 = 12;

    fn space() -> Space {
        Space::new(1, "guild")
            .with_channel(Channel::text(HOME, "general"))
            .with_channel(Channel::text(B, "b"))
            .with_channel(Channel::text(13, "voice").with_kind(ChannelKind::Voice))
            .with_channel(Channel::text(C, "c"))
    }

    fn cat_embed() -> Embed {
        Embed::new(EmbedKind::Rich)
            .with_title("Cat")
            .with_description("funny cat")
    }

    fn target() -> Message {
        Message::new(1000, HOME, 5, "check this out")
            .with_space(1)
            .with_timestamp(at(100))
            .with_embed(cat_embed())
    }

    fn filler(id: u64, channel: u64, secs: i64) -> Message {
        Message::new(id, channel, 6, format!("chatter {}", id)).with_timestamp(at(secs))
    }

    fn repost(id: u64, channel: u64, secs: i64) -> Message {
        Message::new(id, channel, 7, "https://cats.example")
            .with_timestamp(at(secs))
            .with_embed(cat_embed())
    }

    #[tokio::test]
    async fn test_home_recent_match_short_circuits() {
        let earlier = repost(1, HOME, 10);
        let home_history = vec![earlier.clone(), filler(2, HOME, 50)];
        let source = Arc::new(
            FakeSource::new()
                .with_channel(HOME, home_history.clone(), home_history, vec![])
                .with_channel(B, vec![repost(3, B, 20)], vec![], vec![])
                .exhaustive(HOME),
        );
        let finder = RepostFinder::new(source.clone());

        let found = finder.find(&target(), &space()).await.unwrap();

        assert_eq!(found, Some(earlier));
        assert!(!source.touched(B));
        assert!(!source.touched(C));
        assert!(!source
            .calls()
            .iter()
            .any(|c| matches!(c, SourceCall::Pinned(_))));
    }

    #[tokio::test]
    async fn test_other_recent_beats_pinned() {
        let in_b = repost(3, B, 20);
        let source = Arc::new(
            FakeSource::new()
                .with_channel(HOME, vec![filler(1, HOME, 5)], vec![], vec![repost(2, HOME, 1)])
                .with_channel(B, vec![in_b.clone()], vec![], vec![])
                .with_channel(C, vec![], vec![], vec![repost(4, C, 2)]),
        );
        let finder = RepostFinder::new(source.clone());

        let found = finder.find(&target(), &space()).await.unwrap();

        assert_eq!(found, Some(in_b));
        assert!(!source.touched(C));
    }

    #[tokio::test]
    async fn test_enumeration_order_decides_between_channels() {
        let in_b = repost(3, B, 20);
        // C's copy is more recent, but B comes first
        let in_c = repost(4, C, 90);
        let source = Arc::new(
            FakeSource::new()
                .with_channel(HOME, vec![], vec![], vec![])
                .with_channel(B, vec![in_b.clone()], vec![], vec![])
                .with_channel(C, vec![in_c], vec![], vec![]),
        );
        let finder = RepostFinder::new(source);

        let found = finder.find(&target(), &space()).await.unwrap();

        assert_eq!(found, Some(in_b));
    }

    #[tokio::test]
    async fn test_home_pinned_checked_after_all_recent_windows() {
        let pinned = repost(2, HOME, 1);
        let source = Arc::new(
            FakeSource::new()
                .with_channel(HOME, vec![filler(1, HOME, 5)], vec![], vec![pinned.clone()])
                .with_channel(B, vec![filler(3, B, 6)], vec![], vec![])
                .with_channel(C, vec![filler(4, C, 7)], vec![], vec![repost(5, C, 3)]),
        );
        let finder = RepostFinder::new(source.clone());

        let found = finder.find(&target(), &space()).await.unwrap();

        assert_eq!(found, Some(pinned));
        assert_eq!(
            source.calls(),
            vec![
                SourceCall::Cache(ChannelId::new(HOME)),
                SourceCall::Fetch(ChannelId::new(HOME)),
                SourceCall::Cache(ChannelId::new(B)),
                SourceCall::Fetch(ChannelId::new(B)),
                SourceCall::Cache(ChannelId::new(C)),
                SourceCall::Fetch(ChannelId::new(C)),
                SourceCall::Pinned(ChannelId::new(HOME)),
            ]
        );
    }

    #[tokio::test]
    async fn test_later_message_is_not_a_match() {
        let later = repost(9, HOME, 150);
        let source = Arc::new(
            FakeSource::new().with_channel(HOME, vec![later.clone()], vec![later], vec![]),
        );
        let finder = RepostFinder::new(source);

        let found = finder.find(&target(), &space()).await.unwrap();

        assert_eq!(found, None);
    }

    #[tokio::test]
    async fn test_target_itself_is_excluded() {
        let t = target();
        let source = Arc::new(
            FakeSource::new()
                .with_channel(HOME, vec![t.clone()], vec![t.clone()], vec![])
                .exhaustive(HOME),
        );
        let finder = RepostFinder::new(source);

        assert_eq!(finder.find(&t, &space()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_exhausts_all_phases_without_match() {
        let source = Arc::new(
            FakeSource::new()
                .with_channel(HOME, vec![filler(1, HOME, 5)], vec![], vec![filler(2, HOME, 1)])
                .with_channel(B, vec![filler(3, B, 6)], vec![], vec![filler(4, B, 2)])
                .with_channel(C, vec![filler(5, C, 7)], vec![], vec![filler(6, C, 3)]),
        );
        let finder = RepostFinder::new(source.clone());

        let found = finder.find(&target(), &space()).await.unwrap();

        assert_eq!(found, None);
        let pins: Vec<SourceCall> = source
            .calls()
            .into_iter()
            .filter(|c| matches!(c, SourceCall::Pinned(_)))
            .collect();
        assert_eq!(
            pins,
            vec![
                SourceCall::Pinned(ChannelId::new(HOME)),
                SourceCall::Pinned(ChannelId::new(B)),
                SourceCall::Pinned(ChannelId::new(C)),
            ]
        );
        assert!(!source.touched(13));
    }

    #[tokio::test]
    async fn test_repeated_find_is_stable() {
        let source = Arc::new(
            FakeSource::new()
                .with_channel(HOME, vec![filler(1, HOME, 5)], vec![], vec![])
                .with_channel(B, vec![repost(3, B, 20), repost(8, B, 30)], vec![], vec![])
                .with_channel(C, vec![repost(4, C, 40)], vec![], vec![]),
        );
        let finder = RepostFinder::new(source);

        let first = finder.find(&target(), &space()).await.unwrap();
        let second = finder.find(&target(), &space()).await.unwrap();

        assert_eq!(first, second);
        // Most recent in B's window comes first
        assert_eq!(first.map(|m| m.id.get()), Some(8));
    }

    #[tokio::test]
    async fn test_transport_error_is_not_swallowed() {
        let source = Arc::new(
            FakeSource::new()
                .with_channel(HOME, vec![repost(1, HOME, 10)], vec![], vec![])
                .failing_fetch(),
        );
        let finder = RepostFinder::new(source);

        let result = finder.find(&target(), &space()).await;

        assert!(matches!(result, Err(DomainError::Transport(_))));
    }

    #[tokio::test]
    async fn test_unknown_home_channel() {
        let source = Arc::new(FakeSource::new());
        let finder = RepostFinder::new(source);
        let mut stray = target();
        stray.channel_id = ChannelId::new(77);

        let result = finder.find(&stray, &space()).await;

        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }
}
