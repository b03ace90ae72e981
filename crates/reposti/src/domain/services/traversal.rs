//! Channel Traversal
//!
//! Builds the ordered list of (channel, slice) pairs a repost search visits:
//!
//! 1. home channel, recent window
//! 2. every other eligible channel, recent window
//! 3. home channel, pinned
//! 4. every other eligible channel, pinned
//!
//! Eligible means a viewable text channel other than home, in the space's
//! enumeration order. Recent windows for every channel are visited before any
//! pins so the common case finishes before the pin pass starts.

use crate::domain::{Channel, SliceKind, Space};

/// Phase of the traversal a step belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SearchPhase {
    HomeRecent,
    OthersRecent,
    HomePinned,
    OthersPinned,
}

impl SearchPhase {
    pub fn slice(self) -> SliceKind {
        match self {
            SearchPhase::HomeRecent | SearchPhase::OthersRecent => SliceKind::Recent,
            SearchPhase::HomePinned | SearchPhase::OthersPinned => SliceKind::Pinned,
        }
    }
}

/// One (channel, slice) pair to examine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStep<'a> {
    pub channel: &'a Channel,
    pub phase: SearchPhase,
}

impl SearchStep<'_> {
    pub fn slice(&self) -> SliceKind {
        self.phase.slice()
    }
}

/// Viewable text channels of `space` other than `home`, in enumeration order
pub fn eligible_channels<'a>(
    home: &'a Channel,
    space: &'a Space,
) -> impl Iterator<Item = &'a Channel> + 'a {
    space
        .channels
        .iter()
        .filter(move |c| c.is_text() && c.viewable && c.id != home.id)
}

/// Full search plan for a message posted in `home`
pub fn plan_search<'a>(home: &'a Channel, space: &'a Space) -> Vec<SearchStep<'a>> {
    let others: Vec<&Channel> = eligible_channels(home, space).collect();
    let mut steps = Vec::with_capacity(2 * (others.len() + 1));

    steps.push(SearchStep {
        channel: home,
        phase: SearchPhase::HomeRecent,
    });
    steps.extend(others.iter().copied().map(|channel| SearchStep {
        channel,
        phase: SearchPhase::OthersRecent,
    }));
    steps.push(SearchStep {
        channel: home,
        phase: SearchPhase::HomePinned,
    });
    steps.extend(others.iter().copied().map(|channel| SearchStep {
        channel,
        phase: SearchPhase::OthersPinned,
    }));

    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChannelId, ChannelKind};

    fn space() -> Space {
        Space::new(1, "guild")
            .with_channel(Channel::text(10, "general"))
            .with_channel(Channel::text(11, "b"))
            .with_channel(Channel::text(12, "voice").with_kind(ChannelKind::Voice))
            .with_channel(Channel::text(13, "secret").with_viewable(false))
            .with_channel(Channel::text(14, "c"))
    }

    fn names(steps: &[SearchStep<'_>]) -> Vec<(String, SliceKind)> {
        steps
            .iter()
            .map(|s| (s.channel.name.clone(), s.slice()))
            .collect()
    }

    #[test]
    fn test_plan_order() {
        let space = space();
        let home = space.channel(ChannelId::new(10)).unwrap();
        let steps = plan_search(home, &space);

        assert_eq!(
            names(&steps),
            vec![
                ("general".to_string(), SliceKind::Recent),
                ("b".to_string(), SliceKind::Recent),
                ("c".to_string(), SliceKind::Recent),
                ("general".to_string(), SliceKind::Pinned),
                ("b".to_string(), SliceKind::Pinned),
                ("c".to_string(), SliceKind::Pinned),
            ]
        );
    }

    #[test]
    fn test_home_in_middle_of_enumeration() {
        let space = space();
        let home = space.channel(ChannelId::new(11)).unwrap();
        let steps = plan_search(home, &space);

        let phases: Vec<SearchPhase> = steps.iter().map(|s| s.phase).collect();
        assert_eq!(
            phases,
            vec![
                SearchPhase::HomeRecent,
                SearchPhase::OthersRecent,
                SearchPhase::OthersRecent,
                SearchPhase::HomePinned,
                SearchPhase::OthersPinned,
                SearchPhase::OthersPinned,
            ]
        );
        assert_eq!(steps[1].channel.name, "general");
        assert_eq!(steps[2].channel.name, "c");
    }

    #[test]
    fn test_single_channel_space() {
        let space = Space::new(1, "solo").with_channel(Channel::text(10, "only"));
        let home = space.channel(ChannelId::new(10)).unwrap();
        let steps = plan_search(home, &space);

        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].phase, SearchPhase::HomeRecent);
        assert_eq!(steps[1].phase, SearchPhase::HomePinned);
    }
}
