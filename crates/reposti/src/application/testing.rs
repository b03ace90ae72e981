//! In-memory message source for tests

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use crate::domain::{errors::DomainError, sort_most_recent_first, Channel, ChannelId, Message};
use crate::ports::MessageSource;

pub fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceCall {
    Cache(ChannelId),
    Fetch(ChannelId),
    Pinned(ChannelId),
}

#[derive(Default)]
struct ChannelHistory {
    /// Everything the platform knows about
    remote: Vec<Message>,
    /// What the local cache happens to hold
    cached: Vec<Message>,
    pinned: Vec<Message>,
}

#[derive(Default)]
pub struct FakeSource {
    channels: HashMap<ChannelId, ChannelHistory>,
    exhaustive: HashSet<ChannelId>,
    fail_fetch: bool,
    calls: Mutex<Vec<SourceCall>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_channel(
        mut self,
        channel_id: u64,
        remote: Vec<Message>,
        cached: Vec<Message>,
        pinned: Vec<Message>,
    ) -> Self {
        self.channels.insert(
            ChannelId::new(channel_id),
            ChannelHistory {
                remote,
                cached,
                pinned,
            },
        );
        self
    }

    pub fn exhaustive(mut self, channel_id: u64) -> Self {
        self.exhaustive.insert(ChannelId::new(channel_id));
        self
    }

    pub fn failing_fetch(mut self) -> Self {
        self.fail_fetch = true;
        self
    }

    pub fn calls(&self) -> Vec<SourceCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, SourceCall::Fetch(_)))
            .count()
    }

    pub fn touched(&self, channel_id: u64) -> bool {
        let id = ChannelId::new(channel_id);
        self.calls().iter().any(|c| match c {
            SourceCall::Cache(c) | SourceCall::Fetch(c) | SourceCall::Pinned(c) => *c == id,
        })
    }

    fn record(&self, call: SourceCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl MessageSource for FakeSource {
    fn cached_before(&self, channel: &Channel, before: DateTime<Utc>) -> Vec<Message> {
        self.record(SourceCall::Cache(channel.id));
        self.channels
            .get(&channel.id)
            .map(|h| {
                h.cached
                    .iter()
                    .filter(|m| m.created_at < before)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    fn cache_is_exhaustive(&self, channel: &Channel) -> bool {
        self.exhaustive.contains(&channel.id)
    }

    async fn fetch_before(
        &self,
        channel: &Channel,
        before: DateTime<Utc>,
        limit: u8,
    ) -> Result<Vec<Message>, DomainError> {
        self.record(SourceCall::Fetch(channel.id));
        if self.fail_fetch {
            return Err(DomainError::Transport("rate limited".into()));
        }

        let mut messages: Vec<Message> = self
            .channels
            .get(&channel.id)
            .map(|h| {
                h.remote
                    .iter()
                    .filter(|m| m.created_at < before)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        sort_most_recent_first(&mut messages);
        messages.truncate(usize::from(limit));
        Ok(messages)
    }

    async fn fetch_pinned(&self, channel: &Channel) -> Result<Vec<Message>, DomainError> {
        self.record(SourceCall::Pinned(channel.id));
        Ok(self
            .channels
            .get(&channel.id)
            .map(|h| h.pinned.clone())
            .unwrap_or_default())
    }
}
