//! Reposti Domain Library
//!
//! Repost detection for multi-channel chat communities: given a newly
//! observed message, find an earlier message anywhere in the same space that
//! carries the same content.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure entities and decision logic
//!   - `entities/`: Messages, embeds, spaces, channels, typed ids
//!   - `value_objects/`: EmbedKind, ChannelKind, SliceKind, ToleranceLevel
//!   - `services/`: Match rule, channel traversal, trigger filter
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Tolerance persistence
//!   - `services/`: Message cache/fetch provider, space directory, GIF search
//!
//! - **Application** (`application/`): MessageWindow and RepostFinder
//!
//! # Usage
//!
//! ```rust,ignore
//! use reposti::{RepostFinder, SpaceDirectory};
//!
//! let finder = RepostFinder::new(source.clone());
//! let space = source.space(space_id).await?;
//! if let Some(original) = finder.find(&message, &space).await? {
//!     // respond
//! }
//! ```

pub mod application;
pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use application::{MessageWindow, RepostFinder, WindowTier, RECENT_WINDOW_LIMIT};
pub use domain::{
    is_repost_of, plan_search, should_search_created, should_search_edited, Channel, ChannelId,
    ChannelKind, DomainError, Embed, EmbedKind, Message, MessageId, SearchPhase, SearchStep,
    SliceKind, Space, SpaceId, ToleranceLevel, TriggerContext, UserId,
};
pub use ports::{GifSearch, MessageSource, SpaceDirectory, ToleranceRepository};
