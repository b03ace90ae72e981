//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod channel_kind;
mod embed_kind;
mod slice_kind;
mod tolerance_level;

pub use channel_kind::*;
pub use embed_kind::*;
pub use slice_kind::*;
pub use tolerance_level::*;
