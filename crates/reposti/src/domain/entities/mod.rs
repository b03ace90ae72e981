//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Message / Embed: observed chat messages and their rich previews
//! - Space / Channel: the community container and its channels
//! - Ids: typed platform snowflakes

mod ids;
mod message;
mod space;

pub use ids::*;
pub use message::*;
pub use space::*;
