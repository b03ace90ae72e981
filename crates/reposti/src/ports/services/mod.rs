//! Service Ports
//!
//! Abstract interfaces for the chat platform the engine reads from and the
//! services the bot responds with.

mod gif_search;
mod message_source;
mod space_directory;

pub use gif_search::*;
pub use message_source::*;
pub use space_directory::*;
