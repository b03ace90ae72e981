//! Application Layer
//!
//! Use cases that drive the domain through its ports.

mod message_window;
mod repost_finder;

#[cfg(test)]
pub(crate) mod testing;

pub use message_window::*;
pub use repost_finder::*;
