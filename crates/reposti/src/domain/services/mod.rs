//! Domain Services
//!
//! Pure decision logic with no I/O.

mod match_rule;
mod traversal;
mod trigger;

pub use match_rule::*;
pub use traversal::*;
pub use trigger::*;
