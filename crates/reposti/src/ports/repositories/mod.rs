//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod tolerance_repository;

pub use tolerance_repository::*;
