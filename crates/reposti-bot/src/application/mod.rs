//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! repositories and external services.

mod spice_service;

pub use spice_service::{SpiceAdjustment, SpiceService};
