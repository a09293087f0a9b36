//! Background Tasks Module
//!
//! Contains background tasks that run periodically next to a local provider.
//!
//! # Tasks
//! - Expiry sweep: drops expired entries from the local provider

mod cleanup;

pub use cleanup::spawn_cleanup_task;
