//! Error types for the ORM cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Error reported by a cache provider and passed through the manager.
///
/// A missing key is not an error: providers report it as `Ok(None)`.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Backing store failed (remote provider I/O, serialization, etc.)
    #[error("Provider error: {0}")]
    Provider(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
