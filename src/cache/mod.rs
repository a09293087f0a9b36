//! Cache Module
//!
//! Provider contract plus the default in-memory, TTL-expiring implementation.

mod entry;
mod local;
mod provider;
mod stats;


// Re-export public types
pub use entry::CacheEntry;
pub use local::LocalCacheProvider;
pub use provider::CacheProvider;
pub use stats::CacheStats;

// == Payload ==
/// Default opaque payload type used by the shared instances. Callers
/// serialize their records into it before storing.
pub type Payload = serde_json::Value;
