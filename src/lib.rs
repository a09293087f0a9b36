//! ORM Cache - pluggable TTL cache for ORM object and query lookups
//!
//! Derives a 32-bit key from an ordered list of lookup arguments and stores
//! opaque payloads under it through a swappable provider. The default
//! provider is in-memory with per-entry TTL.
//!
//! ```ignore
//! use orm_cache::{default_manager, CacheManager};
//!
//! let cache = default_manager();
//! cache.set_obj("users", &42.into(), 60, serde_json::json!({"name": "alice"}))?;
//! let hit = cache.get_obj("users", &42.into())?;
//! ```

pub mod cache;
pub mod error;
pub mod key;
pub mod manager;
pub mod tasks;

pub use cache::{CacheProvider, CacheStats, LocalCacheProvider, Payload};
pub use error::{CacheError, Result};
pub use key::{hash_args, CacheKey, LookupArg};
pub use manager::{
    default_manager, default_provider, new_default_manager, CacheManager, OrmCacheManager,
};
pub use tasks::spawn_cleanup_task;
