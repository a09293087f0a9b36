//! Cache Provider Module
//!
//! The storage contract every backing store satisfies.

use crate::error::Result;
use crate::key::CacheKey;

// == Cache Provider ==
/// Minimal keyed storage with optional time-to-live.
///
/// Implementations must be safe to share across threads: calls to `get`,
/// `set`, `clear` and `clear_all` may arrive concurrently and must be
/// linearizable with respect to each other. Providers backed by fallible
/// stores report their failures through the returned `Result`; a missing key
/// is never an error.
pub trait CacheProvider<V>: Send + Sync {
    /// Returns the live value under `key`, or `None` if absent or expired.
    fn get(&self, key: CacheKey) -> Result<Option<V>>;

    /// Stores `value` under `key`, replacing any previous entry.
    ///
    /// `ttl_seconds > 0` expires the entry after that many seconds; zero or a
    /// negative value stores it without expiration.
    fn set(&self, key: CacheKey, ttl_seconds: i64, value: V) -> Result<()>;

    /// Removes the entry under `key`. Absent keys are a no-op.
    fn clear(&self, key: CacheKey) -> Result<()>;

    /// Removes every entry.
    fn clear_all(&self) -> Result<()>;
}
