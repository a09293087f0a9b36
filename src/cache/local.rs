//! Local Cache Provider Module
//!
//! Default in-process provider: a lock-guarded HashMap with lazy TTL expiry.

use std::collections::HashMap;
use std::time::Instant;

use parking_lot::Mutex;
use tracing::{debug, info};

use crate::cache::{CacheEntry, CacheProvider, CacheStats};
use crate::error::Result;
use crate::key::CacheKey;

#[derive(Debug)]
struct Store<V> {
    entries: HashMap<CacheKey, CacheEntry<V>>,
    stats: CacheStats,
}

// == Local Cache Provider ==
/// In-memory provider with per-entry TTL.
///
/// Expired entries are dropped by the `get` that observes them, or in bulk by
/// [`LocalCacheProvider::purge_expired`]. Lookups update the counters, so
/// every operation takes the same exclusive lock for its whole duration and
/// operations never interleave. This provider never returns an error.
#[derive(Debug)]
pub struct LocalCacheProvider<V> {
    store: Mutex<Store<V>>,
}

impl<V> LocalCacheProvider<V> {
    // == Constructor ==
    /// Creates an empty provider with zeroed counters.
    pub fn new() -> Self {
        Self {
            store: Mutex::new(Store {
                entries: HashMap::new(),
                stats: CacheStats::new(),
            }),
        }
    }

    // == Stats ==
    /// Returns a snapshot of the provider counters.
    pub fn stats(&self) -> CacheStats {
        let store = self.store.lock();
        let mut stats = store.stats.clone();
        stats.set_total_entries(store.entries.len());
        stats
    }

    // == Purge Expired ==
    /// Removes every expired entry and returns how many were dropped.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut store = self.store.lock();

        let before = store.entries.len();
        store.entries.retain(|_, entry| !entry.is_expired_at(now));
        let removed = before - store.entries.len();

        store.stats.record_expirations(removed);
        let remaining = store.entries.len();
        store.stats.set_total_entries(remaining);
        removed
    }

    // == Length ==
    /// Returns the number of stored entries, expired ones included until purged.
    pub fn len(&self) -> usize {
        self.store.lock().entries.len()
    }

    /// Returns true if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.store.lock().entries.is_empty()
    }
}

impl<V> Default for LocalCacheProvider<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> CacheProvider<V> for LocalCacheProvider<V>
where
    V: Clone + Send + Sync,
{
    fn get(&self, key: CacheKey) -> Result<Option<V>> {
        let mut store = self.store.lock();

        let lookup = store
            .entries
            .get(&key)
            .map(|entry| (entry.is_expired(), entry.value.clone()));

        match lookup {
            Some((false, value)) => {
                store.stats.record_hit();
                Ok(Some(value))
            }
            Some((true, _)) => {
                store.entries.remove(&key);
                store.stats.record_expirations(1);
                store.stats.record_miss();
                debug!(%key, "Dropped expired entry on lookup");
                Ok(None)
            }
            None => {
                store.stats.record_miss();
                Ok(None)
            }
        }
    }

    fn set(&self, key: CacheKey, ttl_seconds: i64, value: V) -> Result<()> {
        let entry = CacheEntry::new(value, ttl_seconds);
        let mut store = self.store.lock();
        store.entries.insert(key, entry);
        let count = store.entries.len();
        store.stats.set_total_entries(count);
        debug!(%key, ttl_seconds, "Stored entry");
        Ok(())
    }

    fn clear(&self, key: CacheKey) -> Result<()> {
        let mut store = self.store.lock();
        if store.entries.remove(&key).is_some() {
            let count = store.entries.len();
            store.stats.set_total_entries(count);
            debug!(%key, "Cleared entry");
        }
        Ok(())
    }

    fn clear_all(&self) -> Result<()> {
        let mut store = self.store.lock();
        let dropped = store.entries.len();
        store.entries.clear();
        store.stats.set_total_entries(0);
        info!(dropped, "Cleared all cache entries");
        Ok(())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread::{self, sleep};
    use std::time::Duration;

    fn key(raw: u32) -> CacheKey {
        CacheKey::new(raw)
    }

    #[test]
    fn test_provider_new() {
        let provider: LocalCacheProvider<String> = LocalCacheProvider::new();
        assert_eq!(provider.len(), 0);
        assert!(provider.is_empty());
    }

    #[test]
    fn test_set_and_get() {
        let provider = LocalCacheProvider::new();

        provider.set(key(1), 0, "value1".to_string()).unwrap();
        let value = provider.get(key(1)).unwrap();

        assert_eq!(value.as_deref(), Some("value1"));
        assert_eq!(provider.len(), 1);
    }

    #[test]
    fn test_get_absent_is_miss_not_error() {
        let provider: LocalCacheProvider<String> = LocalCacheProvider::new();
        assert_eq!(provider.get(key(9)).unwrap(), None);
    }

    #[test]
    fn test_overwrite() {
        let provider = LocalCacheProvider::new();

        provider.set(key(1), 0, "v1").unwrap();
        provider.set(key(1), 0, "v2").unwrap();

        assert_eq!(provider.get(key(1)).unwrap(), Some("v2"));
        assert_eq!(provider.len(), 1);
    }

    #[test]
    fn test_overwrite_resets_expiration() {
        let provider = LocalCacheProvider::new();

        provider.set(key(1), 1, "short").unwrap();
        provider.set(key(1), 0, "forever").unwrap();
        sleep(Duration::from_millis(1100));

        assert_eq!(provider.get(key(1)).unwrap(), Some("forever"));
    }

    #[test]
    fn test_clear() {
        let provider = LocalCacheProvider::new();

        provider.set(key(1), 0, "value").unwrap();
        provider.clear(key(1)).unwrap();

        assert!(provider.is_empty());
        assert_eq!(provider.get(key(1)).unwrap(), None);
    }

    #[test]
    fn test_clear_absent_is_noop() {
        let provider: LocalCacheProvider<u8> = LocalCacheProvider::new();
        assert!(provider.clear(key(404)).is_ok());
    }

    #[test]
    fn test_clear_all() {
        let provider = LocalCacheProvider::new();
        for raw in 0..5 {
            provider.set(key(raw), 0, raw).unwrap();
        }

        provider.clear_all().unwrap();

        for raw in 0..5 {
            assert_eq!(provider.get(key(raw)).unwrap(), None);
        }
        assert!(provider.is_empty());
    }

    #[test]
    fn test_ttl_expiration() {
        let provider = LocalCacheProvider::new();

        provider.set(key(1), 1, "value").unwrap();
        assert_eq!(provider.get(key(1)).unwrap(), Some("value"));

        sleep(Duration::from_millis(1100));

        assert_eq!(provider.get(key(1)).unwrap(), None);
        // Lazy removal happened on the lookup above and stays a miss
        assert!(provider.is_empty());
        assert_eq!(provider.get(key(1)).unwrap(), None);
    }

    #[test]
    fn test_zero_ttl_never_expires() {
        let provider = LocalCacheProvider::new();

        provider.set(key(1), 0, "value").unwrap();
        sleep(Duration::from_millis(1100));

        assert_eq!(provider.get(key(1)).unwrap(), Some("value"));
    }

    #[test]
    fn test_stats() {
        let provider = LocalCacheProvider::new();

        provider.set(key(1), 0, "value").unwrap();
        provider.get(key(1)).unwrap();
        provider.get(key(2)).unwrap();

        let stats = provider.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
    }

    #[test]
    fn test_purge_expired() {
        let provider = LocalCacheProvider::new();

        provider.set(key(1), 1, "short").unwrap();
        provider.set(key(2), 10, "long").unwrap();
        provider.set(key(3), 0, "forever").unwrap();

        sleep(Duration::from_millis(1100));

        assert_eq!(provider.purge_expired(), 1);
        assert_eq!(provider.len(), 2);
        assert_eq!(provider.stats().expirations, 1);
        assert_eq!(provider.get(key(2)).unwrap(), Some("long"));
    }

    #[test]
    fn test_concurrent_lookups_count_every_hit_and_miss() {
        let provider = Arc::new(LocalCacheProvider::<u32>::new());
        provider.set(key(1), 0, 1).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let provider = Arc::clone(&provider);
                thread::spawn(move || {
                    for _ in 0..250 {
                        assert_eq!(provider.get(key(1)).unwrap(), Some(1));
                        assert_eq!(provider.get(key(2)).unwrap(), None);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().expect("reader should not panic");
        }

        let stats = provider.stats();
        assert_eq!(stats.hits, 1000);
        assert_eq!(stats.misses, 1000);
        assert_eq!(stats.hit_rate(), 0.5);
    }

    #[test]
    fn test_concurrent_access() {
        let provider = Arc::new(LocalCacheProvider::<u32>::new());
        let mut handles = Vec::new();

        for worker in 0..8u32 {
            let provider = Arc::clone(&provider);
            handles.push(thread::spawn(move || {
                for i in 0..500u32 {
                    let k = key(i % 16);
                    match (worker + i) % 3 {
                        0 => provider.set(k, 0, worker).unwrap(),
                        1 => {
                            if let Some(v) = provider.get(k).unwrap() {
                                assert!(v < 8);
                            }
                        }
                        _ => provider.clear(k).unwrap(),
                    }
                }
            }));
        }

        for handle in handles {
            handle.join().expect("worker should not panic");
        }

        assert!(provider.len() <= 16);
        let stats = provider.stats();
        assert_eq!(stats.total_entries, provider.len());
    }
}
