//! ORM Cache Manager
//!
//! Default `CacheManager`: derives keys and delegates to one swappable provider.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;

use crate::cache::CacheProvider;
use crate::error::Result;
use crate::key::LookupArg;
use crate::manager::{obj_key, query_key, CacheManager};

// == ORM Cache Manager ==
/// Key-derivation and delegation layer over a single provider.
///
/// The provider reference is the only mutable state. Each operation takes a
/// snapshot of it under a read lock and releases the lock before calling the
/// provider, so a concurrent [`CacheManager::set_cache_provider`] never
/// blocks on provider work and callers never see a torn reference.
pub struct OrmCacheManager<V> {
    provider: RwLock<Arc<dyn CacheProvider<V>>>,
}

impl<V> OrmCacheManager<V> {
    // == Constructor ==
    /// Creates a manager that delegates to `provider`.
    pub fn new(provider: Arc<dyn CacheProvider<V>>) -> Self {
        Self {
            provider: RwLock::new(provider),
        }
    }

    /// Returns the provider currently in use.
    pub fn provider(&self) -> Arc<dyn CacheProvider<V>> {
        self.provider.read().clone()
    }
}

impl<V> fmt::Debug for OrmCacheManager<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrmCacheManager").finish_non_exhaustive()
    }
}

impl<V> CacheManager<V> for OrmCacheManager<V> {
    fn get_obj(&self, table: &str, key: &LookupArg) -> Result<Option<V>> {
        self.provider().get(obj_key(table, key))
    }

    fn get_query(&self, query: &str, args: &[LookupArg]) -> Result<Option<V>> {
        self.provider().get(query_key(query, args))
    }

    fn set_obj(&self, table: &str, key: &LookupArg, ttl_seconds: i64, value: V) -> Result<()> {
        self.provider().set(obj_key(table, key), ttl_seconds, value)
    }

    fn set_query(
        &self,
        query: &str,
        ttl_seconds: i64,
        value: V,
        args: &[LookupArg],
    ) -> Result<()> {
        self.provider().set(query_key(query, args), ttl_seconds, value)
    }

    fn clear_all(&self) -> Result<()> {
        self.provider().clear_all()
    }

    fn clear_obj(&self, table: &str, key: &LookupArg) -> Result<()> {
        self.provider().clear(obj_key(table, key))
    }

    fn clear_query(&self, query: &str, args: &[LookupArg]) -> Result<()> {
        self.provider().clear(query_key(query, args))
    }

    fn set_cache_provider(&self, provider: Arc<dyn CacheProvider<V>>) {
        *self.provider.write() = provider;
        info!("Cache provider replaced");
    }
}
