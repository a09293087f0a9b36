//! Cache Manager Module
//!
//! Translates ORM lookups (object by table and key, query by text and bound
//! arguments) into provider operations on derived cache keys.

mod defaults;
mod orm;

use std::sync::Arc;

use crate::cache::CacheProvider;
use crate::error::Result;
use crate::key::{hash_args, CacheKey, LookupArg};

// Re-export public types
pub use defaults::{default_manager, default_provider, new_default_manager};
pub use orm::OrmCacheManager;

// == Cache Manager ==
/// Object- and query-flavored cache operations for an ORM.
pub trait CacheManager<V>: Send + Sync {
    /// Looks up a cached object row of `table` identified by `key`.
    fn get_obj(&self, table: &str, key: &LookupArg) -> Result<Option<V>>;

    /// Looks up a cached query result for `query` run with `args`.
    fn get_query(&self, query: &str, args: &[LookupArg]) -> Result<Option<V>>;

    /// Caches an object row; see [`CacheProvider::set`] for TTL rules.
    fn set_obj(&self, table: &str, key: &LookupArg, ttl_seconds: i64, value: V) -> Result<()>;

    /// Caches a query result.
    fn set_query(&self, query: &str, ttl_seconds: i64, value: V, args: &[LookupArg])
        -> Result<()>;

    /// Drops every entry in the current provider.
    fn clear_all(&self) -> Result<()>;

    /// Drops the cached object row of `table` identified by `key`.
    fn clear_obj(&self, table: &str, key: &LookupArg) -> Result<()>;

    /// Drops the cached result of `query` run with `args`.
    fn clear_query(&self, query: &str, args: &[LookupArg]) -> Result<()>;

    /// Replaces the provider used by all subsequent operations.
    ///
    /// Entries held by the previous provider are left untouched and become
    /// unreachable through this manager.
    fn set_cache_provider(&self, provider: Arc<dyn CacheProvider<V>>);
}

// == Key Derivation ==
/// Derives the key of an object lookup from `[table, key]`.
pub fn obj_key(table: &str, key: &LookupArg) -> CacheKey {
    let table = LookupArg::from(table);
    hash_args([&table, key])
}

/// Derives the key of a query lookup from `[args..., query]`.
///
/// The query text goes last, after the bound arguments.
pub fn query_key(query: &str, args: &[LookupArg]) -> CacheKey {
    let query = LookupArg::from(query);
    hash_args(args.iter().chain(std::iter::once(&query)))
}
