//! Default Instances
//!
//! Factory for a freshly wired provider/manager pair, plus the one lazily
//! created process-wide pair used when nothing else is injected.

use std::sync::{Arc, OnceLock};

use crate::cache::{LocalCacheProvider, Payload};
use crate::manager::OrmCacheManager;

static DEFAULT_PROVIDER: OnceLock<Arc<LocalCacheProvider<Payload>>> = OnceLock::new();
static DEFAULT_MANAGER: OnceLock<Arc<OrmCacheManager<Payload>>> = OnceLock::new();

/// Builds a new local provider and a manager wired to it.
///
/// The provider handle is returned alongside so the owner can read its
/// stats or run the expiry sweeper.
pub fn new_default_manager<V>() -> (Arc<LocalCacheProvider<V>>, OrmCacheManager<V>)
where
    V: Clone + Send + Sync + 'static,
{
    let provider = Arc::new(LocalCacheProvider::<V>::new());
    let manager = OrmCacheManager::<V>::new(provider.clone());
    (provider, manager)
}

/// Process-wide local provider, created on first use and never dropped.
pub fn default_provider() -> Arc<LocalCacheProvider<Payload>> {
    DEFAULT_PROVIDER
        .get_or_init(|| Arc::new(LocalCacheProvider::new()))
        .clone()
}

/// Process-wide manager, initially wired to [`default_provider`].
///
/// Swapping its provider affects every holder of this manager.
pub fn default_manager() -> Arc<OrmCacheManager<Payload>> {
    DEFAULT_MANAGER
        .get_or_init(|| Arc::new(OrmCacheManager::<Payload>::new(default_provider())))
        .clone()
}
