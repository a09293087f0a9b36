//! Key Derivation Module
//!
//! Folds an ordered list of lookup arguments into a fixed-width cache key.

mod arg;
mod hasher;

// Re-export public types
pub use arg::LookupArg;
pub use hasher::{fnv1a_32, hash_args, single_hash, CacheKey};

// == Public Constants ==
/// Multiplier applied to the running hash before folding in the next argument
pub const HASH_MULTIPLIER: u32 = 397;

/// Hash returned for arguments the hasher cannot encode
pub const SENTINEL_HASH: u32 = 0;

/// Layout used when normalizing timestamps before hashing
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f %z";
