//! Key Hasher Module
//!
//! Combine-and-fold hashing of lookup arguments into a 32-bit cache key.

use std::fmt;

use serde::Serialize;

use crate::key::{LookupArg, HASH_MULTIPLIER, SENTINEL_HASH, TIMESTAMP_FORMAT};

const FNV_OFFSET_BASIS: u32 = 0x811C_9DC5;
const FNV_PRIME: u32 = 0x0100_0193;

// == Cache Key ==
/// Fixed-width identity of a lookup at the provider layer.
///
/// Distinct lookups that fold to the same value are indistinguishable to a
/// provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CacheKey(u32);

impl CacheKey {
    /// Wraps a raw 32-bit key.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw 32-bit key.
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for CacheKey {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

// == Hash Argument List ==
/// Folds an ordered argument list into one cache key.
///
/// Each step computes `hash * 397 ^ single_hash(arg)` with wrapping 32-bit
/// arithmetic, so argument order changes the result. An empty list yields
/// key `0`.
pub fn hash_args<'a, I>(args: I) -> CacheKey
where
    I: IntoIterator<Item = &'a LookupArg>,
{
    let folded = args.into_iter().fold(0u32, |hash, arg| {
        hash.wrapping_mul(HASH_MULTIPLIER) ^ single_hash(arg)
    });
    CacheKey(folded)
}

// == Single Argument Hash ==
/// Hashes one argument with 32-bit FNV-1a over its normalized bytes.
///
/// Unsupported arguments return [`SENTINEL_HASH`] instead of failing, so two
/// unsupported values in the same position always collide.
pub fn single_hash(arg: &LookupArg) -> u32 {
    match arg {
        LookupArg::Int(v) => fnv1a_32(&(*v as isize).to_le_bytes()),
        LookupArg::Uint(v) => fnv1a_32(&(*v as usize).to_le_bytes()),
        LookupArg::Float32(v) => fnv1a_32(&v.to_le_bytes()),
        LookupArg::Float64(v) => fnv1a_32(&v.to_le_bytes()),
        LookupArg::Bool(v) => fnv1a_32(&[u8::from(*v)]),
        LookupArg::Str(s) => fnv1a_32(s.as_bytes()),
        LookupArg::Bytes(b) => fnv1a_32(b),
        LookupArg::Time(t) => fnv1a_32(t.format(TIMESTAMP_FORMAT).to_string().as_bytes()),
        LookupArg::Unsupported => SENTINEL_HASH,
    }
}

/// 32-bit FNV-1a over a byte slice.
pub fn fnv1a_32(bytes: &[u8]) -> u32 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |state, byte| {
        (state ^ u32::from(*byte)).wrapping_mul(FNV_PRIME)
    })
}
