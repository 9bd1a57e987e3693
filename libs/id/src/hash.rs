//! Lazily cached hash codes.
//!
//! Identifiers are used as map keys far more often than they are built, so
//! the field hash is computed once and cached in an atomic cell. The cell is
//! a racy single check: concurrent first callers may all compute the hash,
//! but the computation is pure, so every store writes the same value.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Cell value meaning "not yet computed".
const UNSET: u64 = 0;

/// Substitute stored when a computed hash collides with [`UNSET`].
const UNSET_REMAP: u64 = 1;

/// A hash code cache with a reserved "unset" sentinel.
///
/// A computed hash of `0` is stored and returned as `1`. The remap is
/// deterministic, so equal values still hash equally.
pub struct CachedHash(AtomicU64);

impl CachedHash {
    /// Creates an empty cache.
    #[must_use]
    pub const fn new() -> Self {
        Self(AtomicU64::new(UNSET))
    }

    /// Returns the cached hash, computing and storing it on first use.
    pub fn get_or_compute(&self, compute: impl FnOnce() -> u64) -> u64 {
        let cached = self.0.load(Ordering::Relaxed);
        if cached != UNSET {
            return cached;
        }

        let hash = match compute() {
            UNSET => UNSET_REMAP,
            hash => hash,
        };
        self.0.store(hash, Ordering::Relaxed);
        hash
    }

    /// Returns the cached hash without computing it.
    #[must_use]
    pub fn peek(&self) -> Option<u64> {
        match self.0.load(Ordering::Relaxed) {
            UNSET => None,
            hash => Some(hash),
        }
    }
}

impl Default for CachedHash {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CachedHash {
    fn clone(&self) -> Self {
        Self(AtomicU64::new(self.0.load(Ordering::Relaxed)))
    }
}

impl fmt::Debug for CachedHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.peek() {
            Some(hash) => write!(f, "CachedHash({hash:#018x})"),
            None => f.write_str("CachedHash(<unset>)"),
        }
    }
}
