//! Pluggable 64-bit key hashing.
//!
//! The trie consumes a key's full 64-bit hash six bits at a time, so the
//! hasher's only job is to turn key text into a `u64`. Two implementations
//! are provided: [`Fnv64`] is deterministic across processes, [`Seeded`]
//! carries a per-instance random seed. Hashes are never persisted, so
//! seeding is safe.

use std::hash::Hasher;

/// Produces a 64-bit hash from key text.
///
/// Implementations must be stateless per call: the same instance may be
/// used from any number of read-only map handles.
pub trait KeyHasher: Send + Sync {
    /// Hashes the key text to 64 bits.
    fn hash_key(&self, key: &str) -> u64;
}

/// Deterministic FNV-1a 64-bit hasher.
///
/// Produces the same hash for the same key in every process. Useful for
/// reproducible trie shapes in tests and debugging.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fnv64;

impl KeyHasher for Fnv64 {
    fn hash_key(&self, key: &str) -> u64 {
        let mut hasher = fnv::FnvHasher::default();
        hasher.write(key.as_bytes());
        hasher.finish()
    }
}

/// General-purpose seeded hasher (the default).
///
/// Each instance draws its own random seed, so trie shapes differ between
/// maps and between runs. Map equality is key-based and unaffected.
#[derive(Clone, Default)]
pub struct Seeded {
    state: ahash::RandomState,
}

impl std::fmt::Debug for Seeded {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Seeded")
    }
}

impl Seeded {
    /// Creates a hasher with a fresh random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyHasher for Seeded {
    fn hash_key(&self, key: &str) -> u64 {
        self.state.hash_one(key)
    }
}
