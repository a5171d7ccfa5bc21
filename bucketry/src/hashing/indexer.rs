//! Implements [`HashIndexer`].
use crate::hashing::common::reduce;
use crate::hashing::{ProbeSequence, Probing};
use bucketry_core::{DictError, Key, Result};
use std::fmt::{Debug, Formatter};
use std::hash::BuildHasher;
use xxhash_rust::xxh3::Xxh3Builder;

/// Hash builder used by the tables unless another one is supplied.
///
/// XXH3 with the default seed and secret, so indices are reproducible across runs.
pub type DefaultHashBuilder = Xxh3Builder;

/// Maps a key and the current capacity to a slot index.
///
/// Stateless apart from the hash builder: the same key and capacity always produce the same
/// index. Indices depend on the capacity, so they have to be recomputed whenever it changes.
#[derive(Clone, Default)]
pub struct HashIndexer<S = DefaultHashBuilder> {
    hash_builder: S,
}

impl<S> Debug for HashIndexer<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashIndexer").finish_non_exhaustive()
    }
}

impl<S> HashIndexer<S> {
    /// Create a new indexer on top of the given hash builder.
    pub const fn new(hash_builder: S) -> Self {
        Self { hash_builder }
    }

    /// Get the underlying hash builder.
    pub fn hash_builder(&self) -> &S {
        &self.hash_builder
    }
}

impl<S: BuildHasher> HashIndexer<S> {
    /// Hash the given `key`.
    ///
    /// Fails with [`DictError::InvalidKey`] if the key is absent.
    #[inline]
    pub fn hash<K: Key + ?Sized>(&self, key: &K) -> Result<u64> {
        if key.is_absent() {
            return Err(DictError::InvalidKey);
        }
        Ok(self.hash_builder.hash_one(key))
    }

    /// Hash a key that is already known to be present, e.g. one stored in a table.
    #[inline]
    pub(crate) fn hash_unchecked<K: Key + ?Sized>(&self, key: &K) -> u64 {
        debug_assert!(!key.is_absent(), "Absent keys are never stored.");

        self.hash_builder.hash_one(key)
    }

    /// Get the index of the given `key` in a table of `capacity` slots.
    ///
    /// # Parameters
    ///
    /// - `key`: The key to locate.
    /// - `capacity`: The number of slots at the time of the call, must be positive.
    #[inline]
    pub fn index<K: Key + ?Sized>(&self, key: &K, capacity: usize) -> Result<usize> {
        Ok(reduce(self.hash(key)?, capacity))
    }

    /// Get the full probe cycle of the given `key` in a table of `capacity` slots.
    pub fn probe<K: Key + ?Sized>(
        &self,
        probing: Probing,
        key: &K,
        capacity: usize,
    ) -> Result<ProbeSequence> {
        Ok(ProbeSequence::new(probing, self.hash(key)?, capacity))
    }
}
