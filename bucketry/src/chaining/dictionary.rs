//! Implements [`Dictionary`] for [`ChainingTable`].
use crate::chaining::core::empty_buckets;
use crate::chaining::ChainingTable;
use crate::hashing::common::reduce;
use bucketry_core::{DictError, Dictionary, Key, Result};
use std::hash::BuildHasher;

impl<K: Key, V, S: BuildHasher> ChainingTable<K, V, S> {
    /// Find the bucket of the given `key` and its position within the bucket, if present.
    pub(crate) fn locate(&self, key: &K) -> Result<(usize, Option<usize>)> {
        let bucket_idx = self.indexer.index(key, self.buckets.len())?;
        let position = self.buckets[bucket_idx].iter().position(|(k, _)| k == key);
        Ok((bucket_idx, position))
    }

    /// Get the value of `key`, failing only on an absent key.
    fn try_get_checked(&self, key: &K) -> Result<Option<&V>> {
        let (bucket_idx, position) = self.locate(key)?;
        Ok(position.map(|position| &self.buckets[bucket_idx][position].1))
    }

    /// Rebuild the table with `capacity` buckets, re-indexing every entry.
    ///
    /// Entries keep their relative order, so within a new bucket they stay in insertion order.
    fn rehash(&mut self, capacity: usize) {
        log::debug!(
            "Rehashing chaining table: {} -> {} buckets, {} entries.",
            self.buckets.len(),
            capacity,
            self.len
        );

        let mut buckets = empty_buckets(capacity);
        let old = std::mem::replace(&mut self.buckets, Box::default());
        for (key, value) in old.into_vec().into_iter().flatten() {
            let bucket_idx = reduce(self.indexer.hash_unchecked(&key), capacity);
            buckets[bucket_idx].push((key, value));
        }
        self.buckets = buckets;
    }

    /// Append a key known to be absent, growing the table first if it is too loaded.
    fn insert_absent(&mut self, key: K, value: V) -> Result<()> {
        if let Some(capacity) = self.policy.next_capacity(self.len, 0, self.buckets.len())? {
            self.rehash(capacity);
        }
        let bucket_idx = reduce(self.indexer.hash_unchecked(&key), self.buckets.len());
        self.buckets[bucket_idx].push((key, value));
        self.len += 1;
        Ok(())
    }

    /// Upsert every entry of `iter`, stopping at the first failure.
    pub fn try_extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) -> Result<()> {
        for (key, value) in iter {
            self.set(key, value)?;
        }
        Ok(())
    }
}

impl<K: Key, V, S: BuildHasher> Dictionary<K, V> for ChainingTable<K, V, S> {
    fn get(&self, key: &K) -> Result<&V> {
        self.try_get_checked(key)?.ok_or(DictError::KeyNotFound)
    }

    fn get_mut(&mut self, key: &K) -> Result<&mut V> {
        match self.locate(key)? {
            (bucket_idx, Some(position)) => Ok(&mut self.buckets[bucket_idx][position].1),
            (_, None) => Err(DictError::KeyNotFound),
        }
    }

    fn try_get(&self, key: &K) -> Option<&V> {
        self.try_get_checked(key).ok().flatten()
    }

    fn set(&mut self, key: K, value: V) -> Result<()> {
        match self.locate(&key)? {
            (bucket_idx, Some(position)) => {
                self.buckets[bucket_idx][position].1 = value;
                Ok(())
            }
            (_, None) => self.insert_absent(key, value),
        }
    }

    fn add(&mut self, key: K, value: V) -> Result<()> {
        match self.locate(&key)? {
            (_, Some(_)) => Err(DictError::DuplicateKey),
            (_, None) => self.insert_absent(key, value),
        }
    }

    fn remove(&mut self, key: &K) -> Result<bool> {
        match self.locate(key)? {
            (bucket_idx, Some(position)) => {
                // Shifting keeps the rest of the bucket in insertion order.
                self.buckets[bucket_idx].remove(position);
                self.len -= 1;
                Ok(true)
            }
            (_, None) => Ok(false),
        }
    }

    fn clear(&mut self) {
        self.buckets.iter_mut().for_each(Vec::clear);
        self.len = 0;
    }

    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> usize {
        self.buckets.len()
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a,
    {
        ChainingTable::iter(self)
    }
}
