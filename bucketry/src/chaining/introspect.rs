//! Implements the read-only layout capabilities for [`ChainingTable`].
use crate::chaining::ChainingTable;
use bucketry_core::{Bucket, BucketView, IndexLocator, Key};
use std::hash::BuildHasher;

impl<K, V, S> BucketView<K, V> for ChainingTable<K, V, S> {
    fn buckets<'a>(&'a self) -> impl Iterator<Item = Bucket<'a, K, V>>
    where
        K: 'a,
        V: 'a,
    {
        self.buckets
            .iter()
            .enumerate()
            .filter(|(_, entries)| !entries.is_empty())
            .map(|(index, entries)| Bucket {
                index,
                entries: entries.as_slice(),
            })
    }
}

/// Resolves to the bucket index: entries never move between buckets except on resize.
impl<K: Key, V, S: BuildHasher> IndexLocator<K> for ChainingTable<K, V, S> {
    fn array_index(&self, key: &K) -> Option<usize> {
        match self.locate(key) {
            Ok((bucket_idx, Some(_))) => Some(bucket_idx),
            _ => None,
        }
    }
}
