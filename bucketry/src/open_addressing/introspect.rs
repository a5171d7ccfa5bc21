//! Implements the read-only layout capabilities for [`OpenAddressingTable`].
use crate::open_addressing::core::Slot;
use crate::open_addressing::OpenAddressingTable;
use bucketry_core::{Bucket, BucketView, IndexLocator, Key};
use std::hash::BuildHasher;
use std::slice;

/// Every occupied slot is reported as a bucket holding exactly one entry.
impl<K, V, S> BucketView<K, V> for OpenAddressingTable<K, V, S> {
    fn buckets<'a>(&'a self) -> impl Iterator<Item = Bucket<'a, K, V>>
    where
        K: 'a,
        V: 'a,
    {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| match slot {
                Slot::Occupied(entry) => Some(Bucket {
                    index,
                    entries: slice::from_ref(entry),
                }),
                Slot::Empty | Slot::Tombstone => None,
            })
    }
}

impl<K: Key, V, S: BuildHasher> IndexLocator<K> for OpenAddressingTable<K, V, S> {
    fn array_index(&self, key: &K) -> Option<usize> {
        self.find(key).ok().flatten()
    }
}
