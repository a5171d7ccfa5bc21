//! Read-only capabilities for callers that render a table's physical layout.
//!
//! They expose where entries live without handing out the backing storage, so nothing
//! outside a table can break its indexing invariants.

/// Entries stored at one physical bucket (or slot) of a table.
#[derive(Debug, PartialEq, Eq)]
pub struct Bucket<'a, K, V> {
    /// Physical index in `[0, capacity)`.
    pub index: usize,
    /// Entries of the bucket in insertion order. Never empty.
    pub entries: &'a [(K, V)],
}

// Derives would require `K: Clone, V: Clone`.
impl<K, V> Clone for Bucket<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for Bucket<'_, K, V> {}

/// Enumerates occupied buckets.
pub trait BucketView<K, V> {
    /// Iterate over every occupied bucket in ascending physical index.
    fn buckets<'a>(&'a self) -> impl Iterator<Item = Bucket<'a, K, V>>
    where
        K: 'a,
        V: 'a;
}

/// Resolves the physical index a key ended up at after collision resolution.
pub trait IndexLocator<K> {
    /// Get the index of the bucket (or slot) holding `key`, or `None` if the key is not present.
    fn array_index(&self, key: &K) -> Option<usize>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One entry per slot, `None` for an unused slot.
    struct Slots(Vec<Option<(u8, char)>>);

    impl BucketView<u8, char> for Slots {
        fn buckets<'a>(&'a self) -> impl Iterator<Item = Bucket<'a, u8, char>>
        where
            u8: 'a,
            char: 'a,
        {
            self.0.iter().enumerate().filter_map(|(index, slot)| {
                slot.as_ref().map(|entry| Bucket {
                    index,
                    entries: std::slice::from_ref(entry),
                })
            })
        }
    }

    fn occupied<K, V, T: BucketView<K, V>>(view: &T) -> Vec<usize> {
        view.buckets().map(|bucket| bucket.index).collect()
    }

    #[test]
    fn test_buckets_through_trait_bound() {
        let slots = Slots(vec![None, Some((1, 'a')), None, Some((3, 'c'))]);

        assert_eq!(occupied(&slots), [1, 3]);
        let first = slots.buckets().next().unwrap();
        let copy = first;
        assert_eq!(first, copy);
        assert_eq!(copy.entries, &[(1, 'a')]);
    }
}
