//! Implements constructors for [`ChainingTable`].
use crate::chaining::core::empty_buckets;
use crate::chaining::ChainingTable;
use crate::hashing::{DefaultHashBuilder, HashIndexer};
use crate::resize::{ResizePolicy, DEFAULT_CAPACITY};
use bucketry_core::{DictError, Result};

impl<K, V> ChainingTable<K, V> {
    /// Creates an empty table with [`DEFAULT_CAPACITY`] buckets.
    pub fn new() -> Self {
        Self::from_parts(DEFAULT_CAPACITY, DefaultHashBuilder::new())
    }

    /// Creates an empty table with the given number of buckets.
    ///
    /// Fails with [`DictError::InvalidCapacity`] if `capacity` is 0.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::new())
    }
}

impl<K, V, S> ChainingTable<K, V, S> {
    /// Creates an empty table with [`DEFAULT_CAPACITY`] buckets, hashing keys with `hash_builder`.
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::from_parts(DEFAULT_CAPACITY, hash_builder)
    }

    /// Creates an empty table with the given number of buckets, hashing keys with `hash_builder`.
    ///
    /// # Parameters
    ///
    /// - `capacity`: The initial number of buckets, kept as is. Must be positive.
    /// - `hash_builder`: The source of key hashes.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Result<Self> {
        if capacity == 0 {
            return Err(DictError::InvalidCapacity(capacity));
        }
        Ok(Self::from_parts(capacity, hash_builder))
    }

    fn from_parts(capacity: usize, hash_builder: S) -> Self {
        debug_assert!(capacity > 0, r#""capacity" must be greater than 0"#);

        Self {
            indexer: HashIndexer::new(hash_builder),
            buckets: empty_buckets(capacity),
            len: 0,
            policy: ResizePolicy::CHAINING,
        }
    }
}

impl<K, V> Default for ChainingTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bucketry_core::Dictionary;
    use bucketry_testing::IdentityState;

    #[test]
    fn test_new_uses_default_capacity() {
        let table = ChainingTable::<u32, u32>::new();
        assert_eq!(table.capacity(), DEFAULT_CAPACITY);
        assert!(table.is_empty());
        assert_eq!(table.load_factor(), 0.0);
        assert_eq!(table.policy(), ResizePolicy::CHAINING);
    }

    #[test]
    fn test_capacity_is_kept_exactly() {
        for capacity in [1, 3, 10, 17] {
            let table = ChainingTable::<u32, u32>::with_capacity(capacity).unwrap();
            assert_eq!(table.capacity(), capacity);
        }
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        assert_eq!(
            ChainingTable::<u32, u32>::with_capacity(0).unwrap_err(),
            DictError::InvalidCapacity(0)
        );
        let table = ChainingTable::<u32, u32, _>::with_capacity_and_hasher(0, IdentityState);
        assert!(table.is_err());
    }

    #[test]
    fn test_with_hasher() {
        let table = ChainingTable::<u32, u32, _>::with_hasher(IdentityState);
        assert_eq!(table.capacity(), DEFAULT_CAPACITY);
        assert_eq!(table.indexer().index(&18_u32, table.capacity()), Ok(2));
    }
}
