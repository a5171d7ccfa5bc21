//! Implements constructors for [`OpenAddressingTable`].
use crate::hashing::{DefaultHashBuilder, HashIndexer, Probing};
use crate::open_addressing::core::empty_slots;
use crate::open_addressing::OpenAddressingTable;
use crate::resize::{ResizePolicy, DEFAULT_CAPACITY};
use bucketry_core::{DictError, Result};

impl<K, V> OpenAddressingTable<K, V> {
    /// Creates an empty table with [`DEFAULT_CAPACITY`] slots.
    pub fn new(probing: Probing) -> Self {
        Self::from_parts(DEFAULT_CAPACITY, probing, DefaultHashBuilder::new())
    }

    /// Creates an empty table with at least `capacity` slots.
    ///
    /// Fails with [`DictError::InvalidCapacity`] if `capacity` is 0.
    pub fn with_capacity(capacity: usize, probing: Probing) -> Result<Self> {
        Self::with_capacity_and_hasher(capacity, probing, DefaultHashBuilder::new())
    }
}

impl<K, V, S> OpenAddressingTable<K, V, S> {
    /// Creates an empty table with [`DEFAULT_CAPACITY`] slots, hashing keys with `hash_builder`.
    pub fn with_hasher(probing: Probing, hash_builder: S) -> Self {
        Self::from_parts(DEFAULT_CAPACITY, probing, hash_builder)
    }

    /// Creates an empty table with at least `capacity` slots, hashing keys with `hash_builder`.
    ///
    /// # Parameters
    ///
    /// - `capacity`: The requested number of slots, rounded up to a power of two.
    /// - `probing`: The strategy used for the whole lifetime of the table.
    /// - `hash_builder`: The source of key hashes.
    pub fn with_capacity_and_hasher(
        capacity: usize,
        probing: Probing,
        hash_builder: S,
    ) -> Result<Self> {
        if capacity == 0 {
            return Err(DictError::InvalidCapacity(capacity));
        }
        let capacity = capacity
            .checked_next_power_of_two()
            .ok_or(DictError::CapacityOverflow)?;
        Ok(Self::from_parts(capacity, probing, hash_builder))
    }

    fn from_parts(capacity: usize, probing: Probing, hash_builder: S) -> Self {
        debug_assert!(
            capacity.is_power_of_two(),
            r#""capacity" must be a power of two"#
        );

        Self {
            indexer: HashIndexer::new(hash_builder),
            slots: empty_slots(capacity),
            probing,
            len: 0,
            tombstones: 0,
            policy: ResizePolicy::OPEN_ADDRESSING,
        }
    }
}

impl<K, V> Default for OpenAddressingTable<K, V> {
    fn default() -> Self {
        Self::new(Probing::default())
    }
}
