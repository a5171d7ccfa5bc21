//! Implements [`Dictionary`] for [`OpenAddressingTable`].
use crate::hashing::ProbeSequence;
use crate::open_addressing::core::{empty_slots, Slot};
use crate::open_addressing::OpenAddressingTable;
use bitvec::prelude::*;
use bucketry_core::{DictError, Dictionary, Key, Result};
use std::hash::BuildHasher;

/// Outcome of walking a key's probe sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lookup {
    /// The key sits in this slot.
    Found(usize),
    /// The key is absent. Holds the first slot it could be inserted at, if the probe cycle
    /// met any.
    Vacant(Option<usize>),
}

impl<K: Key, V, S: BuildHasher> OpenAddressingTable<K, V, S> {
    /// Walk the probe sequence of `key` until the key or an empty slot is met.
    ///
    /// Tombstones never stop the walk, but the first one is remembered as the insertion point.
    fn lookup_hashed(&self, key: &K, hash: u64) -> Lookup {
        let mut reusable = None;
        for idx in ProbeSequence::new(self.probing, hash, self.slots.len()) {
            match &self.slots[idx] {
                Slot::Empty => return Lookup::Vacant(reusable.or(Some(idx))),
                Slot::Tombstone => {
                    reusable.get_or_insert(idx);
                }
                Slot::Occupied((k, _)) if k == key => return Lookup::Found(idx),
                Slot::Occupied(_) => {}
            }
        }
        Lookup::Vacant(reusable)
    }

    fn lookup(&self, key: &K) -> Result<(u64, Lookup)> {
        let hash = self.indexer.hash(key)?;
        Ok((hash, self.lookup_hashed(key, hash)))
    }

    /// Get the slot holding `key`, if any.
    pub(crate) fn find(&self, key: &K) -> Result<Option<usize>> {
        match self.lookup(key)?.1 {
            Lookup::Found(idx) => Ok(Some(idx)),
            Lookup::Vacant(_) => Ok(None),
        }
    }

    fn value_at(&self, idx: usize) -> Result<&V> {
        match &self.slots[idx] {
            Slot::Occupied((_, value)) => Ok(value),
            Slot::Empty | Slot::Tombstone => Err(DictError::KeyNotFound),
        }
    }

    fn value_at_mut(&mut self, idx: usize) -> Result<&mut V> {
        match &mut self.slots[idx] {
            Slot::Occupied((_, value)) => Ok(value),
            Slot::Empty | Slot::Tombstone => Err(DictError::KeyNotFound),
        }
    }

    /// Rebuild the table with `capacity` slots, dropping every tombstone.
    ///
    /// All entries are re-probed from attempt 0. Placements are planned before anything is
    /// moved, so on failure the table is left exactly as it was.
    fn rehash(&mut self, capacity: usize) -> Result<()> {
        if capacity == self.slots.len() {
            log::trace!(
                "Purging {} tombstones from open-addressing table of {} slots.",
                self.tombstones,
                capacity
            );
        } else {
            log::debug!(
                "Rehashing open-addressing table: {} -> {} slots, {} entries.",
                self.slots.len(),
                capacity,
                self.len
            );
        }

        let mut taken = bitvec![0; capacity];
        let mut placements = Vec::with_capacity(self.len);
        for (from, slot) in self.slots.iter().enumerate() {
            if let Slot::Occupied((key, _)) = slot {
                let hash = self.indexer.hash_unchecked(key);
                let to = ProbeSequence::new(self.probing, hash, capacity)
                    .find(|&idx| !taken[idx])
                    .ok_or(DictError::TableFull)?;
                taken.set(to, true);
                placements.push((from, to));
            }
        }

        let mut slots = empty_slots(capacity);
        for (from, to) in placements {
            slots[to] = std::mem::take(&mut self.slots[from]);
        }
        self.slots = slots;
        self.tombstones = 0;
        Ok(())
    }

    /// Insert a key known to be absent.
    ///
    /// # Parameters
    ///
    /// - `hash`: The hash of `key`.
    /// - `reusable`: The insertion point found by the preceding lookup.
    fn insert_absent(
        &mut self,
        key: K,
        value: V,
        hash: u64,
        reusable: Option<usize>,
    ) -> Result<()> {
        let next_capacity = self
            .policy
            .next_capacity(self.len, self.tombstones, self.slots.len())?;
        let reusable = match next_capacity {
            Some(capacity) => {
                self.rehash(capacity)?;
                // The key is absent and a fresh table has no tombstones, so the first free
                // slot of the probe is where a lookup would stop.
                ProbeSequence::new(self.probing, hash, self.slots.len())
                    .find(|&idx| matches!(self.slots[idx], Slot::Empty))
            }
            None => reusable,
        };
        let idx = reusable.ok_or(DictError::TableFull)?;

        if matches!(self.slots[idx], Slot::Tombstone) {
            self.tombstones -= 1;
        }
        self.slots[idx] = Slot::Occupied((key, value));
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

impl<K: Key, V, S: BuildHasher> Dictionary<K, V> for OpenAddressingTable<K, V, S> {
    fn get(&self, key: &K) -> Result<&V> {
        match self.find(key)? {
            Some(idx) => self.value_at(idx),
            None => Err(DictError::KeyNotFound),
        }
    }

    fn get_mut(&mut self, key: &K) -> Result<&mut V> {
        match self.find(key)? {
            Some(idx) => self.value_at_mut(idx),
            None => Err(DictError::KeyNotFound),
        }
    }

    fn try_get(&self, key: &K) -> Option<&V> {
        self.get(key).ok()
    }

    fn set(&mut self, key: K, value: V) -> Result<()> {
        match self.lookup(&key)? {
            (_, Lookup::Found(idx)) => {
                *self.value_at_mut(idx)? = value;
                Ok(())
            }
            (hash, Lookup::Vacant(reusable)) => self.insert_absent(key, value, hash, reusable),
        }
    }

    fn add(&mut self, key: K, value: V) -> Result<()> {
        match self.lookup(&key)? {
            (_, Lookup::Found(_)) => Err(DictError::DuplicateKey),
            (hash, Lookup::Vacant(reusable)) => self.insert_absent(key, value, hash, reusable),
        }
    }

    fn remove(&mut self, key: &K) -> Result<bool> {
        match self.find(key)? {
            Some(idx) => {
                // An empty slot here would cut the probe chains running through it.
                self.slots[idx] = Slot::Tombstone;
                self.len -= 1;
                self.tombstones += 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn clear(&mut self) {
        self.slots.fill_with(Slot::default);
        self.len = 0;
        self.tombstones = 0;
    }

    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a,
    {
        OpenAddressingTable::iter(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hashing::Probing;
    use crate::resize::ResizePolicy;
    use bucketry_core::{BucketView, IndexLocator};
    use bucketry_testing::{assert_full_cycle, init_test_logger, ConstantState, IdentityState};

    const ALL: [Probing; 3] = [Probing::Linear, Probing::Quadratic, Probing::DoubleHashing];

    fn identity_table(
        capacity: usize,
        probing: Probing,
    ) -> OpenAddressingTable<u64, &'static str, IdentityState> {
        OpenAddressingTable::with_capacity_and_hasher(capacity, probing, IdentityState).unwrap()
    }

    /// A table that never grows on its own.
    fn unbounded<K, V, S>(mut table: OpenAddressingTable<K, V, S>) -> OpenAddressingTable<K, V, S> {
        table.policy = ResizePolicy::new(1.0);
        table
    }

    #[test]
    fn test_linear_probing_wraps_around() {
        let mut table = identity_table(4, Probing::Linear);

        table.set(2, "a").unwrap();
        table.set(6, "b").unwrap();
        table.set(10, "c").unwrap();

        assert_eq!(table.capacity(), 4);
        assert_eq!(table.array_index(&2), Some(2));
        assert_eq!(table.array_index(&6), Some(3));
        assert_eq!(table.array_index(&10), Some(0));
        let layout: Vec<(usize, u64)> = table
            .buckets()
            .map(|bucket| (bucket.index, bucket.entries[0].0))
            .collect();
        assert_eq!(layout, [(0, 10), (2, 2), (3, 6)]);
    }

    #[test]
    fn test_remove_leaves_probe_chain_intact() {
        for probing in ALL {
            let mut table = identity_table(8, probing);

            table.set(3, "a").unwrap();
            table.set(11, "b").unwrap();
            table.set(19, "c").unwrap();
            assert_eq!(table.array_index(&3), Some(3));

            assert_eq!(table.remove(&3), Ok(true));
            assert_eq!(table.tombstones(), 1);
            assert_eq!(table.get(&11), Ok(&"b"), "{probing:?}");
            assert_eq!(table.get(&19), Ok(&"c"), "{probing:?}");
            assert_eq!(table.get(&3), Err(DictError::KeyNotFound));
            assert_eq!(table.remove(&3), Ok(false));
            assert_eq!(table.len(), 2);
        }
    }

    #[test]
    fn test_set_after_remove_does_not_duplicate() {
        let mut table = identity_table(8, Probing::Linear);

        table.set(1, "a").unwrap();
        table.set(9, "b").unwrap();
        table.remove(&1).unwrap();

        // 9 sits behind the tombstone; replacing must find it rather than take the tombstone.
        table.set(9, "B").unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.array_index(&9), Some(2));
        assert_eq!(table.tombstones(), 1);
        assert_eq!(table.iter().count(), 1);

        // A new key reuses the tombstone.
        table.set(17, "c").unwrap();
        assert_eq!(table.array_index(&17), Some(1));
        assert_eq!(table.tombstones(), 0);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_add_rejects_key_behind_tombstone() {
        let mut table = identity_table(8, Probing::Quadratic);

        table.add(4, "a").unwrap();
        table.add(12, "b").unwrap();
        table.remove(&4).unwrap();

        assert_eq!(table.add(12, "c"), Err(DictError::DuplicateKey));
        assert_eq!(table.get(&12), Ok(&"b"));
        table.add(4, "d").unwrap();
        assert_eq!(table.get(&4), Ok(&"d"));
    }

    #[test]
    fn test_grows_before_exceeding_half_load() {
        init_test_logger();
        let mut table = identity_table(4, Probing::Linear);

        for key in 0..3 {
            table.set(key, "x").unwrap();
        }
        assert_eq!(table.capacity(), 4);

        table.set(3, "x").unwrap();
        assert_eq!(table.capacity(), 8);
        for key in 0..4 {
            assert_eq!(table.array_index(&key), Some(key as usize));
        }
    }

    #[test]
    fn test_resize_drops_tombstones() {
        let mut table = identity_table(4, Probing::Linear);

        table.set(0, "a").unwrap();
        table.set(1, "b").unwrap();
        table.set(2, "c").unwrap();
        table.remove(&0).unwrap();
        table.set(5, "d").unwrap();
        table.set(6, "e").unwrap();

        assert_eq!(table.capacity(), 8);
        assert_eq!(table.tombstones(), 0);
        for (key, value) in [(1, "b"), (2, "c"), (5, "d"), (6, "e")] {
            assert_eq!(table.get(&key), Ok(&value));
        }
    }

    #[test]
    fn test_tombstones_trigger_rebuild_at_same_capacity() {
        init_test_logger();
        let mut table = identity_table(8, Probing::Linear);

        for key in 0..4 {
            table.set(key, "x").unwrap();
        }
        for key in 0..3 {
            table.remove(&key).unwrap();
        }
        table.set(4, "y").unwrap();
        assert_eq!(table.tombstones(), 3);

        table.set(5, "z").unwrap();
        assert_eq!(table.capacity(), 8);
        assert_eq!(table.tombstones(), 0);
        assert_eq!(table.len(), 3);
        for (key, value) in [(3, "x"), (4, "y"), (5, "z")] {
            assert_eq!(table.get(&key), Ok(&value));
            assert_eq!(table.array_index(&key), Some(key as usize));
        }
    }

    #[test]
    fn test_colliding_keys_fill_every_slot() {
        for probing in ALL {
            for capacity in [1, 2, 8, 32] {
                let mut table = unbounded(
                    OpenAddressingTable::<u32, u32, _>::with_capacity_and_hasher(
                        capacity,
                        probing,
                        ConstantState::<0x0000_0007_0000_0003>,
                    )
                    .unwrap(),
                );

                for key in 0..capacity as u32 {
                    table.add(key, key).unwrap();
                }
                assert_eq!(table.capacity(), capacity);
                let slots = (0..capacity as u32).map(|key| table.array_index(&key).unwrap());
                assert_full_cycle(slots, capacity);

                assert_eq!(table.add(capacity as u32, 0), Err(DictError::TableFull));
                assert_eq!(table.set(capacity as u32, 0), Err(DictError::TableFull));
                assert_eq!(table.len(), capacity);
                for key in 0..capacity as u32 {
                    assert_eq!(table.get(&key), Ok(&key));
                }
            }
        }
    }

    #[test]
    fn test_full_table_still_answers_lookups() {
        let mut table = unbounded(identity_table(4, Probing::DoubleHashing));

        for key in [1, 2, 3, 4] {
            table.set(key, "x").unwrap();
        }
        assert_eq!(table.try_get(&5), None);
        assert!(!table.contains_key(&9));
        assert_eq!(table.remove(&5), Ok(false));

        table.remove(&2).unwrap();
        table.set(6, "y").unwrap();
        assert_eq!(table.array_index(&6), Some(2));
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_failed_rehash_leaves_table_untouched() {
        let mut table = unbounded(identity_table(4, Probing::Linear));
        for key in 0..4 {
            table.set(key, "x").unwrap();
        }

        assert_eq!(table.rehash(2), Err(DictError::TableFull));
        assert_eq!(table.capacity(), 4);
        for key in 0..4 {
            assert_eq!(table.array_index(&key), Some(key as usize));
        }
    }

    #[test]
    fn test_clear_resets_tombstones() {
        let mut table = identity_table(8, Probing::Quadratic);

        for key in 0..4 {
            table.set(key, "x").unwrap();
        }
        table.remove(&1).unwrap();
        table.clear();

        assert_eq!(table.capacity(), 8);
        assert!(table.is_empty());
        assert_eq!(table.tombstones(), 0);
        assert_eq!(table.buckets().count(), 0);
        table.set(1, "y").unwrap();
        assert_eq!(table.array_index(&1), Some(1));
    }

    #[test]
    fn test_get_mut() {
        let mut table = identity_table(8, Probing::DoubleHashing);

        table.set(5, "a").unwrap();
        *table.get_mut(&5).unwrap() = "b";
        assert_eq!(table.get(&5), Ok(&"b"));
        assert_eq!(table.get_mut(&13), Err(DictError::KeyNotFound));
    }

    #[test]
    fn test_absent_key_is_invalid() {
        for probing in ALL {
            let mut table: OpenAddressingTable<Option<String>, u32> =
                OpenAddressingTable::new(probing);

            assert_eq!(table.set(None, 1), Err(DictError::InvalidKey));
            assert_eq!(table.add(None, 1), Err(DictError::InvalidKey));
            assert_eq!(table.get(&None), Err(DictError::InvalidKey));
            assert_eq!(table.remove(&None), Err(DictError::InvalidKey));
            assert_eq!(table.try_get(&None), None);
            assert!(!table.contains_key(&None));
            assert_eq!(table.array_index(&None), None);
            assert!(table.is_empty());
        }
    }

    #[test]
    fn test_try_extend() {
        let mut table: OpenAddressingTable<u16, u16> = OpenAddressingTable::new(Probing::Linear);

        table.try_extend((0..100).map(|key| (key, key + 1))).unwrap();
        assert_eq!(table.len(), 100);
        assert_eq!(table.capacity(), 256);
        assert!(table.values().all(|&value| value > 0));
    }

    #[test]
    fn test_debug_shows_slot_states() {
        let mut table = identity_table(2, Probing::Linear);
        table.set(0, "a").unwrap();
        table.remove(&0).unwrap();

        let rendered = format!("{table:?}");
        assert!(rendered.starts_with("OpenAddressingTable"));
        assert!(rendered.contains("Tombstone"));
        assert!(rendered.contains("Empty"));
    }

    mod linear {
        use crate::hashing::Probing;
        use crate::open_addressing::OpenAddressingTable;
        use crate::resize::ResizePolicy;
        use bucketry_core::Key;

        fn factory<K: Key, V>() -> OpenAddressingTable<K, V> {
            OpenAddressingTable::with_capacity(4, Probing::Linear).unwrap()
        }

        bucketry_testing::generate_dictionary_tests!(
            factory,
            ResizePolicy::OPEN_ADDRESSING.max_load_factor(),
            u16,
            i32,
            u64,
            i128,
            String
        );
    }

    mod quadratic {
        use crate::hashing::Probing;
        use crate::open_addressing::OpenAddressingTable;
        use crate::resize::ResizePolicy;
        use bucketry_core::Key;

        fn factory<K: Key, V>() -> OpenAddressingTable<K, V> {
            OpenAddressingTable::with_capacity(4, Probing::Quadratic).unwrap()
        }

        bucketry_testing::generate_dictionary_tests!(
            factory,
            ResizePolicy::OPEN_ADDRESSING.max_load_factor(),
            u16,
            i32,
            u64,
            i128,
            String
        );
    }

    mod double_hashing {
        use crate::hashing::Probing;
        use crate::open_addressing::OpenAddressingTable;
        use crate::resize::ResizePolicy;
        use bucketry_core::Key;

        fn factory<K: Key, V>() -> OpenAddressingTable<K, V> {
            OpenAddressingTable::with_capacity(4, Probing::DoubleHashing).unwrap()
        }

        bucketry_testing::generate_dictionary_tests!(
            factory,
            ResizePolicy::OPEN_ADDRESSING.max_load_factor(),
            u16,
            i32,
            u64,
            i128,
            String
        );
    }
}
