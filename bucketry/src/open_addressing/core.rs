//! Declares core types for [`OpenAddressingTable`].
use crate::hashing::{DefaultHashBuilder, HashIndexer, Probing};
use crate::resize::ResizePolicy;
use std::fmt::{Debug, Formatter};

/// Hash table resolving collisions by open addressing.
///
/// Every slot is either empty, occupied by one entry, or a tombstone left by a removal.
/// Lookups walk the key's probe sequence until they find the key or an empty slot, so
/// tombstones keep entries that were placed past a removed one reachable. Insertions reuse
/// the first tombstone on the way. Tombstones are only dropped when the table is rebuilt.
///
/// The capacity is always a power of two, which lets every [`Probing`] strategy visit all
/// the slots in one probe cycle.
///
/// # Examples
///
/// ```rust
/// use bucketry::{Dictionary, IndexLocator, OpenAddressingTable, Probing};
///
/// let mut table = OpenAddressingTable::with_capacity(10, Probing::Quadratic).unwrap();
/// assert_eq!(table.capacity(), 16);
///
/// table.set("apple", 3).unwrap();
/// table.set("pear", 5).unwrap();
/// let slot = table.array_index(&"pear").unwrap();
///
/// table.remove(&"apple").unwrap();
/// assert_eq!(table.array_index(&"pear"), Some(slot));
/// assert_eq!(table.tombstones(), 1);
/// ```
pub struct OpenAddressingTable<K, V, S = DefaultHashBuilder> {
    pub(crate) indexer: HashIndexer<S>,
    pub(crate) slots: Box<[Slot<K, V>]>,
    pub(crate) probing: Probing,
    pub(crate) len: usize,
    pub(crate) tombstones: usize,
    pub(crate) policy: ResizePolicy,
}

/// State of a single slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Slot<K, V> {
    /// Never used since the last rebuild. Terminates probing.
    Empty,
    Occupied((K, V)),
    /// Used to hold an entry. Probing continues past it.
    Tombstone,
}

impl<K, V> Default for Slot<K, V> {
    fn default() -> Self {
        Slot::Empty
    }
}

impl<K, V, S> Debug for OpenAddressingTable<K, V, S>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAddressingTable")
            .field("len", &self.len)
            .field("tombstones", &self.tombstones)
            .field("probing", &self.probing)
            .field("policy", &self.policy)
            .field("slots", &self.slots)
            .finish()
    }
}

impl<K, V, S> OpenAddressingTable<K, V, S> {
    /// Get the probing strategy of the table.
    pub fn probing(&self) -> Probing {
        self.probing
    }

    /// Get the number of tombstones left by removals since the last rebuild.
    pub fn tombstones(&self) -> usize {
        self.tombstones
    }

    /// Get the growth rule of the table.
    pub fn policy(&self) -> ResizePolicy {
        self.policy
    }

    /// Get the indexer of the table.
    pub fn indexer(&self) -> &HashIndexer<S> {
        &self.indexer
    }
}

/// Allocate `capacity` empty slots.
pub(crate) fn empty_slots<K, V>(capacity: usize) -> Box<[Slot<K, V>]> {
    std::iter::repeat_with(Slot::default).take(capacity).collect()
}
