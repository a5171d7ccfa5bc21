//! The dictionary contract shared by every table of the project.
use crate::error::Result;
use crate::key::Key;

/// A mutable associative array.
///
/// Fallible keyed operations report [`crate::DictError::InvalidKey`] when handed an absent key,
/// while pure queries ([`Dictionary::try_get`], [`Dictionary::contains_key`]) never fail and
/// treat such a key as not present.
///
/// # Concurrency
///
/// Implementations are plain single-threaded data structures: every mutation takes `&mut self`
/// and runs to completion, including an eventual resize. Sharing a table between threads
/// requires external synchronization (e.g. a [`std::sync::Mutex`]).
pub trait Dictionary<K: Key, V> {
    /// Get the value associated with the given `key`.
    ///
    /// Fails with [`crate::DictError::KeyNotFound`] if there is none.
    fn get(&self, key: &K) -> Result<&V>;

    /// Get a mutable reference to the value associated with the given `key`.
    fn get_mut(&mut self, key: &K) -> Result<&mut V>;

    /// Get the value associated with the given `key` if there is one.
    fn try_get(&self, key: &K) -> Option<&V>;

    /// Insert or replace the value associated with the given `key`.
    ///
    /// Replacing keeps the entry where it is; only inserting a new key can trigger a resize.
    fn set(&mut self, key: K, value: V) -> Result<()>;

    /// Insert a new entry, failing with [`crate::DictError::DuplicateKey`] if `key` is present.
    fn add(&mut self, key: K, value: V) -> Result<()>;

    /// Remove the entry of the given `key`, returning whether there was one.
    ///
    /// Never shrinks the table.
    fn remove(&mut self, key: &K) -> Result<bool>;

    /// Check whether the given `key` is present.
    fn contains_key(&self, key: &K) -> bool {
        self.try_get(key).is_some()
    }

    /// Remove every entry, keeping the capacity.
    fn clear(&mut self);

    /// Get the number of live entries.
    fn len(&self) -> usize;

    /// Check if the table is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the current number of buckets (or slots).
    fn capacity(&self) -> usize;

    /// Get the load factor of the table.
    fn load_factor(&self) -> f64 {
        self.len() as f64 / self.capacity() as f64
    }

    /// Iterate over all entries in physical order.
    ///
    /// The iterator borrows the table, so it can not be mutated while an enumeration is in
    /// progress. Iterating again restarts from the first bucket.
    fn iter<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a;

    /// Iterate over all keys in the same order as [`Dictionary::iter`].
    fn keys<'a>(&'a self) -> impl Iterator<Item = &'a K>
    where
        K: 'a,
        V: 'a,
    {
        self.iter().map(|(k, _)| k)
    }

    /// Iterate over all values in the same order as [`Dictionary::iter`].
    fn values<'a>(&'a self) -> impl Iterator<Item = &'a V>
    where
        K: 'a,
        V: 'a,
    {
        self.iter().map(|(_, v)| v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DictError;

    /// Linear-scan dictionary, just enough to drive the provided methods.
    struct Assoc<K, V>(Vec<(K, V)>);

    impl<K: Key, V> Dictionary<K, V> for Assoc<K, V> {
        fn get(&self, key: &K) -> Result<&V> {
            self.try_get(key).ok_or(DictError::KeyNotFound)
        }

        fn get_mut(&mut self, key: &K) -> Result<&mut V> {
            self.0
                .iter_mut()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v)
                .ok_or(DictError::KeyNotFound)
        }

        fn try_get(&self, key: &K) -> Option<&V> {
            self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
        }

        fn set(&mut self, key: K, value: V) -> Result<()> {
            match self.0.iter().position(|(k, _)| *k == key) {
                Some(idx) => self.0[idx].1 = value,
                None => self.0.push((key, value)),
            }
            Ok(())
        }

        fn add(&mut self, key: K, value: V) -> Result<()> {
            if self.contains_key(&key) {
                return Err(DictError::DuplicateKey);
            }
            self.0.push((key, value));
            Ok(())
        }

        fn remove(&mut self, key: &K) -> Result<bool> {
            let before = self.0.len();
            self.0.retain(|(k, _)| k != key);
            Ok(self.0.len() != before)
        }

        fn clear(&mut self) {
            self.0.clear();
        }

        fn len(&self) -> usize {
            self.0.len()
        }

        fn capacity(&self) -> usize {
            self.0.capacity().max(1)
        }

        fn iter<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
        where
            K: 'a,
            V: 'a,
        {
            self.0.iter().map(|(k, v)| (k, v))
        }
    }

    /// Only the trait bound is known here, as in generic callers.
    fn collect_keys<K: Key + Clone, V, D: Dictionary<K, V>>(dict: &D) -> Vec<K> {
        dict.keys().cloned().collect()
    }

    #[test]
    fn test_provided_enumeration_methods() {
        let mut dict = Assoc(Vec::new());
        dict.set("b".to_string(), 2).unwrap();
        dict.set("a".to_string(), 1).unwrap();
        dict.set("b".to_string(), 3).unwrap();

        assert_eq!(collect_keys(&dict), ["b", "a"]);
        assert_eq!(dict.values().copied().collect::<Vec<_>>(), [3, 1]);
        assert_eq!(dict.iter().count(), dict.len());
        assert!(dict.contains_key(&"a".to_string()));
        assert!(!dict.is_empty());
    }
}
