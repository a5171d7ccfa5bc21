//! Declares core types for [`ChainingTable`].
use crate::hashing::{DefaultHashBuilder, HashIndexer};
use crate::resize::ResizePolicy;
use std::fmt::{Debug, Formatter};

/// Hash table resolving collisions by separate chaining.
///
/// Each of the `capacity` buckets is an ordered, duplicate-free list of entries whose keys
/// index into it. New keys are appended to their bucket, so enumeration yields buckets in
/// ascending index and entries of a bucket in insertion order.
///
/// # Examples
///
/// ```rust
/// use bucketry::{BucketView, ChainingTable, Dictionary, DictError};
///
/// let mut book_reviews = ChainingTable::with_capacity(4).unwrap();
/// book_reviews.set("Grimms' Fairy Tales", "Masterpiece.").unwrap();
/// book_reviews.set("Pride and Prejudice", "Very enjoyable.").unwrap();
///
/// assert_eq!(
///     book_reviews.add("Pride and Prejudice", "Meh."),
///     Err(DictError::DuplicateKey),
/// );
/// assert_eq!(book_reviews.get(&"Les Misérables"), Err(DictError::KeyNotFound));
///
/// let stored: usize = book_reviews.buckets().map(|bucket| bucket.entries.len()).sum();
/// assert_eq!(stored, book_reviews.len());
/// ```
pub struct ChainingTable<K, V, S = DefaultHashBuilder> {
    pub(crate) indexer: HashIndexer<S>,
    pub(crate) buckets: Box<[Vec<(K, V)>]>,
    pub(crate) len: usize,
    pub(crate) policy: ResizePolicy,
}

impl<K, V, S> Debug for ChainingTable<K, V, S>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainingTable")
            .field("len", &self.len)
            .field("policy", &self.policy)
            .field("buckets", &self.buckets)
            .finish()
    }
}

impl<K, V, S> ChainingTable<K, V, S> {
    /// Get the number of entries stored beyond the first one of their bucket.
    pub fn num_collisions(&self) -> usize {
        self.buckets
            .iter()
            .map(|bucket| bucket.len().saturating_sub(1))
            .sum()
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

/// Allocate `capacity` empty buckets. Empty buckets do not allocate.
pub(crate) fn empty_buckets<K, V>(capacity: usize) -> Box<[Vec<(K, V)>]> {
    std::iter::repeat_with(Vec::new).take(capacity).collect()
}
