//! Contract checks every dictionary implementation has to pass.
use crate::generate::{generate_entries, Generate};
use bucketry_core::{BucketView, DictError, Dictionary, IndexLocator, Key};
use rand::Rng;
use std::collections::HashSet;
use std::fmt::Debug;

/// Fills `dict` with `size` entries and reads every one of them back.
pub fn check_round_trip<R, K, D>(rng: &mut R, dict: &mut D, size: usize)
where
    R: Rng,
    K: Key + Generate<R> + Clone + Debug,
    D: Dictionary<K, u64>,
{
    let entries = generate_entries::<_, K, u64>(rng, size);
    for (key, value) in &entries {
        dict.set(key.clone(), *value).unwrap();
    }
    assert_eq!(dict.len(), entries.len());
    for (key, value) in &entries {
        assert_eq!(dict.get(key), Ok(value), "Key: {:?}", key);
    }
}

/// Verifies that the count only changes on insertion of a new key or removal of a present one.
pub fn check_count_invariant<R, K, D>(rng: &mut R, dict: &mut D, size: usize)
where
    R: Rng,
    K: Key + Generate<R> + Clone + Debug,
    D: Dictionary<K, u64>,
{
    let entries = generate_entries::<_, K, u64>(rng, size);
    for (n, (key, value)) in entries.iter().enumerate() {
        dict.set(key.clone(), *value).unwrap();
        assert_eq!(dict.len(), n + 1);
        dict.set(key.clone(), value.wrapping_add(1)).unwrap();
        assert_eq!(
            dict.len(),
            n + 1,
            "Overwrite changed the count, key: {:?}",
            key
        );
        assert_eq!(dict.add(key.clone(), *value), Err(DictError::DuplicateKey));
        assert_eq!(dict.len(), n + 1);
    }
    for (n, (key, _)) in entries.iter().enumerate() {
        assert_eq!(dict.remove(key), Ok(true), "Key: {:?}", key);
        assert_eq!(dict.remove(key), Ok(false), "Key: {:?}", key);
        assert_eq!(dict.len(), entries.len() - n - 1);
    }
    assert!(dict.is_empty());
}

/// Verifies that enumeration yields every key exactly once.
pub fn check_no_duplicate_keys<R, K, D>(rng: &mut R, dict: &mut D, size: usize)
where
    R: Rng,
    K: Key + Generate<R> + Clone + Debug,
    D: Dictionary<K, u64>,
{
    let entries = generate_entries::<_, K, u64>(rng, size);
    // Every key goes in twice and every third one is removed again.
    for (key, value) in entries.iter().chain(entries.iter()) {
        dict.set(key.clone(), *value).unwrap();
    }
    for (key, _) in entries.iter().step_by(3) {
        dict.remove(key).unwrap();
    }

    let mut seen = HashSet::new();
    for key in dict.keys() {
        assert!(seen.insert(key), "Key enumerated twice: {:?}", key);
    }
    assert_eq!(seen.len(), dict.len());
    assert_eq!(dict.iter().count(), dict.len());
}

/// Verifies that growth keeps every entry reachable and the load factor bounded.
pub fn check_resize_preserves_contents<R, K, D>(
    rng: &mut R,
    dict: &mut D,
    size: usize,
    max_load_factor: f64,
) where
    R: Rng,
    K: Key + Generate<R> + Clone + Debug,
    D: Dictionary<K, u64>,
{
    let entries = generate_entries::<_, K, u64>(rng, size);
    let initial_capacity = dict.capacity();
    for (n, (key, value)) in entries.iter().enumerate() {
        dict.add(key.clone(), *value).unwrap();
        // The check runs before an insertion, so one entry may land above the threshold.
        let bound = max_load_factor + 1.0 / dict.capacity() as f64;
        assert!(
            dict.load_factor() <= bound,
            "Load factor {} above {} after {} insertions",
            dict.load_factor(),
            bound,
            n + 1
        );
    }
    assert!(dict.capacity() > initial_capacity, "Table never grew");
    for (key, value) in &entries {
        assert_eq!(dict.get(key), Ok(value), "Key: {:?}", key);
    }
}

/// Verifies that keys which were never inserted are reported as missing.
pub fn check_missing_keys<R, K, D>(rng: &mut R, dict: &mut D, size: usize)
where
    R: Rng,
    K: Key + Generate<R> + Clone + Debug,
    D: Dictionary<K, u64>,
{
    let keys = K::generate_many(rng, &K::GenerateParams::default(), size * 2);
    let (present, missing) = keys.split_at(size);
    for key in present {
        dict.set(key.clone(), 0).unwrap();
    }
    for key in missing {
        assert_eq!(dict.get(key), Err(DictError::KeyNotFound), "Key: {:?}", key);
        assert_eq!(dict.try_get(key), None, "Key: {:?}", key);
        assert!(!dict.contains_key(key), "Key: {:?}", key);
        assert_eq!(dict.remove(key), Ok(false), "Key: {:?}", key);
    }
    assert_eq!(dict.len(), size);
}

/// Verifies that clearing keeps the capacity and leaves a usable table.
pub fn check_clear<R, K, D>(rng: &mut R, dict: &mut D, size: usize)
where
    R: Rng,
    K: Key + Generate<R> + Clone + Debug,
    D: Dictionary<K, u64>,
{
    let entries = generate_entries::<_, K, u64>(rng, size);
    for (key, value) in &entries {
        dict.set(key.clone(), *value).unwrap();
    }
    let capacity = dict.capacity();
    dict.clear();
    assert_eq!(dict.len(), 0);
    assert_eq!(dict.capacity(), capacity);
    assert_eq!(dict.iter().count(), 0);
    for (key, value) in &entries {
        assert!(!dict.contains_key(key), "Key: {:?}", key);
        dict.add(key.clone(), *value).unwrap();
    }
    assert_eq!(dict.len(), entries.len());
}

/// Verifies that the introspection views agree with each other and with the contents.
pub fn check_layout<R, K, D>(rng: &mut R, dict: &mut D, size: usize)
where
    R: Rng,
    K: Key + Generate<R> + Clone + Debug,
    D: Dictionary<K, u64> + BucketView<K, u64> + IndexLocator<K>,
{
    let entries = generate_entries::<_, K, u64>(rng, size);
    for (key, value) in &entries {
        dict.set(key.clone(), *value).unwrap();
    }

    let mut total = 0;
    let mut last_index = None;
    for bucket in dict.buckets() {
        assert!(bucket.index < dict.capacity());
        assert!(
            !bucket.entries.is_empty(),
            "Empty bucket {} reported",
            bucket.index
        );
        assert!(last_index < Some(bucket.index), "Buckets out of order");
        last_index = Some(bucket.index);
        for (key, _) in bucket.entries {
            assert_eq!(dict.array_index(key), Some(bucket.index), "Key: {:?}", key);
        }
        total += bucket.entries.len();
    }
    assert_eq!(total, dict.len());
}

/// Generates the contract test-suite for a dictionary factory.
///
/// `$factory` has to be a generic function `fn<K: Key, V>() -> T` returning an empty
/// table, `$max_load_factor` the threshold the produced tables grow at.
///
/// # Example
///
/// ```ignore
/// generate_dictionary_tests!(factory, 0.75, u16, u64, String);
/// ```
#[macro_export]
macro_rules! generate_dictionary_tests {
    ($factory:ident, $max_load_factor:expr, $($key_type:ty),+ $(,)?) => {
        $(
            $crate::generate_dictionary_tests!(@single $factory, $max_load_factor, $key_type);
        )+
    };
    (@single $factory:ident, $max_load_factor:expr, $key_type:ty) => {
        compose_idents::compose_idents!(
            test_round_trip = concat(test_round_trip_, normalize($key_type)),
            test_count_invariant = concat(test_count_invariant_, normalize($key_type)),
            test_no_duplicate_keys = concat(test_no_duplicate_keys_, normalize($key_type)),
            test_resize = concat(test_resize_preserves_contents_, normalize($key_type)),
            test_missing_keys = concat(test_missing_keys_, normalize($key_type)),
            test_clear = concat(test_clear_, normalize($key_type)),
            test_layout = concat(test_layout_, normalize($key_type)),
            test_model = concat(test_model_equivalence_, normalize($key_type)),
            {
                #[test]
                #[allow(non_snake_case)]
                fn test_round_trip() {
                    let mut rng = $crate::seeded_rng(1);
                    let mut dict = $factory::<$key_type, u64>();
                    $crate::check_round_trip(&mut rng, &mut dict, 1000);
                }

                #[test]
                #[allow(non_snake_case)]
                fn test_count_invariant() {
                    let mut rng = $crate::seeded_rng(2);
                    let mut dict = $factory::<$key_type, u64>();
                    $crate::check_count_invariant(&mut rng, &mut dict, 500);
                }

                #[test]
                #[allow(non_snake_case)]
                fn test_no_duplicate_keys() {
                    let mut rng = $crate::seeded_rng(3);
                    let mut dict = $factory::<$key_type, u64>();
                    $crate::check_no_duplicate_keys(&mut rng, &mut dict, 500);
                }

                #[test]
                #[allow(non_snake_case)]
                fn test_resize() {
                    let mut rng = $crate::seeded_rng(4);
                    let mut dict = $factory::<$key_type, u64>();
                    $crate::check_resize_preserves_contents(
                        &mut rng,
                        &mut dict,
                        1000,
                        $max_load_factor,
                    );
                }

                #[test]
                #[allow(non_snake_case)]
                fn test_missing_keys() {
                    let mut rng = $crate::seeded_rng(5);
                    let mut dict = $factory::<$key_type, u64>();
                    $crate::check_missing_keys(&mut rng, &mut dict, 500);
                }

                #[test]
                #[allow(non_snake_case)]
                fn test_clear() {
                    let mut rng = $crate::seeded_rng(6);
                    let mut dict = $factory::<$key_type, u64>();
                    $crate::check_clear(&mut rng, &mut dict, 200);
                }

                #[test]
                #[allow(non_snake_case)]
                fn test_layout() {
                    let mut rng = $crate::seeded_rng(7);
                    let mut dict = $factory::<$key_type, u64>();
                    $crate::check_layout(&mut rng, &mut dict, 500);
                }

                #[test]
                #[allow(non_snake_case)]
                #[cfg_attr(not(feature = "_slow-tests"), ignore)]
                fn test_model() {
                    let mut rng = $crate::seeded_rng(8);
                    let mut dict = $factory::<$key_type, u64>();
                    $crate::model_equivalence(&mut rng, &mut dict, 2000, 100_000);
                }
            }
        );
    };
}
