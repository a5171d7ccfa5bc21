//! Checks a dictionary against [`std::collections::HashMap`] under a random workload.
use crate::generate::Generate;
use bucketry_core::{DictError, Dictionary, Key};
use rand::Rng;
use std::collections::HashMap;
use std::fmt::Debug;

#[derive(Debug, Clone, Copy)]
enum Op {
    Set,
    Add,
    Remove,
    Get,
    ContainsKey,
    Clear,
}

impl Op {
    fn pick<R: Rng>(rng: &mut R) -> Self {
        // Clearing is rare so that tables get the chance to grow.
        match rng.random_range(0..100) {
            0..=29 => Op::Set,
            30..=54 => Op::Add,
            55..=74 => Op::Remove,
            75..=89 => Op::Get,
            90..=98 => Op::ContainsKey,
            _ => Op::Clear,
        }
    }
}

/// Applies `num_ops` random operations to both `dict` and a model map and asserts they agree.
///
/// Keys are drawn from a pool of `num_keys` distinct keys so that operations hit both
/// present and missing keys.
///
/// # Panics
///
/// - If any result or the length of `dict` diverges from the model
/// - If the final contents differ
pub fn model_equivalence<R, K, D>(rng: &mut R, dict: &mut D, num_keys: usize, num_ops: usize)
where
    R: Rng,
    K: Key + Generate<R> + Clone + Debug,
    D: Dictionary<K, u64>,
{
    let pool = K::generate_many(rng, &K::GenerateParams::default(), num_keys);
    let mut model: HashMap<K, u64> = HashMap::new();

    for step in 0..num_ops {
        let key = &pool[rng.random_range(0..pool.len())];
        let op = Op::pick(rng);
        match op {
            Op::Set => {
                let value = rng.next_u64();
                assert_eq!(
                    dict.set(key.clone(), value),
                    Ok(()),
                    "Step {step}: {op:?} {key:?}"
                );
                model.insert(key.clone(), value);
            }
            Op::Add => {
                let value = rng.next_u64();
                let expected = if model.contains_key(key) {
                    Err(DictError::DuplicateKey)
                } else {
                    model.insert(key.clone(), value);
                    Ok(())
                };
                assert_eq!(
                    dict.add(key.clone(), value),
                    expected,
                    "Step {step}: {op:?} {key:?}"
                );
            }
            Op::Remove => {
                let expected = model.remove(key).is_some();
                assert_eq!(
                    dict.remove(key),
                    Ok(expected),
                    "Step {step}: {op:?} {key:?}"
                );
            }
            Op::Get => {
                let expected = model.get(key).ok_or(DictError::KeyNotFound);
                assert_eq!(dict.get(key), expected, "Step {step}: {op:?} {key:?}");
            }
            Op::ContainsKey => {
                assert_eq!(
                    dict.contains_key(key),
                    model.contains_key(key),
                    "Step {step}: {op:?} {key:?}"
                );
            }
            Op::Clear => {
                dict.clear();
                model.clear();
            }
        }
        assert_eq!(dict.len(), model.len(), "Step {step}: length after {op:?}");
    }

    let actual: HashMap<K, u64> = dict.iter().map(|(k, v)| (k.clone(), *v)).collect();
    assert_eq!(actual.len(), dict.len(), "Enumeration yielded a key twice");
    assert_eq!(actual, model);
}
