//! Random key and value generation for table tests.
use rand::distr::Alphanumeric;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::collections::HashSet;
use std::hash::Hash;

/// Creates the reproducible generator all the test helpers are driven by.
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Provides capabilities to generate random values of the implementer-type.
pub trait Generate<R: Rng>: Sized {
    /// Parameters for data-generation specific for the type.
    type GenerateParams: Default;

    /// Generates a single random value of the type.
    fn generate(rng: &mut R, params: &Self::GenerateParams) -> Self;

    /// Generates `size` **unique** random values of the type, in generation order.
    ///
    /// The domain described by `params` has to hold at least `size` distinct values.
    fn generate_many(rng: &mut R, params: &Self::GenerateParams, size: usize) -> Vec<Self>
    where
        Self: Hash + Eq + Clone,
    {
        let mut seen = HashSet::with_capacity(size);
        let mut values = Vec::with_capacity(size);
        while values.len() < size {
            let value = Self::generate(rng, params);
            if seen.insert(value.clone()) {
                values.push(value);
            }
        }
        values
    }
}

/// Parameters for [`Generate`] implementations that generate numeric values.
pub struct NumParams<T> {
    min: T,
    max: T,
}

impl<T> NumParams<T> {
    /// Creates a new instance of [`NumParams`] with the specified minimum and maximum values.
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

macro_rules! impl_generate_num {
    ($($type:ty),*) => {
        $(
            impl Default for NumParams<$type> {
                fn default() -> Self {
                    Self { min: <$type>::MIN, max: <$type>::MAX }
                }
            }

            impl<R: Rng> Generate<R> for $type {
                type GenerateParams = NumParams<$type>;

                fn generate(rng: &mut R, params: &Self::GenerateParams) -> Self {
                    rng.random_range(params.min..=params.max)
                }
            }
        )*
    };
}

impl_generate_num!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128);

/// Parameters for [`Generate`] implementations that generate strings.
pub struct StringParams {
    min_length: usize,
    max_length: usize,
}

impl StringParams {
    pub fn new(min_length: usize, max_length: usize) -> Self {
        Self {
            min_length,
            max_length,
        }
    }
}

impl Default for StringParams {
    fn default() -> Self {
        Self {
            min_length: 0,
            max_length: 24,
        }
    }
}

impl<R: Rng> Generate<R> for String {
    type GenerateParams = StringParams;

    fn generate(rng: &mut R, params: &Self::GenerateParams) -> Self {
        let length = rng.random_range(params.min_length..=params.max_length);
        (0..length)
            .map(|_| char::from(rng.sample(Alphanumeric)))
            .collect()
    }
}

/// Always generates present values; absent keys are tested explicitly.
impl<R: Rng, T: Generate<R>> Generate<R> for Option<T> {
    type GenerateParams = T::GenerateParams;

    fn generate(rng: &mut R, params: &Self::GenerateParams) -> Self {
        Some(T::generate(rng, params))
    }
}

/// Generates entries with unique keys.
pub fn generate_entries<R, K, V>(rng: &mut R, size: usize) -> Vec<(K, V)>
where
    R: Rng,
    K: Generate<R> + Hash + Eq + Clone,
    V: Generate<R>,
{
    let keys = K::generate_many(rng, &K::GenerateParams::default(), size);
    keys.into_iter()
        .map(|key| (key, V::generate(rng, &V::GenerateParams::default())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_many_is_unique() {
        let mut rng = seeded_rng(7);

        let values = u8::generate_many(&mut rng, &NumParams::new(0, 99), 100);
        let unique: HashSet<u8> = values.iter().copied().collect();
        assert_eq!(values.len(), 100);
        assert_eq!(unique.len(), 100);
    }

    #[test]
    fn test_generation_is_reproducible() {
        let first = generate_entries::<_, String, u64>(&mut seeded_rng(42), 50);
        let second = generate_entries::<_, String, u64>(&mut seeded_rng(42), 50);
        assert_eq!(first, second);
    }

    #[test]
    fn test_string_params() {
        let mut rng = seeded_rng(3);
        for _ in 0..100 {
            let value = String::generate(&mut rng, &StringParams::new(2, 5));
            assert!((2..=5).contains(&value.len()));
            assert!(value.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }
}
