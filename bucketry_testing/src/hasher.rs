//! Hash builders with predictable output, for steering keys into chosen slots.
//!
//! Intentionally terrible as general-purpose hashes.
use std::hash::{BuildHasher, Hasher};

/// Builds [`IdentityHasher`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityState;

/// Hashes a single integer to itself.
///
/// Composite values (strings, tuples, enums) are folded deterministically, so they still
/// get a usable hash.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityHasher {
    state: u64,
}

impl IdentityHasher {
    #[inline]
    fn fold(&mut self, value: u64) {
        self.state = self.state.wrapping_mul(31).wrapping_add(value);
    }
}

macro_rules! impl_identity_writes {
    ($($method:ident: $type:ty),*) => {
        $(
            #[inline]
            fn $method(&mut self, value: $type) {
                self.fold(value as u64);
            }
        )*
    };
}

impl Hasher for IdentityHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.fold(byte as u64);
        }
    }

    impl_identity_writes!(
        write_u8: u8, write_u16: u16, write_u32: u32, write_u64: u64, write_usize: usize,
        write_i8: i8, write_i16: i16, write_i32: i32, write_i64: i64, write_isize: isize
    );

    fn write_u128(&mut self, value: u128) {
        self.fold(value as u64 ^ (value >> 64) as u64);
    }

    fn write_i128(&mut self, value: i128) {
        self.write_u128(value as u128);
    }
}

impl BuildHasher for IdentityState {
    type Hasher = IdentityHasher;

    fn build_hasher(&self) -> IdentityHasher {
        IdentityHasher::default()
    }
}

/// Builds [`ConstantHasher`]s: every key collides.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConstantState<const HASH: u64>;

/// Ignores its input and always produces `HASH`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConstantHasher<const HASH: u64>;

impl<const HASH: u64> Hasher for ConstantHasher<HASH> {
    fn finish(&self) -> u64 {
        HASH
    }

    fn write(&mut self, _bytes: &[u8]) {}
}

impl<const HASH: u64> BuildHasher for ConstantState<HASH> {
    type Hasher = ConstantHasher<HASH>;

    fn build_hasher(&self) -> ConstantHasher<HASH> {
        ConstantHasher
    }
}
