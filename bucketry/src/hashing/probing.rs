//! Implements the probing strategies of open addressing.
use crate::hashing::common::{reduce, secondary_step};

/// Collision-resolution strategy of an open-addressing table.
///
/// Fixed for the lifetime of a table. All strategies visit every slot within `capacity`
/// attempts when `capacity` is a power of two, which is what [`crate::OpenAddressingTable`]
/// always uses.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Probing {
    /// `home + attempt`.
    #[default]
    Linear,
    /// `home + (attempt + attempt^2) / 2`.
    ///
    /// Triangular offsets cover the whole table only for power-of-two capacities; for other
    /// capacities candidates repeat and a table could report
    /// [`bucketry_core::DictError::TableFull`] before it is actually full.
    Quadratic,
    /// `home + attempt * step`, with `step` taken from the high half of the hash.
    ///
    /// The step is never 0 and is odd, hence coprime with power-of-two capacities.
    DoubleHashing,
}

impl Probing {
    /// Get the candidate slot of the given probe `attempt`, starting at 0.
    ///
    /// # Parameters
    ///
    /// - `home`: The index of the attempt 0, in `[0, capacity)`.
    /// - `step`: The double-hashing step, ignored by the other strategies.
    /// - `attempt`: The number of the attempt.
    /// - `capacity`: The number of slots, must be positive.
    pub const fn candidate(
        self,
        home: usize,
        step: usize,
        attempt: usize,
        capacity: usize,
    ) -> usize {
        debug_assert!(capacity > 0, r#""capacity" must be greater than 0"#);

        let attempt = attempt as u128;
        let offset = match self {
            Probing::Linear => attempt,
            Probing::Quadratic => attempt * (attempt + 1) / 2,
            Probing::DoubleHashing => attempt * step as u128,
        };
        ((home as u128 + offset) % capacity as u128) as usize
    }
}

/// A single probe cycle: exactly `capacity` candidate indices in probing order.
///
/// Computed incrementally, yielding the same indices as [`Probing::candidate`].
#[derive(Debug, Clone)]
pub struct ProbeSequence {
    probing: Probing,
    index: usize,
    step: usize,
    attempt: usize,
    capacity: usize,
}

impl ProbeSequence {
    /// Start the probe cycle of a key with the given 64-bit `hash`.
    pub const fn new(probing: Probing, hash: u64, capacity: usize) -> Self {
        Self {
            probing,
            index: reduce(hash, capacity),
            step: secondary_step(hash, capacity),
            attempt: 0,
            capacity,
        }
    }
}

impl Iterator for ProbeSequence {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.attempt >= self.capacity {
            return None;
        }
        let current = self.index;
        self.attempt += 1;
        // Distance from the current candidate to the next one.
        let delta = match self.probing {
            Probing::Linear => 1,
            Probing::Quadratic => self.attempt % self.capacity,
            Probing::DoubleHashing => self.step,
        };
        self.index = (self.index + delta) % self.capacity;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.capacity - self.attempt;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ProbeSequence {}

impl std::iter::FusedIterator for ProbeSequence {}
