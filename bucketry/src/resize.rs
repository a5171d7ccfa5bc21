//! The amortized-growth rule shared by both table kinds.
use bucketry_core::{DictError, Result};

/// Capacity of tables built without an explicit one.
pub const DEFAULT_CAPACITY: usize = 16;

/// Decides when a table has to be rebuilt and at which capacity.
///
/// The check runs right before a new key is inserted: if the load factor already exceeds
/// the threshold, the capacity doubles and every live entry is rehashed into a fresh store.
/// Replacing a value never triggers it and tables never shrink.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizePolicy {
    max_load_factor: f64,
}

impl ResizePolicy {
    /// Policy of [`crate::ChainingTable`]. Chains degrade gracefully, so it tolerates more load.
    pub const CHAINING: Self = Self::new(0.75);

    /// Policy of [`crate::OpenAddressingTable`]. Probe lengths explode close to full capacity.
    pub const OPEN_ADDRESSING: Self = Self::new(0.5);

    pub(crate) const fn new(max_load_factor: f64) -> Self {
        Self { max_load_factor }
    }

    /// Get the load factor above which the table grows.
    pub const fn max_load_factor(&self) -> f64 {
        self.max_load_factor
    }

    /// Check whether `occupied` out of `capacity` slots is above the threshold.
    #[inline]
    pub fn exceeded(&self, occupied: usize, capacity: usize) -> bool {
        occupied as f64 / capacity as f64 > self.max_load_factor
    }

    /// Get the capacity the table has to be rebuilt at before inserting a new key, if any.
    ///
    /// # Parameters
    ///
    /// - `live`: The number of live entries.
    /// - `dead`: The number of slots that hold no entry but still count as used (tombstones).
    /// - `capacity`: The current capacity.
    ///
    /// Too many live entries double the capacity. Too many dead slots alone only require
    /// a rebuild at the same capacity, which drops them.
    pub fn next_capacity(
        &self,
        live: usize,
        dead: usize,
        capacity: usize,
    ) -> Result<Option<usize>> {
        if self.exceeded(live, capacity) {
            return capacity
                .checked_mul(2)
                .map(Some)
                .ok_or(DictError::CapacityOverflow);
        }
        if dead > 0 && self.exceeded(live + dead, capacity) {
            return Ok(Some(capacity));
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(ResizePolicy::CHAINING.max_load_factor(), 0.75);
        assert_eq!(ResizePolicy::OPEN_ADDRESSING.max_load_factor(), 0.5);
        assert!(
            ResizePolicy::OPEN_ADDRESSING.max_load_factor()
                < ResizePolicy::CHAINING.max_load_factor()
        );
    }

    #[test]
    fn test_grows_only_above_threshold() {
        let policy = ResizePolicy::CHAINING;

        assert_eq!(policy.next_capacity(0, 0, 4), Ok(None));
        assert_eq!(policy.next_capacity(3, 0, 4), Ok(None));
        assert_eq!(policy.next_capacity(4, 0, 4), Ok(Some(8)));
        assert_eq!(policy.next_capacity(12, 0, 16), Ok(None));
        assert_eq!(policy.next_capacity(13, 0, 16), Ok(Some(32)));
    }

    #[test]
    fn test_dead_slots_trigger_same_capacity_rebuild() {
        let policy = ResizePolicy::OPEN_ADDRESSING;

        assert_eq!(policy.next_capacity(2, 2, 8), Ok(None));
        assert_eq!(policy.next_capacity(2, 3, 8), Ok(Some(8)));
        assert_eq!(policy.next_capacity(5, 0, 8), Ok(Some(16)));
        assert_eq!(policy.next_capacity(5, 2, 8), Ok(Some(16)));
    }

    #[test]
    fn test_growth_overflow() {
        let capacity = usize::MAX / 2 + 1;
        assert_eq!(
            ResizePolicy::CHAINING.next_capacity(capacity, 0, capacity),
            Err(DictError::CapacityOverflow)
        );
    }
}
