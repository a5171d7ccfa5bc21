/// Reduce a 64-bit hash to an index in `[0, capacity)`.
///
/// Hashes are unsigned, so no sign handling is needed before the modulo.
#[inline]
pub const fn reduce(hash: u64, capacity: usize) -> usize {
    debug_assert!(capacity > 0, r#""capacity" must be greater than 0"#);

    (hash % capacity as u64) as usize
}

/// Derive the double-hashing step from the high half of a 64-bit hash.
///
/// The step is odd before reduction, so for power-of-two capacities it is coprime with the
/// capacity and a probe cycle visits every slot. It is never 0.
#[inline]
pub const fn secondary_step(hash: u64, capacity: usize) -> usize {
    debug_assert!(capacity > 0, r#""capacity" must be greater than 0"#);

    let step = (((hash >> 32) | 1) % capacity as u64) as usize;
    if step == 0 {
        1
    } else {
        step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_stays_in_range() {
        for capacity in [1, 2, 3, 7, 16, 1000] {
            for hash in [0, 1, 15, 16, 17, u64::MAX, u64::MAX - 1, 1 << 63] {
                assert!(reduce(hash, capacity) < capacity);
            }
        }
        assert_eq!(reduce(17, 16), 1);
        assert_eq!(reduce(5, 4), 1);
    }

    #[test]
    fn test_secondary_step_is_never_zero() {
        for capacity in [1, 2, 3, 5, 8, 64] {
            for hash in [0, 1, 1 << 32, 4 << 32, u64::MAX, 0xdead_beef_0000_0000] {
                let step = secondary_step(hash, capacity);
                assert_ne!(step, 0, "capacity {capacity}, hash {hash:#x}");
                assert!(step <= capacity.max(1));
            }
        }
    }

    #[test]
    fn test_secondary_step_is_odd_for_powers_of_two() {
        for capacity in [2, 4, 8, 16, 1 << 20] {
            for hash in [0, 2 << 32, 6 << 32, u64::MAX] {
                assert_eq!(secondary_step(hash, capacity) % 2, 1);
            }
        }
    }
}
