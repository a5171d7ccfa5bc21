//! Assertions about probe sequences.
use bitvec::prelude::*;

/// Asserts that `indices` visit every slot of a table of `capacity` slots exactly once.
///
/// # Panics
///
/// - If an index is out of `[0, capacity)`.
/// - If an index is visited twice.
/// - If fewer than `capacity` indices are visited.
pub fn assert_full_cycle<I: IntoIterator<Item = usize>>(indices: I, capacity: usize) {
    let mut visited = bitvec![0; capacity];
    let mut num_visited = 0_usize;

    for idx in indices {
        assert!(
            idx < capacity,
            "Index {} is out of range [0, {}).",
            idx,
            capacity
        );
        assert!(!visited[idx], "Index {} is visited twice.", idx);
        visited.set(idx, true);
        num_visited += 1;
    }

    assert_eq!(
        num_visited, capacity,
        "Visited {} slots out of {}.",
        num_visited, capacity
    );
    debug_assert!(visited.all());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permutation_passes() {
        assert_full_cycle([2, 0, 3, 1], 4);
        assert_full_cycle([0], 1);
    }

    #[test]
    #[should_panic(expected = "visited twice")]
    fn test_repetition_fails() {
        assert_full_cycle([0, 1, 1, 3], 4);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_fails() {
        assert_full_cycle([0, 4], 4);
    }

    #[test]
    #[should_panic(expected = "Visited 3 slots out of 4")]
    fn test_short_cycle_fails() {
        assert_full_cycle([0, 1, 2], 4);
    }
}
