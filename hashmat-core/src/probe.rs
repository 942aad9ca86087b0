//! Hashing and probe sequences for (row, column) keyed tables
//!
//! All functions here are pure index arithmetic over a power-of-two
//! capacity. Tables built on them resolve collisions by triangular
//! probing: attempt `k` lands `k * (k + 1) / 2` slots past the home slot,
//! which visits every slot of a power-of-two table exactly once in
//! `capacity` attempts.

/// Compute the smallest table capacity able to index both dimensions
///
/// The result is the smallest power of two that is at least `rows`,
/// `cols` and `min_capacity`. Returns `None` if that power of two does
/// not fit in a `usize`.
pub fn initial_capacity(rows: usize, cols: usize, min_capacity: usize) -> Option<usize> {
    rows.max(cols).max(min_capacity).checked_next_power_of_two()
}

/// Home slot of a (row, column) key in a table of `capacity` slots
///
/// Mixes the coordinates with XOR, AND and shifts, then reduces by
/// masking. `capacity` must be a power of two.
#[inline]
pub fn hash_position(row: usize, col: usize, capacity: usize) -> usize {
    debug_assert!(capacity.is_power_of_two());
    (((row ^ col) << 1).wrapping_add((row & col) >> 1)) & (capacity - 1)
}

/// Candidate slots for one key, in probe order
///
/// Yields exactly `capacity` indices. For a power-of-two capacity these
/// are a permutation of `0..capacity`, so running the sequence dry means
/// every slot has been inspected.
#[derive(Debug, Clone)]
pub struct ProbeSequence {
    position: usize,
    mask: usize,
    attempt: usize,
    capacity: usize,
}

impl ProbeSequence {
    /// Start probing for `(row, col)` in a table of `capacity` slots
    pub fn new(row: usize, col: usize, capacity: usize) -> Self {
        Self::from_home(hash_position(row, col, capacity), capacity)
    }

    /// Start probing from an explicit home slot
    pub fn from_home(home: usize, capacity: usize) -> Self {
        debug_assert!(capacity.is_power_of_two());
        Self {
            position: home & (capacity - 1),
            mask: capacity - 1,
            attempt: 0,
            capacity,
        }
    }
}

impl Iterator for ProbeSequence {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.attempt >= self.capacity {
            return None;
        }
        // Offsets accumulate 0, 1, 2, 3, ... so attempt k sits at the
        // k-th triangular number past home.
        self.position = (self.position + self.attempt) & self.mask;
        self.attempt += 1;
        Some(self.position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.capacity - self.attempt;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ProbeSequence {}

impl core::iter::FusedIterator for ProbeSequence {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn covers_every_slot(home: usize, capacity: usize) -> bool {
        let mut seen = vec![false; capacity];
        for index in ProbeSequence::from_home(home, capacity) {
            if seen[index] {
                return false;
            }
            seen[index] = true;
        }
        seen.iter().all(|&hit| hit)
    }

    #[test]
    fn test_initial_capacity() {
        assert_eq!(initial_capacity(1, 1, 4), Some(4));
        assert_eq!(initial_capacity(3, 3, 4), Some(4));
        assert_eq!(initial_capacity(5, 2, 4), Some(8));
        assert_eq!(initial_capacity(2, 1000, 4), Some(1024));
        assert_eq!(initial_capacity(1024, 1024, 4), Some(1024));
        assert_eq!(initial_capacity(usize::MAX, 1, 4), None);
    }

    #[test]
    fn test_hash_stays_in_table() {
        for capacity in [4usize, 8, 64, 1 << 16] {
            for row in 0..50 {
                for col in 0..50 {
                    assert!(hash_position(row, col, capacity) < capacity);
                }
            }
        }
        assert!(hash_position(usize::MAX, usize::MAX - 1, 8) < 8);
    }

    #[test]
    fn test_hash_is_deterministic() {
        assert_eq!(hash_position(17, 3, 32), hash_position(17, 3, 32));
        // (row ^ col) << 1 = 36, (row & col) >> 1 = 0
        assert_eq!(hash_position(17, 3, 64), 36);
    }

    #[test]
    fn test_probe_order() {
        let probes: Vec<usize> = ProbeSequence::from_home(0, 16).take(6).collect();
        assert_eq!(probes, vec![0, 1, 3, 6, 10, 15]);

        let wrapped: Vec<usize> = ProbeSequence::from_home(14, 16).take(4).collect();
        assert_eq!(wrapped, vec![14, 15, 1, 4]);
    }

    #[test]
    fn test_probe_length_is_capacity() {
        let mut probe = ProbeSequence::new(3, 9, 8);
        assert_eq!(probe.len(), 8);
        probe.next();
        assert_eq!(probe.len(), 7);
        assert_eq!(probe.by_ref().count(), 7);
        assert_eq!(probe.next(), None);
    }

    #[test]
    fn test_full_coverage_all_small_tables() {
        for exponent in 0..=12 {
            let capacity = 1usize << exponent;
            for home in [0, 1, capacity / 2, capacity - 1] {
                assert!(
                    covers_every_slot(home, capacity),
                    "capacity {capacity} from home {home} repeats a slot"
                );
            }
        }
    }

    proptest! {
        #[test]
        fn probe_is_permutation(exponent in 0u32..=12, home in any::<usize>()) {
            let capacity = 1usize << exponent;
            prop_assert!(covers_every_slot(home, capacity));
        }

        #[test]
        fn probe_starts_at_hash(row in 0usize..100_000, col in 0usize..100_000, exponent in 2u32..20) {
            let capacity = 1usize << exponent;
            let first = ProbeSequence::new(row, col, capacity).next();
            prop_assert_eq!(first, Some(hash_position(row, col, capacity)));
        }
    }
}
