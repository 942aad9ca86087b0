//! Occupancy snapshot of a hash table backed store

/// Point-in-time counters describing table occupancy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableStats {
    /// Number of slots in the table
    pub capacity: usize,
    /// Slots holding a live element
    pub live: usize,
    /// Slots holding a tombstone
    pub tombstones: usize,
}

impl TableStats {
    /// Create a new snapshot
    pub const fn new(capacity: usize, live: usize, tombstones: usize) -> Self {
        Self {
            capacity,
            live,
            tombstones,
        }
    }

    /// Fraction of slots holding live elements
    pub fn load_ratio(&self) -> f64 {
        ratio(self.live, self.capacity)
    }

    /// Fraction of slots holding tombstones
    pub fn deleted_ratio(&self) -> f64 {
        ratio(self.tombstones, self.capacity)
    }

    /// Slots that are neither live nor tombstones
    pub fn empty(&self) -> usize {
        self.capacity - self.live - self.tombstones
    }
}

fn ratio(count: usize, capacity: usize) -> f64 {
    if capacity == 0 {
        0.0
    } else {
        count as f64 / capacity as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratios() {
        let stats = TableStats::new(16, 4, 2);
        assert_eq!(stats.load_ratio(), 0.25);
        assert_eq!(stats.deleted_ratio(), 0.125);
        assert_eq!(stats.empty(), 10);

        assert_eq!(TableStats::default().load_ratio(), 0.0);
    }
}
