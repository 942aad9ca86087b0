//! Table slot states

use hashmat_core::Scalar;

/// One cell of the open-addressing table
///
/// A tombstone marks a slot whose element was deleted. Probes pass over
/// tombstones instead of stopping, so keys stored further along the same
/// probe path stay reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Slot {
    /// Never held data since the table was built
    #[default]
    Empty,
    /// Held data that has since been deleted
    Tombstone,
    /// Holds the value of cell (row, col)
    Live { row: usize, col: usize, value: Scalar },
}

impl Slot {
    /// Whether this slot holds the element for (row, col)
    #[inline]
    pub fn holds(&self, row: usize, col: usize) -> bool {
        matches!(*self, Slot::Live { row: r, col: c, .. } if r == row && c == col)
    }

    /// Stored value, if live
    #[inline]
    pub fn value(&self) -> Option<Scalar> {
        match *self {
            Slot::Live { value, .. } => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_matches_key_only_when_live() {
        let live = Slot::Live {
            row: 2,
            col: 7,
            value: -4,
        };
        assert!(live.holds(2, 7));
        assert!(!live.holds(7, 2));
        assert!(!Slot::Empty.holds(0, 0));
        assert!(!Slot::Tombstone.holds(0, 0));
        assert_eq!(live.value(), Some(-4));
        assert_eq!(Slot::Tombstone.value(), None);
        assert_eq!(Slot::default(), Slot::Empty);
    }
}
