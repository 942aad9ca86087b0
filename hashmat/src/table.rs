//! Open-addressing table keyed by (row, column)
//!
//! The table owns a power-of-two array of [`Slot`]s plus live and
//! tombstone counters. Lookups follow [`ProbeSequence`] from the key's
//! home slot, stopping at the matching live slot or at the first empty
//! slot. Deletion leaves a tombstone; growth and compaction rebuild the
//! whole array and drop every tombstone.
//!
//! The table never decides when to grow or compact. Callers read
//! [`Table::stats`] and trigger maintenance themselves.

use crate::slot::Slot;
use hashmat_core::{ProbeSequence, Scalar, TableStats};
use std::vec::Vec;

/// Outcome of probing for a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// The key is stored live at this index
    Found(usize),
    /// The key is absent; this is where it should be inserted
    ///
    /// Points at the first tombstone on the probe path if there was one,
    /// otherwise at the empty slot that ended the probe.
    Vacant(usize),
    /// The key is absent and every slot is live
    Full,
}

/// Hash table of live matrix cells
#[derive(Debug, Clone)]
pub struct Table {
    slots: Vec<Slot>,
    live: usize,
    tombstones: usize,
}

impl Table {
    /// Create a table of `capacity` empty slots
    ///
    /// `capacity` must be a power of two.
    pub fn with_capacity(capacity: usize) -> Self {
        debug_assert!(capacity.is_power_of_two());
        Self {
            slots: vec![Slot::Empty; capacity],
            live: 0,
            tombstones: 0,
        }
    }

    /// Number of slots
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of live slots
    #[inline]
    pub fn len(&self) -> usize {
        self.live
    }

    /// Whether no slot is live
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Current occupancy counters
    pub fn stats(&self) -> TableStats {
        TableStats::new(self.capacity(), self.live, self.tombstones)
    }

    /// Probe for `(row, col)`, reporting where it is or where it belongs
    pub fn locate(&self, row: usize, col: usize) -> Lookup {
        let mut first_tombstone = None;
        for index in ProbeSequence::new(row, col, self.capacity()) {
            match self.slots[index] {
                Slot::Empty => return Lookup::Vacant(first_tombstone.unwrap_or(index)),
                Slot::Tombstone => {
                    first_tombstone.get_or_insert(index);
                }
                slot if slot.holds(row, col) => return Lookup::Found(index),
                Slot::Live { .. } => {}
            }
        }
        match first_tombstone {
            Some(index) => Lookup::Vacant(index),
            None => Lookup::Full,
        }
    }

    /// Index of the live slot holding `(row, col)`, if any
    pub fn find(&self, row: usize, col: usize) -> Option<usize> {
        match self.locate(row, col) {
            Lookup::Found(index) => Some(index),
            Lookup::Vacant(_) | Lookup::Full => None,
        }
    }

    /// Value stored for `(row, col)`, if any
    pub fn get(&self, row: usize, col: usize) -> Option<Scalar> {
        self.find(row, col).and_then(|index| self.slots[index].value())
    }

    /// Store a new element in a vacant slot returned by [`Table::locate`]
    pub fn occupy(&mut self, index: usize, row: usize, col: usize, value: Scalar) {
        match self.slots[index] {
            Slot::Empty => {}
            Slot::Tombstone => self.tombstones -= 1,
            Slot::Live { .. } => unreachable!("slot {index} is already live"),
        }
        self.slots[index] = Slot::Live { row, col, value };
        self.live += 1;
    }

    /// Replace the value of a live slot, returning the old value
    pub fn overwrite(&mut self, index: usize, value: Scalar) -> Scalar {
        match &mut self.slots[index] {
            Slot::Live { value: stored, .. } => core::mem::replace(stored, value),
            _ => unreachable!("slot {index} is not live"),
        }
    }

    /// Turn a live slot into a tombstone, returning its value
    pub fn vacate(&mut self, index: usize) -> Scalar {
        match core::mem::replace(&mut self.slots[index], Slot::Tombstone) {
            Slot::Live { value, .. } => {
                self.live -= 1;
                self.tombstones += 1;
                value
            }
            _ => unreachable!("slot {index} is not live"),
        }
    }

    /// Rebuild at `new_capacity`, dropping every tombstone
    ///
    /// `new_capacity` must be a power of two larger than the live count.
    pub fn grow(&mut self, new_capacity: usize) {
        let old_capacity = self.capacity();
        let dropped = self.tombstones;
        self.rebuild(new_capacity);
        tracing::debug!(
            old_capacity,
            new_capacity,
            live = self.live,
            dropped_tombstones = dropped,
            "grew sparse matrix table"
        );
    }

    /// Rebuild at the current capacity, dropping every tombstone
    pub fn compact(&mut self) {
        let dropped = self.tombstones;
        self.rebuild(self.capacity());
        tracing::debug!(
            capacity = self.capacity(),
            live = self.live,
            dropped_tombstones = dropped,
            "compacted sparse matrix table"
        );
    }

    fn rebuild(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity.is_power_of_two());
        debug_assert!(new_capacity > self.live);

        let mut slots = vec![Slot::Empty; new_capacity];
        for slot in self.slots.drain(..) {
            if let Slot::Live { row, col, .. } = slot {
                let index = ProbeSequence::new(row, col, new_capacity)
                    .find(|&index| slots[index] == Slot::Empty)
                    .unwrap_or_else(|| {
                        panic!("no empty slot while rebuilding {new_capacity}-slot table")
                    });
                slots[index] = slot;
            }
        }
        self.slots = slots;
        self.tombstones = 0;
    }

    /// Iterate over live `(row, col, value)` entries in slot order
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize, Scalar)> + '_ {
        self.slots.iter().filter_map(|slot| match *slot {
            Slot::Live { row, col, value } => Some((row, col, value)),
            _ => None,
        })
    }

    #[cfg(test)]
    pub(crate) fn slot(&self, index: usize) -> Slot {
        self.slots[index]
    }
}
