//! Open set: min-priority queue of discovered, unexpanded nodes.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

use crate::record::NodeRecord;

/// Heap entry keyed by `cost`, then by arena slot.
///
/// Slots are handed out in discovery order, so equal keys pop first-found
/// first.
#[derive(Clone, Copy, Debug)]
struct OpenEntry {
    slot: usize,
    cost: f32,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest cost first.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.slot.cmp(&self.slot))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

/// Binary heap with lazy invalidation plus a node -> slot index.
///
/// `update_priority` pushes a fresh entry instead of sifting the old one;
/// superseded entries are skipped on `remove_min` because their key no
/// longer matches the record (keys only ever decrease while open).
pub(crate) struct OpenSet<T> {
    heap: BinaryHeap<OpenEntry>,
    index: HashMap<T, usize>,
}

impl<T: Clone + Eq + Hash> OpenSet<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Drop all entries, keeping allocations, and make room for `capacity`.
    pub(crate) fn reset(&mut self, capacity: usize) {
        self.heap.clear();
        self.index.clear();
        self.heap.reserve(capacity);
        self.index.reserve(capacity);
    }

    pub(crate) fn enqueue(&mut self, records: &[NodeRecord<T>], slot: usize) {
        let rec = &records[slot];
        self.index.insert(rec.master.clone(), slot);
        self.heap.push(OpenEntry {
            slot,
            cost: rec.cost,
        });
    }

    /// Re-key `slot` after its record was relaxed.
    pub(crate) fn update_priority(&mut self, records: &[NodeRecord<T>], slot: usize) {
        debug_assert!(records[slot].open);
        self.heap.push(OpenEntry {
            slot,
            cost: records[slot].cost,
        });
    }

    /// Pop the cheapest live node and mark its record as no longer open.
    pub(crate) fn remove_min(&mut self, records: &mut [NodeRecord<T>]) -> Option<usize> {
        while let Some(entry) = self.heap.pop() {
            let rec = &mut records[entry.slot];
            // Skip stale entries.
            if !rec.open || rec.cost.total_cmp(&entry.cost) != Ordering::Equal {
                continue;
            }
            rec.open = false;
            self.index.remove(&rec.master);
            return Some(entry.slot);
        }
        None
    }

    /// Slot of `node` if it is currently open.
    pub(crate) fn find(&self, node: &T) -> Option<usize> {
        self.index.get(node).copied()
    }

    /// Number of live (non-superseded) open nodes.
    pub(crate) fn len(&self) -> usize {
        self.index.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Slots of all open nodes, in no particular order.
    pub(crate) fn slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.index.values().copied()
    }
}
