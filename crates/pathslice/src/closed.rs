//! Closed set: expanded nodes, write-once.

use std::collections::HashSet;
use std::hash::Hash;

/// Membership set plus expansion-ordered history of arena slots.
pub(crate) struct ClosedSet<T> {
    members: HashSet<T>,
    history: Vec<usize>,
}

impl<T: Eq + Hash> ClosedSet<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            members: HashSet::with_capacity(capacity),
            history: Vec::with_capacity(capacity),
        }
    }

    /// Drop all members, keeping allocations, and make room for `capacity`.
    pub(crate) fn reset(&mut self, capacity: usize) {
        self.members.clear();
        self.history.clear();
        self.members.reserve(capacity);
        self.history.reserve(capacity);
    }

    pub(crate) fn contains(&self, node: &T) -> bool {
        self.members.contains(node)
    }

    pub(crate) fn insert(&mut self, node: T, slot: usize) {
        let fresh = self.members.insert(node);
        debug_assert!(fresh, "node closed twice");
        self.history.push(slot);
    }

    pub(crate) fn len(&self) -> usize {
        self.history.len()
    }

    /// Arena slots in expansion order.
    pub(crate) fn history(&self) -> &[usize] {
        &self.history
    }
}
