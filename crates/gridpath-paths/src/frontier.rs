//! Min-priority frontier for A*.
//!
//! Items are stored in a min-heap keyed by `(priority, insertion_order)`.
//! Lower priorities are popped first; ties are broken by insertion order
//! (FIFO), so a run is fully deterministic.
//!
//! The same item may be pushed any number of times under different
//! priorities. Nothing is ever updated in place: callers discard stale
//! entries when they pop them.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

#[derive(Debug)]
struct Entry<T> {
    item: T,
    priority: usize,
    /// Monotonically increasing counter used to break ties.
    seq: u64,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Wrapped in Reverse for the BinaryHeap: smaller priority first,
        // then smaller seq.
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// A min-priority queue that tolerates duplicate items.
#[derive(Debug)]
pub struct Frontier<T> {
    heap: BinaryHeap<Reverse<Entry<T>>>,
    seq: u64,
}

impl<T> Frontier<T> {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Insert `item` with the given priority.
    pub fn push(&mut self, item: T, priority: usize) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry {
            item,
            priority,
            seq,
        }));
    }

    /// Pop the item with the lowest priority (ties broken FIFO).
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|Reverse(entry)| entry.item)
    }

    /// Pop the item with the lowest priority, also returning the priority.
    pub fn pop_with_priority(&mut self) -> Option<(T, usize)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.item, entry.priority))
    }

    /// Whether the frontier is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of entries, stale duplicates included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Remove every entry, keeping the allocation.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.seq = 0;
    }
}

impl<T> Default for Frontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::Coord;

    #[test]
    fn lowest_f_first() {
        let mut f = Frontier::new();
        f.push(Coord::new(0, 0), 3);
        f.push(Coord::new(1, 0), 1);
        f.push(Coord::new(2, 0), 2);

        assert_eq!(f.pop(), Some(Coord::new(1, 0)));
        assert_eq!(f.pop(), Some(Coord::new(2, 0)));
        assert_eq!(f.pop(), Some(Coord::new(0, 0)));
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn equal_f_pops_in_push_order() {
        // Neighbours arrive west, east, north, south and keep that order.
        let mut f = Frontier::new();
        for c in Coord::new(1, 1).neighbors_4() {
            f.push(c, 4);
        }
        let popped: Vec<_> = std::iter::from_fn(|| f.pop()).collect();
        assert_eq!(popped, Coord::new(1, 1).neighbors_4());
    }

    #[test]
    fn stale_duplicate_pops_after_better_entry() {
        // A cell first reached with f = 6 and later improved to f = 4.
        let c = Coord::new(2, 3);
        let mut f = Frontier::new();
        f.push(c, 6);
        f.push(Coord::new(0, 0), 5);
        f.push(c, 4);
        assert_eq!(f.len(), 3);

        assert_eq!(f.pop_with_priority(), Some((c, 4)));
        assert_eq!(f.pop_with_priority(), Some((Coord::new(0, 0), 5)));
        assert_eq!(f.pop_with_priority(), Some((c, 6)));
        assert!(f.is_empty());
    }

    #[test]
    fn clear_restarts_tie_order() {
        let mut f = Frontier::new();
        f.push(Coord::new(9, 9), 1);
        f.push(Coord::new(8, 8), 2);
        f.clear();
        assert!(f.is_empty());
        assert_eq!(f.pop(), None);

        f.push(Coord::new(0, 1), 0);
        f.push(Coord::new(0, 2), 0);
        assert_eq!(f.pop_with_priority(), Some((Coord::new(0, 1), 0)));
        assert_eq!(f.pop_with_priority(), Some((Coord::new(0, 2), 0)));
    }
}
