//! Expiry priority view
//!
//! Min-heap of record copies keyed by `(expiry date, insertion sequence)`.
//! The sequence number makes every key unique, so equal dates come out in
//! insertion order and snapshots are deterministic.
//!
//! The tracker holds value copies. It never aliases the record store, since
//! heap maintenance moves entries around.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use medistock_core::{ExpiryDate, InventoryRecord, RecordId};

#[derive(Debug, Clone)]
struct ExpiryEntry {
    seq: u64,
    record: InventoryRecord,
}

impl ExpiryEntry {
    fn key(&self) -> (&ExpiryDate, u64) {
        (&self.record.expiry_date, self.seq)
    }
}

impl PartialEq for ExpiryEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for ExpiryEntry {}

impl PartialOrd for ExpiryEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ExpiryEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Records ordered by earliest expiry
#[derive(Debug, Clone, Default)]
pub struct ExpiryTracker {
    heap: BinaryHeap<Reverse<ExpiryEntry>>,
    next_seq: u64,
}

impl ExpiryTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a copy of `record`. `O(log n)`.
    pub fn insert(&mut self, record: InventoryRecord) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(ExpiryEntry { seq, record }));
    }

    /// Every entry, earliest expiry first, ties in insertion order
    ///
    /// Sorts a clone of the heap; the tracker itself is not touched.
    pub fn snapshot_sorted_by_expiry(&self) -> Vec<InventoryRecord> {
        // Ascending in Reverse<_> is descending by key
        self.heap
            .clone()
            .into_sorted_vec()
            .into_iter()
            .rev()
            .map(|Reverse(entry)| entry.record)
            .collect()
    }

    /// The entry that expires first
    pub fn peek_earliest(&self) -> Option<&InventoryRecord> {
        self.heap.peek().map(|Reverse(entry)| &entry.record)
    }

    /// Keep only entries whose id satisfies `keep`
    ///
    /// Used by the coordinator to undo inserts during rollback.
    pub fn retain_ids(&mut self, mut keep: impl FnMut(RecordId) -> bool) {
        self.heap.retain(|Reverse(entry)| keep(entry.record.id));
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the tracker is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
