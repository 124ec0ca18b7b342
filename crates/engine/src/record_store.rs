//! Record store - authoritative table of inventory records
//!
//! # Invariants
//!
//! - Ids are assigned from `next_id`, which starts at 1 and only moves
//!   backwards through `rollback_to`, for ids that were never published
//! - `records` is in insertion order, which is also id order
//! - Records are never mutated after insertion

use medistock_core::{fold_name, InventoryRecord, NewItem, RecordId};

/// Position in the store that a rollback can return to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreCheckpoint {
    len: usize,
    next_id: u64,
}

/// Append-only record table
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<InventoryRecord>,
    next_id: u64,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    /// Create an empty store. The first id handed out is 1.
    pub fn new() -> Self {
        RecordStore {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Assign the next id, store the record and return a copy
    pub fn insert(&mut self, item: NewItem) -> InventoryRecord {
        let id = RecordId::new(self.next_id);
        self.next_id += 1;
        let record = item.into_record(id);
        self.records.push(record.clone());
        record
    }

    /// Look up a record by id
    pub fn get(&self, id: RecordId) -> Option<&InventoryRecord> {
        // Ids are dense and ascending, so binary search on id is exact
        self.records
            .binary_search_by_key(&id, |r| r.id)
            .ok()
            .map(|i| &self.records[i])
    }

    /// Snapshot of all records in insertion order
    pub fn all(&self) -> Vec<InventoryRecord> {
        self.records.clone()
    }

    /// Borrowing iterator in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &InventoryRecord> {
        self.records.iter()
    }

    /// Records whose name contains `needle`, ignoring case
    pub fn filter_by_name_substring(&self, needle: &str) -> Vec<InventoryRecord> {
        let needle = fold_name(needle);
        self.records
            .iter()
            .filter(|r| r.folded_name().contains(&needle))
            .cloned()
            .collect()
    }

    /// Records with `quantity <= threshold`, ascending by quantity
    ///
    /// Equal quantities keep insertion order.
    pub fn filter_by_quantity_at_most(&self, threshold: u32) -> Vec<InventoryRecord> {
        let mut matches: Vec<InventoryRecord> = self
            .records
            .iter()
            .filter(|r| r.quantity <= threshold)
            .cloned()
            .collect();
        matches.sort_by_key(|r| r.quantity);
        matches
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Current position, for a later `rollback_to`
    pub fn checkpoint(&self) -> StoreCheckpoint {
        StoreCheckpoint {
            len: self.records.len(),
            next_id: self.next_id,
        }
    }

    /// Drop every record inserted after `checkpoint` and rewind the id counter
    ///
    /// Only valid while the dropped records have not been handed to any caller.
    pub fn rollback_to(&mut self, checkpoint: StoreCheckpoint) {
        self.records.truncate(checkpoint.len);
        self.next_id = checkpoint.next_id;
    }
}
