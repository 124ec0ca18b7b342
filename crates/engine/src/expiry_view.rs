//! Expiry ordering strategy
//!
//! The coordinator holds one `Box<dyn ExpiryView>`, chosen at construction:
//! - [`TrackedExpiry`]: maintains an [`ExpiryTracker`] alongside the store
//! - [`FallbackSort`]: degraded mode; stable-sorts a copy of the store per call
//!
//! Both produce the same sequence for the same inserts. Call sites never
//! branch on which one is active.

use std::collections::HashSet;
use std::fmt;

use medistock_core::{ExpiryMode, InventoryRecord, RecordId};
use medistock_search::ExpiryTracker;

use crate::record_store::RecordStore;

/// Produces records in ascending expiry order
pub trait ExpiryView: Send + Sync + fmt::Debug {
    /// Which strategy this is
    fn mode(&self) -> ExpiryMode;

    /// Observe a newly committed record
    fn record(&mut self, record: &InventoryRecord);

    /// All records, earliest expiry first, ties in insertion order
    fn sorted(&self, store: &RecordStore) -> Vec<InventoryRecord>;

    /// Undo `record` for the given ids (rollback only)
    fn forget(&mut self, ids: &HashSet<RecordId>);

    /// Entries held by the view itself, `None` if it holds nothing
    fn tracked_len(&self) -> Option<usize>;
}

/// Expiry ordering backed by a min-heap
#[derive(Debug, Default)]
pub struct TrackedExpiry {
    tracker: ExpiryTracker,
}

impl TrackedExpiry {
    /// Create with an empty tracker
    pub fn new() -> Self {
        Self::default()
    }
}

impl ExpiryView for TrackedExpiry {
    fn mode(&self) -> ExpiryMode {
        ExpiryMode::Tracked
    }

    fn record(&mut self, record: &InventoryRecord) {
        self.tracker.insert(record.clone());
    }

    fn sorted(&self, _store: &RecordStore) -> Vec<InventoryRecord> {
        self.tracker.snapshot_sorted_by_expiry()
    }

    fn forget(&mut self, ids: &HashSet<RecordId>) {
        self.tracker.retain_ids(|id| !ids.contains(&id));
    }

    fn tracked_len(&self) -> Option<usize> {
        Some(self.tracker.len())
    }
}

/// Degraded mode: no priority structure, sort on demand
#[derive(Debug, Default)]
pub struct FallbackSort;

impl ExpiryView for FallbackSort {
    fn mode(&self) -> ExpiryMode {
        ExpiryMode::Fallback
    }

    fn record(&mut self, _record: &InventoryRecord) {}

    fn sorted(&self, store: &RecordStore) -> Vec<InventoryRecord> {
        let mut records = store.all();
        // Stable: equal dates stay in insertion order
        records.sort_by(|a, b| a.expiry_date.cmp(&b.expiry_date));
        records
    }

    fn forget(&mut self, _ids: &HashSet<RecordId>) {}

    fn tracked_len(&self) -> Option<usize> {
        None
    }
}

/// Pick the strategy for a configuration flag
pub fn expiry_view_for(tracking: bool) -> Box<dyn ExpiryView> {
    if tracking {
        Box::new(TrackedExpiry::new())
    } else {
        Box::new(FallbackSort)
    }
}
