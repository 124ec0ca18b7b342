//! Outcome types returned by the inventory index

use serde::{Deserialize, Serialize};

use crate::types::InventoryRecord;

/// Outcome of adding a single item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new record was committed to every view
    Created(InventoryRecord),
    /// The folded name was already indexed; nothing changed
    Duplicate(String),
}

impl AddOutcome {
    /// The created record, if any
    pub fn record(&self) -> Option<&InventoryRecord> {
        match self {
            AddOutcome::Created(record) => Some(record),
            AddOutcome::Duplicate(_) => None,
        }
    }

    /// Whether a record was created
    pub fn is_created(&self) -> bool {
        matches!(self, AddOutcome::Created(_))
    }
}

/// Outcome of a committed batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Records created, in row order
    pub created: Vec<InventoryRecord>,
    /// Folded names skipped because they were already indexed
    /// or repeated an earlier row of the same batch
    pub duplicates: Vec<String>,
}

/// Records at or below a stock threshold, ascending by quantity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LowStock {
    /// Threshold that was applied
    pub threshold: u32,
    /// Matching records
    pub records: Vec<InventoryRecord>,
}

/// How expiry ordering is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpiryMode {
    /// Maintained priority structure
    Tracked,
    /// Degraded mode: sort a snapshot of the record store on demand
    Fallback,
}

impl ExpiryMode {
    /// Whether the priority structure is active
    pub fn is_tracked(&self) -> bool {
        matches!(self, ExpiryMode::Tracked)
    }
}

/// Point-in-time view of the index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexStatus {
    /// Records in the store
    pub item_count: usize,
    /// Names in the trie
    pub indexed_names: usize,
    /// Expiry ordering strategy
    pub expiry_mode: ExpiryMode,
}
