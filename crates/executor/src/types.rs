//! Response types carried by [`Output`](crate::Output).
//!
//! Field names are the wire contract; they match what existing clients of
//! the inventory service read.

use serde::{Deserialize, Serialize};

use medistock_core::{InventoryRecord, SearchKind};

/// Outcome label for add and upload responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddStatus {
    /// A record was created (or the batch committed)
    Success,
    /// The name was already indexed
    Exists,
}

/// Name search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// The case-folded query
    pub query: String,
    /// Matching folded names
    pub results: Vec<String>,
    /// `results.len()`
    pub count: usize,
    /// `"exact"` or `"prefix"`
    pub search_type: SearchKind,
}

/// Single add result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddItemResponse {
    /// `success` or `exists`
    pub status: AddStatus,
    /// Human-readable summary
    pub message: String,
    /// The created record; absent when the name already existed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medicine: Option<InventoryRecord>,
}

/// Batch upload result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResponse {
    /// Always `success`; rejected batches are errors
    pub status: AddStatus,
    /// Human-readable summary
    pub message: String,
    /// Records created, in row order
    pub medicines: Vec<InventoryRecord>,
    /// Folded names skipped as duplicates
    pub duplicates: Vec<String>,
}

/// A list of records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemList {
    /// Records, in the order the command defines
    pub results: Vec<InventoryRecord>,
}

/// Low-stock result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LowStockResponse {
    /// Records ascending by quantity
    pub results: Vec<InventoryRecord>,
    /// Threshold that was applied
    pub threshold: i64,
}

/// Health probe result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    /// Always `"healthy"` when the index answers
    pub status: String,
    /// Records in the store
    pub medicines_count: usize,
    /// Names in the search index
    pub indexed_names: usize,
    /// Whether the expiry priority structure is active
    pub expiry_tracking_available: bool,
}

/// Service description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiInfo {
    /// Service name
    pub name: String,
    /// Crate version
    pub version: String,
    /// Supported command names
    pub commands: Vec<String>,
}
