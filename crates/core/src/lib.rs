//! Core types for Medistock
//!
//! This crate defines the foundational types used throughout the system:
//! - RecordId / InventoryRecord: the authoritative inventory row
//! - ExpiryDate: validated `YYYY-MM-DD` date whose string order is chronological
//! - ItemCandidate / NewItem: raw caller input and its validated form
//! - TabularBatch: header + rows intake for bulk uploads
//! - Outcome types: AddOutcome, BatchOutcome, SearchResult, LowStock, IndexStatus
//! - Error: error type hierarchy
//! - Limits: field length limits and default thresholds

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod batch;
pub mod error;
pub mod inventory_types;
pub mod limits;
pub mod search_types;
pub mod types;

pub use batch::{TabularBatch, REQUIRED_COLUMNS};
pub use error::{BatchRejection, Error, Result, ValidationError};
pub use inventory_types::{AddOutcome, BatchOutcome, ExpiryMode, IndexStatus, LowStock};
pub use limits::{Limits, DEFAULT_LOW_STOCK_THRESHOLD, PREFIX_ONLY_QUERY_CHARS};
pub use search_types::{SearchKind, SearchResult};
pub use types::{
    fold_name, ExpiryDate, InventoryRecord, ItemCandidate, NewItem, RawQuantity, RecordId,
};
