//! Inventory engine for Medistock
//!
//! This crate owns the authoritative data and keeps the derived views in step:
//! - RecordStore: append-only table of inventory records
//! - ExpiryView: expiry ordering strategy (tracked heap or fallback sort)
//! - InventoryIndex: coordinator; the only place records are created
//! - InventoryConfig: `medistock.toml` settings
//!
//! The engine is the only component that knows the three views must agree.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod expiry_view;
pub mod inventory;
pub mod record_store;

pub use expiry_view::{expiry_view_for, ExpiryView, FallbackSort, TrackedExpiry};
pub use inventory::{
    demo_catalog, InventoryConfig, InventoryIndex, InventoryIndexBuilder, CONFIG_FILE_NAME,
};
pub use record_store::{RecordStore, StoreCheckpoint};
