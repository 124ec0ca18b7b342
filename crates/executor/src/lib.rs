//! # Medistock Executor
//!
//! The public API for Medistock - an in-memory medicine inventory index with
//! autocomplete name search and expiry tracking.
//!
//! This is the only crate users need to import. It provides:
//! - [`Medistock`] - The typed inventory interface
//! - [`Command`]/[`Output`] - Low-level command interface (for transports and SDKs)
//! - [`Error`] - Structured, serializable errors with an [`ErrorKind`] category
//!
//! ## Quick Start
//!
//! ```text
//! use medistock_executor::Medistock;
//!
//! let inv = Medistock::new();
//!
//! inv.add_item("Aspirin", "Bayer", 120, "2024-12-31")?;
//! inv.add_item("Azithromycin", "Zithromax", 40, "2024-03-01")?;
//!
//! let hits = inv.search("a")?;          // prefix: ["aspirin", "azithromycin"]
//! let soonest = inv.expiring_items()?;  // ascending by expiry date
//! ```
//!
//! ## Operations
//!
//! | Command | Purpose |
//! |---------|---------|
//! | **Search** | Exact-then-prefix name lookup |
//! | **AddItem** | Add one medicine |
//! | **UploadBatch** | All-or-nothing header + rows upload |
//! | **ExpiringItems** | Every record, earliest expiry first |
//! | **LowStock** | Records at or below a quantity threshold |
//! | **CatalogSearch** | Substring match over record names |
//! | **Health** / **Ping** / **Info** | Probes |

#![warn(missing_docs)]

mod api;
mod command;
mod convert;
mod error;
mod executor;
mod output;
mod types;

// Handler modules
mod handlers;

// Test modules
#[cfg(test)]
mod tests;

// =============================================================================
// Public API - Everything users need is re-exported here
// =============================================================================

pub use api::Medistock;
pub use command::Command;
pub use error::{Error, ErrorKind};
pub use executor::Executor;
pub use output::Output;
pub use types::*;

// Re-export the record model so users don't need medistock-core directly
pub use medistock_core::{ExpiryDate, InventoryRecord, RawQuantity, RecordId, SearchKind};

// Re-export the index and its configuration so users don't need medistock-engine directly
pub use medistock_engine::{
    InventoryConfig, InventoryIndex, InventoryIndexBuilder, CONFIG_FILE_NAME,
};

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;
