//! Medistock - in-memory medicine inventory index
//!
//! Medistock keeps three views of one inventory in step: an authoritative
//! record store, a name trie for autocomplete search, and an expiry-ordered
//! priority view. Every mutation updates all three or none of them.
//!
//! # Quick Start
//!
//! ```ignore
//! use medistock::Medistock;
//!
//! let inv = Medistock::new();
//!
//! inv.add_item("Aspirin", "Bayer", 120u32, "2024-12-31")?;
//!
//! let hits = inv.search("asp")?;
//! let soonest = inv.expiring_items()?;
//! let low = inv.low_stock(Some(30))?;
//! ```
//!
//! # Architecture
//!
//! All operations go through the [`Executor`] which provides a command-based API.
//! The [`Medistock`] struct provides a convenient high-level interface.
//!
//! Internal implementation details (trie, heap, record store) are not
//! exposed - only the executor API is public.

// Re-export the public API from medistock-executor
pub use medistock_executor::*;
