//! Index structures for Medistock
//!
//! This crate provides the two derived views kept alongside the record store:
//! - [`NameIndex`]: trie over case-folded names (exact membership, prefix enumeration)
//! - [`ExpiryTracker`]: min-heap of record copies ordered by expiry date
//!
//! Neither structure knows about the other or about the record store. Keeping
//! them consistent is the coordinator's job (`medistock-engine`).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod expiry;
pub mod trie;

pub use expiry::ExpiryTracker;
pub use trie::{InsertOutcome, NameIndex};
