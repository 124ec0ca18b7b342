//! High-level typed wrapper for the Executor.
//!
//! The [`Medistock`] struct provides a convenient Rust API that wraps the
//! [`Executor`] and [`Command`](crate::Command)/[`Output`](crate::Output)
//! enums with typed method calls.
//!
//! # Example
//!
//! ```text
//! use medistock_executor::Medistock;
//!
//! let inv = Medistock::open("/etc/medistock/medistock.toml")?;
//!
//! inv.add_item("Aspirin", "Bayer", 120, "2024-12-31")?;
//! let low = inv.low_stock(None)?;
//! ```

mod inventory;
mod probe;

use std::path::Path;
use std::sync::Arc;

use medistock_engine::{InventoryConfig, InventoryIndex};

use crate::convert::convert_result;
use crate::{Executor, Result};

/// High-level typed wrapper for inventory operations.
///
/// Cloning a `Medistock` yields another handle on the same index.
#[derive(Debug, Clone)]
pub struct Medistock {
    executor: Executor,
}

impl Default for Medistock {
    fn default() -> Self {
        Self::new()
    }
}

impl Medistock {
    /// Empty inventory with default configuration.
    pub fn new() -> Self {
        Self::from_index(Arc::new(InventoryIndex::new()))
    }

    /// Inventory built from an explicit configuration.
    ///
    /// Seeds the demo catalog when `config.seed_demo_catalog` is set.
    pub fn with_config(config: InventoryConfig) -> Result<Self> {
        let index = convert_result(InventoryIndex::with_config(config))?;
        Ok(Self::from_index(Arc::new(index)))
    }

    /// Inventory configured from a `medistock.toml` file.
    ///
    /// A default configuration file is written first if none exists.
    ///
    /// # Example
    ///
    /// ```text
    /// let inv = Medistock::open("./medistock.toml")?;
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let index = convert_result(InventoryIndex::open(path))?;
        Ok(Self::from_index(Arc::new(index)))
    }

    /// Wrap an index that is already shared elsewhere.
    pub fn from_index(index: Arc<InventoryIndex>) -> Self {
        Self {
            executor: Executor::new(index),
        }
    }

    /// Get the underlying executor.
    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    /// Active configuration.
    pub fn config(&self) -> &InventoryConfig {
        self.executor.index().config()
    }
}
