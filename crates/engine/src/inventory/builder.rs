//! Builder for inventory index configuration
//!
//! ```ignore
//! use medistock_engine::InventoryIndex;
//!
//! // Defaults: tracked expiry, threshold 30, empty catalog
//! let index = InventoryIndex::new();
//!
//! // Degraded mode with a custom threshold
//! let index = InventoryIndex::builder()
//!     .expiry_tracking(false)
//!     .low_stock_threshold(15)
//!     .build()?;
//! ```

use medistock_core::{Limits, Result};

use super::{InventoryConfig, InventoryIndex};

/// Builder for [`InventoryIndex`]
#[derive(Debug, Clone, Default)]
pub struct InventoryIndexBuilder {
    config: InventoryConfig,
    limits: Limits,
}

impl InventoryIndexBuilder {
    /// Builder with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn config(mut self, config: InventoryConfig) -> Self {
        self.config = config;
        self
    }

    /// Default threshold for `low_stock`
    pub fn low_stock_threshold(mut self, threshold: u32) -> Self {
        self.config.low_stock_threshold = threshold;
        self
    }

    /// Maintain the expiry priority structure (`false` = degraded mode)
    pub fn expiry_tracking(mut self, enabled: bool) -> Self {
        self.config.expiry_tracking = enabled;
        self
    }

    /// Load the demo catalog on build
    pub fn seed_demo_catalog(mut self, enabled: bool) -> Self {
        self.config.seed_demo_catalog = enabled;
        self
    }

    /// Field length limits applied during validation
    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Construct the index
    ///
    /// Fails only if seeding the demo catalog fails.
    pub fn build(self) -> Result<InventoryIndex> {
        InventoryIndex::with_config_and_limits(self.config, self.limits)
    }
}
