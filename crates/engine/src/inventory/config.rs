//! Index configuration via `medistock.toml`
//!
//! Settings are read once at construction. To change them, edit the file and
//! restart. Missing keys fall back to their defaults.

use std::path::Path;

use medistock_core::{Error, Result, DEFAULT_LOW_STOCK_THRESHOLD};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "medistock.toml";

/// Inventory index configuration loaded from `medistock.toml`.
///
/// # Example
///
/// ```toml
/// low_stock_threshold = 30
/// expiry_tracking = true
/// seed_demo_catalog = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryConfig {
    /// Threshold used by `low_stock` when the caller gives none.
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: u32,
    /// Maintain the expiry priority structure. `false` runs in degraded mode.
    #[serde(default = "default_expiry_tracking")]
    pub expiry_tracking: bool,
    /// Load the demo catalog at construction.
    #[serde(default)]
    pub seed_demo_catalog: bool,
}

fn default_low_stock_threshold() -> u32 {
    DEFAULT_LOW_STOCK_THRESHOLD
}

fn default_expiry_tracking() -> bool {
    true
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: default_low_stock_threshold(),
            expiry_tracking: default_expiry_tracking(),
            seed_demo_catalog: false,
        }
    }
}

impl InventoryConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Medistock inventory index configuration

# Default threshold for low-stock queries (items with quantity <= threshold).
low_stock_threshold = 30

# Maintain the expiry priority structure (default: true).
# When false, expiring-item queries sort a snapshot of the record store
# instead. Results are identical; only the cost differs.
expiry_tracking = true

# Load the six demo records at startup (default: false).
seed_demo_catalog = false
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: InventoryConfig = toml::from_str(&content).map_err(|e| {
            Error::config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        info!(
            target: "medistock::config",
            path = %path.display(),
            low_stock_threshold = config.low_stock_threshold,
            expiry_tracking = config.expiry_tracking,
            seed_demo_catalog = config.seed_demo_catalog,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                Error::config(format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            Error::config(format!(
                "Failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
