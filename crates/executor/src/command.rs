//! Command enum defining all Medistock operations.
//!
//! Commands are the "instruction set" of Medistock. Every operation a
//! transport can perform on the inventory is represented as a variant here.
//!
//! Commands are:
//! - **Self-contained**: All parameters needed for execution are in the variant
//! - **Serializable**: Can be converted to/from JSON for cross-language use
//! - **Pure data**: No closures or executable code

use serde::{Deserialize, Serialize};

use medistock_core::RawQuantity;

/// A command is a self-contained, serializable operation.
///
/// # Command Categories
///
/// | Category | Count | Description |
/// |----------|-------|-------------|
/// | Search | 2 | Name and catalog lookup |
/// | Items | 4 | Add, upload, expiry and stock queries |
/// | Probe | 3 | Health, ping, info |
///
/// # Missing fields
///
/// `AddItem` fields are all optional on the wire so that a missing field is
/// reported as [`Error::MissingField`](crate::Error::MissingField) naming
/// that field, rather than as a generic decode failure. A quantity may be an
/// integer, an integral float such as `5.0`, or text; anything else that
/// decodes is rejected by validation as an invalid quantity.
///
/// Values of the wrong JSON type (e.g. a string `threshold` or an object
/// `quantity`) still fail at decode time, before any command runs.
///
/// # Example
///
/// ```ignore
/// use medistock_executor::Command;
///
/// let cmd: Command = serde_json::from_str(
///     r#"{"AddItem":{"name":"Aspirin","brand":"Bayer","quantity":"120","expiryDate":"2024-12-31"}}"#,
/// )?;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    // ==================== Search (2) ====================
    /// Exact-then-prefix name search.
    /// Returns: `Output::Search`
    Search {
        /// Query; must not be empty
        query: String,
    },

    /// Case-insensitive substring search over record names.
    /// Returns: `Output::Items`
    CatalogSearch {
        /// Substring; must not be empty
        name: String,
    },

    // ==================== Items (4) ====================
    /// Add a single medicine.
    /// Returns: `Output::ItemAdded`
    AddItem {
        /// Display name
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        /// Brand
        #[serde(default, skip_serializing_if = "Option::is_none")]
        brand: Option<String>,
        /// Quantity, integer or text
        #[serde(default, skip_serializing_if = "Option::is_none")]
        quantity: Option<RawQuantity>,
        /// `YYYY-MM-DD`
        #[serde(
            default,
            rename = "expiryDate",
            skip_serializing_if = "Option::is_none"
        )]
        expiry_date: Option<String>,
    },

    /// Upload a header + rows batch, all or nothing.
    /// Returns: `Output::BatchUploaded`
    UploadBatch {
        /// Header cells; must include name, brand, quantity, expiryDate
        columns: Vec<String>,
        /// Data rows
        rows: Vec<Vec<String>>,
    },

    /// Every record, earliest expiry first.
    /// Returns: `Output::Items`
    ExpiringItems,

    /// Records at or below a quantity threshold.
    /// Returns: `Output::LowStock`
    LowStock {
        /// Threshold; the configured default when omitted. A negative
        /// threshold matches nothing.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        threshold: Option<i64>,
    },

    // ==================== Probe (3) ====================
    /// Index health and counts.
    /// Returns: `Output::Health`
    Health,

    /// Liveness check.
    /// Returns: `Output::Pong`
    Ping,

    /// Service name, version and command list.
    /// Returns: `Output::ApiInfo`
    Info,
}

impl Command {
    /// Every command name, in declaration order
    pub const NAMES: [&'static str; 9] = [
        "Search",
        "CatalogSearch",
        "AddItem",
        "UploadBatch",
        "ExpiringItems",
        "LowStock",
        "Health",
        "Ping",
        "Info",
    ];

    /// Variant name, as it appears on the wire
    pub fn name(&self) -> &'static str {
        match self {
            Command::Search { .. } => "Search",
            Command::CatalogSearch { .. } => "CatalogSearch",
            Command::AddItem { .. } => "AddItem",
            Command::UploadBatch { .. } => "UploadBatch",
            Command::ExpiringItems => "ExpiringItems",
            Command::LowStock { .. } => "LowStock",
            Command::Health => "Health",
            Command::Ping => "Ping",
            Command::Info => "Info",
        }
    }
}
