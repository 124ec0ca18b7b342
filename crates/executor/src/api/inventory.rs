//! Inventory operations.

use medistock_core::{InventoryRecord, RawQuantity};

use super::Medistock;
use crate::types::{AddItemResponse, BatchResponse, LowStockResponse, SearchResponse};
use crate::{Command, Error, Output, Result};

impl Medistock {
    // =========================================================================
    // Search
    // =========================================================================

    /// Name search.
    ///
    /// Queries longer than two characters return the exact name if it is
    /// indexed; otherwise every indexed name with that prefix.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let hits = inv.search("a")?;
    /// assert_eq!(hits.results, vec!["aspirin", "azithromycin"]);
    /// ```
    pub fn search(&self, query: &str) -> Result<SearchResponse> {
        match self.executor.execute(Command::Search {
            query: query.to_string(),
        })? {
            Output::Search(response) => Ok(response),
            _ => Err(Error::Internal {
                reason: "Unexpected output for Search".into(),
            }),
        }
    }

    /// Records whose name contains `name`, ignoring case.
    pub fn catalog_search(&self, name: &str) -> Result<Vec<InventoryRecord>> {
        match self.executor.execute(Command::CatalogSearch {
            name: name.to_string(),
        })? {
            Output::Items(list) => Ok(list.results),
            _ => Err(Error::Internal {
                reason: "Unexpected output for CatalogSearch".into(),
            }),
        }
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Add one medicine.
    ///
    /// A name that is already indexed (ignoring case) is not an error: the
    /// response has status `exists` and no record.
    ///
    /// Accepts any quantity that implements `Into<RawQuantity>`:
    /// - `u32`, `i64` → integer
    /// - `&str`, `String` → text, parsed as a non-negative integer
    pub fn add_item(
        &self,
        name: &str,
        brand: &str,
        quantity: impl Into<RawQuantity>,
        expiry_date: &str,
    ) -> Result<AddItemResponse> {
        match self.executor.execute(Command::AddItem {
            name: Some(name.to_string()),
            brand: Some(brand.to_string()),
            quantity: Some(quantity.into()),
            expiry_date: Some(expiry_date.to_string()),
        })? {
            Output::ItemAdded(response) => Ok(response),
            _ => Err(Error::Internal {
                reason: "Unexpected output for AddItem".into(),
            }),
        }
    }

    /// Upload a header + rows batch, all or nothing.
    pub fn upload_batch(
        &self,
        columns: Vec<String>,
        rows: Vec<Vec<String>>,
    ) -> Result<BatchResponse> {
        match self
            .executor
            .execute(Command::UploadBatch { columns, rows })?
        {
            Output::BatchUploaded(response) => Ok(response),
            _ => Err(Error::Internal {
                reason: "Unexpected output for UploadBatch".into(),
            }),
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Every record, earliest expiry first.
    pub fn expiring_items(&self) -> Result<Vec<InventoryRecord>> {
        match self.executor.execute(Command::ExpiringItems)? {
            Output::Items(list) => Ok(list.results),
            _ => Err(Error::Internal {
                reason: "Unexpected output for ExpiringItems".into(),
            }),
        }
    }

    /// Records at or below `threshold`, or the configured default.
    pub fn low_stock(&self, threshold: Option<i64>) -> Result<LowStockResponse> {
        match self.executor.execute(Command::LowStock { threshold })? {
            Output::LowStock(response) => Ok(response),
            _ => Err(Error::Internal {
                reason: "Unexpected output for LowStock".into(),
            }),
        }
    }
}
