//! Tabular batch intake
//!
//! A `TabularBatch` is a header row plus data rows, already split into cells
//! by whatever read the upload. Column lookup happens once, against the
//! header, before any row is examined.

use serde::{Deserialize, Serialize};

use crate::error::BatchRejection;
use crate::types::{ItemCandidate, RawQuantity};

/// Columns every batch header must contain
pub const REQUIRED_COLUMNS: [&str; 4] = ["name", "brand", "quantity", "expiryDate"];

/// Header plus rows of text cells
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabularBatch {
    /// Header cells
    pub columns: Vec<String>,
    /// Data rows
    pub rows: Vec<Vec<String>>,
}

impl TabularBatch {
    /// Create a batch from a header and rows
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        TabularBatch { columns, rows }
    }

    /// Map rows to candidates by header position
    ///
    /// Fails with `MissingColumns` if the header lacks a required column.
    /// Extra columns are ignored; a row shorter than the header leaves the
    /// missing cells absent, which validation reports as a missing field.
    pub fn into_candidates(self) -> Result<Vec<ItemCandidate>, BatchRejection> {
        let position = |wanted: &str| self.columns.iter().position(|c| c.trim() == wanted);

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|c| position(c).is_none())
            .map(|c| c.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(BatchRejection::MissingColumns { columns: missing });
        }

        // All four present after the check above
        let [name, brand, quantity, expiry] = REQUIRED_COLUMNS.map(|c| position(c).unwrap_or(0));

        Ok(self
            .rows
            .into_iter()
            .map(|row| {
                let cell = |i: usize| row.get(i).cloned();
                ItemCandidate {
                    name: cell(name),
                    brand: cell(brand),
                    quantity: cell(quantity).map(RawQuantity::Text),
                    expiry_date: cell(expiry),
                }
            })
            .collect())
    }
}
