//! Item command handlers.

use medistock_core::{ItemCandidate, RawQuantity};
use medistock_engine::InventoryIndex;

use crate::convert::convert_result;
use crate::types::{AddItemResponse, ItemList, LowStockResponse};
use crate::{Output, Result};

/// Handle AddItem command.
///
/// Fields are validated in order name, brand, quantity, expiryDate; the first
/// failure is reported.
pub fn add_item(
    index: &InventoryIndex,
    name: Option<String>,
    brand: Option<String>,
    quantity: Option<RawQuantity>,
    expiry_date: Option<String>,
) -> Result<Output> {
    let candidate = ItemCandidate {
        name,
        brand,
        quantity,
        expiry_date,
    };
    let outcome = convert_result(index.add_candidate(&candidate))?;
    Ok(Output::ItemAdded(AddItemResponse::from(outcome)))
}

/// Handle ExpiringItems command.
pub fn expiring_items(index: &InventoryIndex) -> Result<Output> {
    Ok(Output::Items(ItemList {
        results: index.expiring_items(),
    }))
}

/// Handle LowStock command.
///
/// The requested threshold is echoed back as given. Quantities are never
/// negative, so a negative threshold yields no results.
pub fn low_stock(index: &InventoryIndex, threshold: Option<i64>) -> Result<Output> {
    let response = match threshold {
        None => LowStockResponse::from(index.low_stock(None)),
        Some(t) if t < 0 => LowStockResponse {
            results: Vec::new(),
            threshold: t,
        },
        Some(t) => {
            let clamped = u32::try_from(t).unwrap_or(u32::MAX);
            LowStockResponse {
                threshold: t,
                ..LowStockResponse::from(index.low_stock(Some(clamped)))
            }
        }
    };
    Ok(Output::LowStock(response))
}
