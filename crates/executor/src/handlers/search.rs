//! Search command handlers.

use medistock_engine::InventoryIndex;

use crate::types::{ItemList, SearchResponse};
use crate::{Error, Output, Result};

fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::InvalidInput {
            reason: format!("'{}' must not be empty", field),
        });
    }
    Ok(())
}

/// Handle Search command.
pub fn search(index: &InventoryIndex, query: String) -> Result<Output> {
    require_non_empty("query", &query)?;
    let result = index.search(&query);
    Ok(Output::Search(SearchResponse::from(result)))
}

/// Handle CatalogSearch command.
pub fn catalog_search(index: &InventoryIndex, name: String) -> Result<Output> {
    require_non_empty("name", &name)?;
    Ok(Output::Items(ItemList {
        results: index.catalog_search(&name),
    }))
}
