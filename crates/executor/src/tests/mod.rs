//! Test modules for the executor crate.


use std::sync::Arc;

use medistock_engine::InventoryIndex;

use crate::Executor;

/// Executor over an empty index with default configuration
pub(crate) fn empty_executor() -> Executor {
    Executor::new(Arc::new(InventoryIndex::new()))
}

/// Executor over the six-record demo catalog
pub(crate) fn demo_executor(expiry_tracking: bool) -> Executor {
    let index = InventoryIndex::builder()
        .expiry_tracking(expiry_tracking)
        .seed_demo_catalog(true)
        .build()
        .unwrap();
    Executor::new(Arc::new(index))
}
