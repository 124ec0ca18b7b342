//! Common test utilities for end-to-end tests

use std::sync::Arc;

use medistock::{Command, Executor, InventoryIndex, Output};

/// Executor over an empty index
pub fn create_executor() -> Executor {
    Executor::new(Arc::new(InventoryIndex::new()))
}

/// Executor over the demo catalog
pub fn create_demo_executor(expiry_tracking: bool) -> Executor {
    let index = InventoryIndex::builder()
        .expiry_tracking(expiry_tracking)
        .seed_demo_catalog(true)
        .build()
        .unwrap();
    Executor::new(Arc::new(index))
}

/// Decode a JSON command, execute it, and encode the result as JSON
///
/// Errors come back as `{"error": <Error>}` the way a transport would send them.
pub fn execute_json(executor: &Executor, request: serde_json::Value) -> serde_json::Value {
    let command: Command = serde_json::from_value(request).unwrap();
    match executor.execute(command) {
        Ok(output) => serde_json::to_value(output).unwrap(),
        Err(e) => serde_json::json!({ "error": e }),
    }
}

/// Names of the records in an `Output::Items`
pub fn item_names(output: &Output) -> Vec<String> {
    match output {
        Output::Items(list) => list.results.iter().map(|r| r.name.clone()).collect(),
        _ => panic!("Expected Output::Items, got {:?}", output),
    }
}

/// Build a string row
pub fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|s| s.to_string()).collect()
}
