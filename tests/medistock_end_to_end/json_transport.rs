//! JSON Transport Tests
//!
//! Commands arrive as JSON and results leave as JSON, as they would behind an
//! HTTP adapter. These pin the field names clients read.

use crate::common::*;
use serde_json::json;

#[test]
fn add_item_with_text_quantity() {
    let executor = create_executor();
    let response = execute_json(
        &executor,
        json!({ "AddItem": {
            "name": " Aspirin ",
            "brand": "Bayer",
            "quantity": "120",
            "expiryDate": "2024-12-31"
        }}),
    );

    assert_eq!(response["ItemAdded"]["status"], "success");
    assert_eq!(response["ItemAdded"]["medicine"]["name"], "Aspirin");
    assert_eq!(response["ItemAdded"]["medicine"]["quantity"], 120);
    assert_eq!(response["ItemAdded"]["medicine"]["expiryDate"], "2024-12-31");
}

#[test]
fn add_item_missing_field_names_the_field() {
    let executor = create_executor();
    let response = execute_json(
        &executor,
        json!({ "AddItem": { "name": "Aspirin", "brand": "Bayer", "quantity": 1 } }),
    );

    assert_eq!(
        response,
        json!({ "error": { "MissingField": { "field": "expiryDate" } } })
    );
}

#[test]
fn expiring_items_wire_shape() {
    let executor = create_demo_executor(true);
    let response = execute_json(&executor, json!("ExpiringItems"));

    let results = response["Items"]["results"].as_array().unwrap();
    assert_eq!(results.len(), 6);
    assert_eq!(
        results[0],
        json!({
            "id": 3,
            "name": "Paracetamol",
            "brand": "Tylenol",
            "quantity": 50,
            "expiryDate": "2023-11-15"
        })
    );
}

#[test]
fn low_stock_wire_shape() {
    let executor = create_demo_executor(true);
    let response = execute_json(&executor, json!({ "LowStock": { "threshold": 25 } }));

    assert_eq!(response["LowStock"]["threshold"], 25);
    let quantities: Vec<u64> = response["LowStock"]["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["quantity"].as_u64().unwrap())
        .collect();
    assert_eq!(quantities, vec![10, 25]);
}

#[test]
fn upload_batch_missing_columns_error() {
    let executor = create_executor();
    let response = execute_json(
        &executor,
        json!({ "UploadBatch": {
            "columns": ["name", "brand"],
            "rows": [["Aspirin", "Bayer"]]
        }}),
    );

    assert_eq!(
        response,
        json!({ "error": { "MissingColumns": { "columns": ["quantity", "expiryDate"] } } })
    );
}

#[test]
fn health_and_search_shapes() {
    let executor = create_demo_executor(false);

    let health = execute_json(&executor, json!("Health"));
    assert_eq!(health["Health"]["status"], "healthy");
    assert_eq!(health["Health"]["medicines_count"], 6);
    assert_eq!(health["Health"]["expiry_tracking_available"], false);

    let search = execute_json(&executor, json!({ "Search": { "query": "lo" } }));
    assert_eq!(
        search,
        json!({ "Search": {
            "query": "lo",
            "results": ["loratadine"],
            "count": 1,
            "search_type": "prefix"
        }})
    );
}

#[test]
fn negative_threshold_returns_empty_list() {
    let executor = create_demo_executor(true);
    let response = execute_json(&executor, json!({ "LowStock": { "threshold": -1 } }));

    assert_eq!(response, json!({ "LowStock": { "results": [], "threshold": -1 } }));
}

#[test]
fn float_quantity_is_validated_not_rejected_at_decode() {
    let executor = create_executor();

    let whole = execute_json(
        &executor,
        json!({ "AddItem": {
            "name": "Aspirin",
            "brand": "Bayer",
            "quantity": 5.0,
            "expiryDate": "2024-12-31"
        }}),
    );
    assert_eq!(whole["ItemAdded"]["medicine"]["quantity"], 5);

    let fractional = execute_json(
        &executor,
        json!({ "AddItem": {
            "name": "Ibuprofen",
            "brand": "Advil",
            "quantity": 5.5,
            "expiryDate": "2024-06-30"
        }}),
    );
    assert!(fractional["error"]["InvalidInput"]["reason"]
        .as_str()
        .unwrap()
        .contains("5.5"));
}
