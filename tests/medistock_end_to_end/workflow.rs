//! Workflow Tests
//!
//! A pharmacy session: upload stock, search it, find what expires first and
//! what needs reordering.

use crate::common::*;
use medistock::{AddStatus, Command, ErrorKind, Medistock, Output, SearchKind};

#[test]
fn upload_search_expire_reorder() {
    let inv = Medistock::new();

    let uploaded = inv
        .upload_batch(
            row(&["name", "brand", "quantity", "expiryDate"]),
            vec![
                row(&["Aspirin", "Bayer", "120", "2024-12-31"]),
                row(&["Ibuprofen", "Advil", "85", "2024-06-30"]),
                row(&["Amoxicillin", "Amoxil", "30", "2023-12-10"]),
                row(&["Cetirizine", "Zyrtec", "10", "2025-01-20"]),
            ],
        )
        .unwrap();
    assert_eq!(uploaded.status, AddStatus::Success);
    assert_eq!(uploaded.medicines.len(), 4);

    let added = inv.add_item("Azithromycin", "Zithromax", 40u32, "2024-03-01").unwrap();
    assert_eq!(added.medicine.unwrap().id.as_u64(), 5);

    let hits = inv.search("a").unwrap();
    assert_eq!(hits.search_type, SearchKind::Prefix);
    assert_eq!(hits.results, vec!["amoxicillin", "aspirin", "azithromycin"]);

    let hit = inv.search("ibuprofen").unwrap();
    assert_eq!(hit.search_type, SearchKind::Exact);

    let expiring: Vec<String> = inv
        .expiring_items()
        .unwrap()
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(
        expiring,
        vec!["Amoxicillin", "Azithromycin", "Ibuprofen", "Aspirin", "Cetirizine"]
    );

    let reorder = inv.low_stock(None).unwrap();
    let names: Vec<&str> = reorder.results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Cetirizine", "Amoxicillin"]);

    let health = inv.health().unwrap();
    assert_eq!(health.medicines_count, 5);
    assert_eq!(health.indexed_names, 5);
}

#[test]
fn rejected_upload_leaves_inventory_untouched() {
    let executor = create_demo_executor(true);
    let before = item_names(&executor.execute(Command::ExpiringItems).unwrap());

    let err = executor
        .execute(Command::UploadBatch {
            columns: row(&["name", "brand", "quantity", "expiryDate"]),
            rows: vec![
                row(&["Metformin", "Glucophage", "60", "2025-03-01"]),
                row(&["Omeprazole", "Prilosec", "20", "2024-02-30"]),
            ],
        })
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Batch);

    let after = item_names(&executor.execute(Command::ExpiringItems).unwrap());
    assert_eq!(before, after);

    match executor
        .execute(Command::Search {
            query: "metformin".to_string(),
        })
        .unwrap()
    {
        Output::Search(response) => assert!(response.results.is_empty()),
        other => panic!("Expected Search output, got {:?}", other),
    }
}

#[test]
fn readding_under_different_case_is_reported_not_duplicated() {
    let inv = Medistock::new();
    inv.add_item("Loratadine", "Claritin", 25u32, "2024-08-15").unwrap();

    let again = inv.add_item("LORATADINE", "Alavert", 5u32, "2026-01-01").unwrap();
    assert_eq!(again.status, AddStatus::Exists);

    let records = inv.catalog_search("lora").unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].brand, "Claritin");
}
