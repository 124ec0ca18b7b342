//! Concurrent Client Tests
//!
//! Several clients share one executor; reads run alongside uploads.

use std::sync::{Arc, Barrier};
use std::thread;

use crate::common::*;
use medistock::{Command, Output, RawQuantity};

#[test]
fn uploads_and_reads_from_many_threads() {
    let executor = Arc::new(create_executor());
    let clients = 4;
    let barrier = Arc::new(Barrier::new(clients * 2));

    let mut handles = Vec::new();
    for c in 0..clients {
        let executor = Arc::clone(&executor);
        let barrier = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            barrier.wait();
            for i in 0..25 {
                let output = executor
                    .execute(Command::AddItem {
                        name: Some(format!("client{}-med{}", c, i)),
                        brand: Some("Generic".to_string()),
                        quantity: Some(RawQuantity::Int(i)),
                        expiry_date: Some(format!("2024-{:02}-15", i % 12 + 1)),
                    })
                    .unwrap();
                assert!(matches!(output, Output::ItemAdded(_)));
            }
        }));
    }

    for _ in 0..clients {
        let executor = Arc::clone(&executor);
        let barrier = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            barrier.wait();
            for _ in 0..50 {
                let count = match executor.execute(Command::Health).unwrap() {
                    Output::Health(report) => {
                        assert_eq!(report.medicines_count, report.indexed_names);
                        report.medicines_count
                    }
                    other => panic!("Expected Health output, got {:?}", other),
                };
                let expiring = item_names(&executor.execute(Command::ExpiringItems).unwrap());
                // Adds only grow the inventory, so a later read sees at least as much
                assert!(expiring.len() >= count);
            }
        }));
    }

    for h in handles {
        h.join().unwrap();
    }

    match executor.execute(Command::Health).unwrap() {
        Output::Health(report) => assert_eq!(report.medicines_count, clients * 25),
        other => panic!("Expected Health output, got {:?}", other),
    }
    executor.index().check_invariants().unwrap();
}
