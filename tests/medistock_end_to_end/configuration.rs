//! Configuration Tests
//!
//! `medistock.toml` drives threshold, expiry mode and demo seeding.

use medistock::{Error, InventoryConfig, Medistock, CONFIG_FILE_NAME};
use tempfile::TempDir;

#[test]
fn open_writes_commented_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);

    let inv = Medistock::open(&path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, InventoryConfig::default_toml());
    assert_eq!(inv.config(), &InventoryConfig::default());
    assert_eq!(inv.health().unwrap().medicines_count, 0);
}

#[test]
fn degraded_mode_gives_identical_answers() {
    let dir = TempDir::new().unwrap();
    let tracked_path = dir.path().join("tracked.toml");
    let fallback_path = dir.path().join("fallback.toml");
    std::fs::write(&tracked_path, "seed_demo_catalog = true\n").unwrap();
    std::fs::write(
        &fallback_path,
        "seed_demo_catalog = true\nexpiry_tracking = false\n",
    )
    .unwrap();

    let tracked = Medistock::open(&tracked_path).unwrap();
    let fallback = Medistock::open(&fallback_path).unwrap();

    assert!(tracked.health().unwrap().expiry_tracking_available);
    assert!(!fallback.health().unwrap().expiry_tracking_available);
    assert_eq!(
        tracked.expiring_items().unwrap(),
        fallback.expiring_items().unwrap()
    );
}

#[test]
fn configured_threshold_is_the_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    let config = InventoryConfig {
        low_stock_threshold: 50,
        seed_demo_catalog: true,
        ..InventoryConfig::default()
    };
    config.write_to_file(&path).unwrap();

    let inv = Medistock::open(&path).unwrap();
    let low = inv.low_stock(None).unwrap();
    assert_eq!(low.threshold, 50);
    assert_eq!(low.results.len(), 4);
}

#[test]
fn unparsable_config_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "this is not toml =\n").unwrap();

    match Medistock::open(&path) {
        Err(Error::Config { reason }) => assert!(reason.contains("Failed to parse")),
        Err(other) => panic!("unexpected error: {:?}", other),
        Ok(_) => panic!("expected a config error"),
    }
}
