//! Demo catalog
//!
//! Six reference records, loaded through the normal batch path when
//! `seed_demo_catalog = true` so every view is populated consistently.

use medistock_core::ItemCandidate;

const DEMO_ROWS: [(&str, &str, u32, &str); 6] = [
    ("Aspirin", "Bayer", 120, "2024-12-31"),
    ("Ibuprofen", "Advil", 85, "2024-06-30"),
    ("Paracetamol", "Tylenol", 50, "2023-11-15"),
    ("Amoxicillin", "Amoxil", 30, "2023-12-10"),
    ("Cetirizine", "Zyrtec", 10, "2025-01-20"),
    ("Loratadine", "Claritin", 25, "2024-08-15"),
];

/// The demo records as batch candidates
pub fn demo_catalog() -> Vec<ItemCandidate> {
    DEMO_ROWS
        .iter()
        .map(|&(name, brand, quantity, expiry)| ItemCandidate::new(name, brand, quantity, expiry))
        .collect()
}
