//! Property tests for the name trie and the expiry tracker
//!
//! These run the structures against simple reference models
//! (`BTreeSet` for the trie, a stable sort for the tracker).

use std::collections::BTreeSet;

use medistock_core::{InventoryRecord, NewItem, RecordId};
use medistock_search::{ExpiryTracker, InsertOutcome, NameIndex};
use proptest::prelude::*;

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z]{1,12}"
}

fn date_strategy() -> impl Strategy<Value = String> {
    (2020u32..2030, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| format!("{:04}-{:02}-{:02}", y, m, d))
}

fn record(id: u64, expiry: &str) -> InventoryRecord {
    NewItem::new(&format!("item{}", id), "Generic", 1, expiry)
        .unwrap()
        .into_record(RecordId::new(id))
}

proptest! {
    #[test]
    fn empty_prefix_is_sorted_and_deduplicated(
        names in prop::collection::vec(name_strategy(), 0..40),
    ) {
        let mut index = NameIndex::new();
        for name in &names {
            index.insert(name);
        }

        let expected: Vec<String> = names
            .iter()
            .map(|n| n.to_lowercase())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        prop_assert_eq!(index.prefix_search(""), expected.clone());
        prop_assert_eq!(index.len(), expected.len());
    }

    #[test]
    fn inserted_names_stay_present(
        first in name_strategy(),
        others in prop::collection::vec(name_strategy(), 0..30),
    ) {
        let mut index = NameIndex::new();
        index.insert(&first);
        for other in &others {
            index.insert(other);
            prop_assert!(index.contains_exact(&first));
        }
    }

    #[test]
    fn second_insert_reports_already_present(
        names in prop::collection::btree_set("[a-z]{1,8}", 1..20),
    ) {
        let mut index = NameIndex::new();
        for name in &names {
            prop_assert_eq!(index.insert(name), InsertOutcome::Inserted);
        }
        let len = index.len();
        let nodes = index.node_count();
        for name in &names {
            prop_assert_eq!(index.insert(name), InsertOutcome::AlreadyPresent);
        }
        prop_assert_eq!(index.len(), len);
        prop_assert_eq!(index.node_count(), nodes);
    }

    #[test]
    fn prefix_results_match_filtered_model(
        names in prop::collection::vec("[a-c]{1,5}", 0..30),
        prefix in "[a-c]{0,3}",
    ) {
        let mut index = NameIndex::new();
        for name in &names {
            index.insert(name);
        }
        let expected: Vec<String> = names
            .iter()
            .filter(|n| n.starts_with(prefix.as_str()))
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        prop_assert_eq!(index.prefix_search(&prefix), expected);
    }

    #[test]
    fn remove_restores_previous_shape(
        base in prop::collection::btree_set("[a-c]{1,5}", 0..15),
        extra in "[a-c]{1,6}",
    ) {
        let mut index = NameIndex::new();
        for name in &base {
            index.insert(name);
        }
        prop_assume!(!base.contains(&extra));
        let nodes = index.node_count();
        let listing = index.prefix_search("");

        index.insert(&extra);
        prop_assert!(index.remove(&extra));

        prop_assert_eq!(index.node_count(), nodes);
        prop_assert_eq!(index.prefix_search(""), listing);
    }

    #[test]
    fn snapshot_is_sorted_stable_and_repeatable(
        dates in prop::collection::vec(date_strategy(), 0..40),
    ) {
        let mut tracker = ExpiryTracker::new();
        let mut model = Vec::new();
        for (i, date) in dates.iter().enumerate() {
            let r = record(i as u64 + 1, date);
            tracker.insert(r.clone());
            model.push(r);
        }
        // Vec::sort_by is stable: equal dates keep insertion order
        model.sort_by(|a, b| a.expiry_date.cmp(&b.expiry_date));

        let first = tracker.snapshot_sorted_by_expiry();
        let second = tracker.snapshot_sorted_by_expiry();
        prop_assert_eq!(&first, &model);
        prop_assert_eq!(first, second);
        prop_assert_eq!(tracker.len(), dates.len());
    }
}
