//! InventoryIndex - the coordinator
//!
//! Owns the record store, the name trie and the expiry view, and is the only
//! place records are created. All three live in one `IndexState` behind a
//! single `RwLock`:
//!
//! - Reads take the shared lock for their whole duration
//! - Mutations validate outside the lock, then take the exclusive lock for
//!   the three-way update
//!
//! A reader therefore never sees a record whose name or expiry entry is
//! missing, and a failed mutation leaves every view as it found it.
//!
//! ## Commit order
//!
//! Record store, then name index, then expiry view. If the name index
//! disagrees with the duplicate check made under the same lock, the store
//! insert is rolled back and the operation fails with `Error::Internal`.

mod builder;
pub mod config;
mod seed;

pub use builder::InventoryIndexBuilder;
pub use config::{InventoryConfig, CONFIG_FILE_NAME};
pub use seed::demo_catalog;

use std::collections::HashSet;
use std::path::Path;

use medistock_core::{
    fold_name, AddOutcome, BatchOutcome, BatchRejection, Error, IndexStatus, InventoryRecord,
    ItemCandidate, Limits, LowStock, NewItem, RecordId, Result, SearchKind, SearchResult,
    TabularBatch, PREFIX_ONLY_QUERY_CHARS,
};
use medistock_search::{InsertOutcome, NameIndex};
use parking_lot::RwLock;
use tracing::{debug, error, info, warn};

use crate::expiry_view::{expiry_view_for, ExpiryView};
use crate::record_store::{RecordStore, StoreCheckpoint};

// ============================================================================
// IndexState
// ============================================================================

#[derive(Debug)]
struct IndexState {
    store: RecordStore,
    names: NameIndex,
    expiry: Box<dyn ExpiryView>,
}

impl IndexState {
    fn new(expiry_tracking: bool) -> Self {
        IndexState {
            store: RecordStore::new(),
            names: NameIndex::new(),
            expiry: expiry_view_for(expiry_tracking),
        }
    }

    /// Insert into store, names, expiry. Caller has checked the name is new.
    fn commit(&mut self, item: NewItem) -> Result<InventoryRecord> {
        let checkpoint = self.store.checkpoint();
        let record = self.store.insert(item);
        if self.names.insert(&record.name) == InsertOutcome::AlreadyPresent {
            self.store.rollback_to(checkpoint);
            error!(
                target: "medistock::index",
                name = %record.folded_name(),
                "Name index already held a name the duplicate check missed; store insert rolled back"
            );
            return Err(Error::internal(format!(
                "name index out of sync with record store for '{}'",
                record.folded_name()
            )));
        }
        self.expiry.record(&record);
        Ok(record)
    }

    /// Undo every record created since `checkpoint`.
    fn rollback(&mut self, checkpoint: StoreCheckpoint, created: &[InventoryRecord]) {
        for record in created {
            self.names.remove(&record.name);
        }
        let ids: HashSet<RecordId> = created.iter().map(|r| r.id).collect();
        self.expiry.forget(&ids);
        self.store.rollback_to(checkpoint);
    }

    fn check_invariants(&self) -> Result<()> {
        // Exactly one record per folded name
        if self.store.len() != self.names.len() {
            return Err(Error::internal(format!(
                "record store holds {} records but name index holds {} names",
                self.store.len(),
                self.names.len()
            )));
        }
        if let Some(record) = self.store.iter().find(|r| !self.names.contains_exact(&r.name)) {
            return Err(Error::internal(format!(
                "record {} ('{}') missing from name index",
                record.id, record.name
            )));
        }
        if let Some(tracked) = self.expiry.tracked_len() {
            if tracked != self.store.len() {
                return Err(Error::internal(format!(
                    "record store holds {} records but expiry tracker holds {}",
                    self.store.len(),
                    tracked
                )));
            }
        }
        Ok(())
    }
}

// ============================================================================
// InventoryIndex
// ============================================================================

/// Coordinated inventory index
///
/// Construct once and share by handle (`Arc<InventoryIndex>`).
///
/// # Thread Safety
///
/// `InventoryIndex` is `Send + Sync`. Reads run concurrently with each other;
/// mutations are serialized and exclusive with reads.
#[derive(Debug)]
pub struct InventoryIndex {
    state: RwLock<IndexState>,
    config: InventoryConfig,
    limits: Limits,
}

impl Default for InventoryIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryIndex {
    /// Empty index with default configuration
    pub fn new() -> Self {
        Self::empty(InventoryConfig::default(), Limits::default())
    }

    /// Builder for custom configuration
    pub fn builder() -> InventoryIndexBuilder {
        InventoryIndexBuilder::new()
    }

    /// Index configured from `config`, seeding the demo catalog if asked to
    pub fn with_config(config: InventoryConfig) -> Result<Self> {
        Self::with_config_and_limits(config, Limits::default())
    }

    /// Index configured from the `medistock.toml` at `path`
    ///
    /// A default file is written first if none exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        InventoryConfig::write_default_if_missing(path)?;
        let config = InventoryConfig::from_file(path)?;
        Self::with_config(config)
    }

    pub(crate) fn with_config_and_limits(config: InventoryConfig, limits: Limits) -> Result<Self> {
        let seed = config.seed_demo_catalog;
        let index = Self::empty(config, limits);
        if seed {
            let outcome = index.add_batch(demo_catalog())?;
            info!(
                target: "medistock::index",
                created = outcome.created.len(),
                "Seeded demo catalog"
            );
        }
        Ok(index)
    }

    fn empty(config: InventoryConfig, limits: Limits) -> Self {
        let state = IndexState::new(config.expiry_tracking);
        if config.expiry_tracking {
            info!(
                target: "medistock::index",
                low_stock_threshold = config.low_stock_threshold,
                "Inventory index ready with expiry tracking"
            );
        } else {
            warn!(
                target: "medistock::index",
                low_stock_threshold = config.low_stock_threshold,
                "Expiry tracking disabled; expiring-item queries will sort the record store"
            );
        }
        InventoryIndex {
            state: RwLock::new(state),
            config,
            limits,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &InventoryConfig {
        &self.config
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Add one validated item
    ///
    /// Returns `Duplicate` without touching any view if the folded name is
    /// already indexed.
    pub fn add_item(&self, item: NewItem) -> Result<AddOutcome> {
        let folded = item.folded_name();
        let mut state = self.state.write();
        if state.names.contains_exact(&folded) {
            debug!(target: "medistock::index", name = %folded, "Duplicate name; nothing added");
            return Ok(AddOutcome::Duplicate(folded));
        }
        let record = state.commit(item)?;
        debug!(
            target: "medistock::index",
            id = record.id.as_u64(),
            name = %record.name,
            expiry = %record.expiry_date,
            "Item added"
        );
        Ok(AddOutcome::Created(record))
    }

    /// Validate then add an unvalidated candidate
    pub fn add_candidate(&self, candidate: &ItemCandidate) -> Result<AddOutcome> {
        let item = candidate.validate_with(&self.limits)?;
        self.add_item(item)
    }

    /// Add a batch, all or nothing
    ///
    /// Every row is validated before anything is committed; the first invalid
    /// row rejects the whole batch. Rows whose name is already indexed, or
    /// repeats an earlier row, are reported as duplicates instead of created.
    pub fn add_batch(&self, candidates: Vec<ItemCandidate>) -> Result<BatchOutcome> {
        let items = candidates
            .iter()
            .enumerate()
            .map(|(row, candidate)| {
                candidate
                    .validate_with(&self.limits)
                    .map_err(|error| BatchRejection::InvalidRow { row, error })
            })
            .collect::<std::result::Result<Vec<_>, _>>();
        let items = match items {
            Ok(items) => items,
            Err(rejection) => {
                warn!(target: "medistock::index", reason = %rejection, "Batch rejected");
                return Err(rejection.into());
            }
        };

        let mut state = self.state.write();
        let checkpoint = state.store.checkpoint();
        let mut outcome = BatchOutcome::default();
        for item in items {
            let folded = item.folded_name();
            if state.names.contains_exact(&folded) {
                outcome.duplicates.push(folded);
                continue;
            }
            match state.commit(item) {
                Ok(record) => outcome.created.push(record),
                Err(e) => {
                    state.rollback(checkpoint, &outcome.created);
                    return Err(e);
                }
            }
        }
        info!(
            target: "medistock::index",
            created = outcome.created.len(),
            duplicates = outcome.duplicates.len(),
            "Batch committed"
        );
        Ok(outcome)
    }

    /// Add a header + rows batch
    ///
    /// Required columns are checked before any row is looked at.
    pub fn add_tabular(&self, batch: TabularBatch) -> Result<BatchOutcome> {
        let candidates = batch.into_candidates().map_err(|rejection| {
            warn!(target: "medistock::index", reason = %rejection, "Batch rejected");
            Error::from(rejection)
        })?;
        self.add_batch(candidates)
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Name search
    ///
    /// Queries of up to two characters always enumerate by prefix. Longer
    /// queries return the exact name if indexed, otherwise fall back to prefix.
    pub fn search(&self, query: &str) -> SearchResult {
        let folded = fold_name(query);
        let state = self.state.read();
        if folded.chars().count() > PREFIX_ONLY_QUERY_CHARS && state.names.contains_exact(&folded)
        {
            return SearchResult {
                kind: SearchKind::Exact,
                names: vec![folded.clone()],
                query: folded,
            };
        }
        let names = state.names.prefix_search(&folded);
        SearchResult {
            kind: SearchKind::Prefix,
            query: folded,
            names,
        }
    }

    /// All records, earliest expiry first
    pub fn expiring_items(&self) -> Vec<InventoryRecord> {
        let state = self.state.read();
        state.expiry.sorted(&state.store)
    }

    /// Records with quantity at or below `threshold` (or the configured default)
    pub fn low_stock(&self, threshold: Option<u32>) -> LowStock {
        let threshold = threshold.unwrap_or(self.config.low_stock_threshold);
        let records = self.state.read().store.filter_by_quantity_at_most(threshold);
        LowStock { threshold, records }
    }

    /// Records whose name contains `needle`, ignoring case
    pub fn catalog_search(&self, needle: &str) -> Vec<InventoryRecord> {
        self.state.read().store.filter_by_name_substring(needle)
    }

    /// Look up one record
    pub fn record(&self, id: RecordId) -> Result<InventoryRecord> {
        self.state
            .read()
            .store
            .get(id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("record {}", id)))
    }

    /// All records in insertion order
    pub fn records(&self) -> Vec<InventoryRecord> {
        self.state.read().store.all()
    }

    /// Counts and expiry mode
    pub fn status(&self) -> IndexStatus {
        let state = self.state.read();
        IndexStatus {
            item_count: state.store.len(),
            indexed_names: state.names.len(),
            expiry_mode: state.expiry.mode(),
        }
    }

    /// Verify the three views agree
    ///
    /// Returns `Error::Internal` describing the first disagreement found.
    pub fn check_invariants(&self) -> Result<()> {
        let result = self.state.read().check_invariants();
        if let Err(e) = &result {
            error!(target: "medistock::index", error = %e, "Index invariant violated");
        }
        result
    }
}
