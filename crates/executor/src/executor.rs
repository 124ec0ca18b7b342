//! The Executor - single entry point to the inventory engine.
//!
//! The Executor is a stateless dispatcher that routes commands to the
//! appropriate index operations and converts results to outputs.

use std::sync::Arc;

use medistock_engine::InventoryIndex;
use tracing::debug;

use crate::handlers;
use crate::{Command, Output, Result};

/// The command executor - single entry point to the inventory engine.
///
/// The Executor is **stateless**: it holds a handle to the inventory index
/// but maintains no state of its own. All state lives in the engine.
///
/// # Thread Safety
///
/// Executor is `Send + Sync` and can be shared across threads.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use medistock_engine::InventoryIndex;
/// use medistock_executor::{Command, Executor};
///
/// let executor = Executor::new(Arc::new(InventoryIndex::new()));
///
/// // Single command execution
/// let result = executor.execute(Command::Search { query: "asp".into() })?;
///
/// // Batch execution
/// let results = executor.execute_many(vec![Command::Ping, Command::Health]);
/// ```
#[derive(Debug, Clone)]
pub struct Executor {
    index: Arc<InventoryIndex>,
}

impl Executor {
    /// Create a new executor wrapping an inventory index.
    pub fn new(index: Arc<InventoryIndex>) -> Self {
        Self { index }
    }

    /// The wrapped index
    pub fn index(&self) -> &Arc<InventoryIndex> {
        &self.index
    }

    /// Execute a single command.
    ///
    /// Returns the command result or an error.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        let name = cmd.name();
        debug!(target: "medistock::executor", command = name, "Executing command");

        let result = match cmd {
            // Search
            Command::Search { query } => handlers::search::search(&self.index, query),
            Command::CatalogSearch { name } => handlers::search::catalog_search(&self.index, name),

            // Items
            Command::AddItem {
                name,
                brand,
                quantity,
                expiry_date,
            } => handlers::items::add_item(&self.index, name, brand, quantity, expiry_date),
            Command::UploadBatch { columns, rows } => {
                handlers::batch::upload_batch(&self.index, columns, rows)
            }
            Command::ExpiringItems => handlers::items::expiring_items(&self.index),
            Command::LowStock { threshold } => handlers::items::low_stock(&self.index, threshold),

            // Probe
            Command::Health => handlers::probe::health(&self.index),
            Command::Ping => handlers::probe::ping(),
            Command::Info => handlers::probe::info(),
        };

        if let Err(e) = &result {
            debug!(target: "medistock::executor", command = name, error = %e, "Command failed");
        }
        result
    }

    /// Execute multiple commands sequentially.
    ///
    /// Returns all results in the same order as the input commands.
    /// Execution continues even if some commands fail.
    pub fn execute_many(&self, cmds: Vec<Command>) -> Vec<Result<Output>> {
        cmds.into_iter().map(|cmd| self.execute(cmd)).collect()
    }
}
