//! Output enum for command execution results.
//!
//! Every command produces exactly one output type. This mapping is deterministic:
//! the same command always produces the same output variant (though the values
//! may differ based on index state).

use serde::{Deserialize, Serialize};

use crate::types::*;

/// Successful command execution results.
///
/// Each [`Command`](crate::Command) variant maps to exactly one `Output` variant.
///
/// # Example
///
/// ```text
/// use medistock_executor::{Command, Output};
///
/// match executor.execute(Command::ExpiringItems)? {
///     Output::Items(list) => println!("{} records", list.results.len()),
///     _ => unreachable!("ExpiringItems always returns Items"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Output {
    /// Name search result
    Search(SearchResponse),

    /// Single add result
    ItemAdded(AddItemResponse),

    /// Batch upload result
    BatchUploaded(BatchResponse),

    /// Record list (expiring items, catalog search)
    Items(ItemList),

    /// Low-stock result
    LowStock(LowStockResponse),

    /// Health probe result
    Health(HealthReport),

    /// Ping response with version
    Pong {
        /// Crate version
        version: String,
    },

    /// Service description
    ApiInfo(ApiInfo),
}
