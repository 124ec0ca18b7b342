//! Command handlers organized by category.
//!
//! | Module | Commands |
//! |--------|----------|
//! | `search` | Search, CatalogSearch |
//! | `items` | AddItem, ExpiringItems, LowStock |
//! | `batch` | UploadBatch |
//! | `probe` | Health, Ping, Info |

pub mod batch;
pub mod items;
pub mod probe;
pub mod search;
