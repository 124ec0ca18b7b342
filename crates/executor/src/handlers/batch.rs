//! Batch upload handler.

use medistock_core::TabularBatch;
use medistock_engine::InventoryIndex;

use crate::convert::convert_result;
use crate::types::BatchResponse;
use crate::{Output, Result};

/// Handle UploadBatch command.
///
/// The header is checked for required columns before any row; the first
/// invalid row rejects the whole batch.
pub fn upload_batch(
    index: &InventoryIndex,
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
) -> Result<Output> {
    let outcome = convert_result(index.add_tabular(TabularBatch::new(columns, rows)))?;
    Ok(Output::BatchUploaded(BatchResponse::from(outcome)))
}
