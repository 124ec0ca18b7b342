//! Conversion from engine types to executor types.
//!
//! Errors are mapped variant by variant so structured details survive; engine
//! outcomes are mapped to their wire response shapes.

use medistock_core::{
    AddOutcome, BatchOutcome, BatchRejection, Error as CoreError, IndexStatus, LowStock,
    SearchResult, ValidationError,
};

use crate::types::{
    AddItemResponse, AddStatus, BatchResponse, HealthReport, LowStockResponse, SearchResponse,
};
use crate::Error;

/// Convert a core error to an executor Error.
///
/// A missing field keeps its field name; every other validation failure
/// becomes `InvalidInput` with the validator's message.
impl From<CoreError> for Error {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(ValidationError::MissingField(field)) => Error::MissingField {
                field: field.to_string(),
            },
            CoreError::Validation(e) => Error::InvalidInput {
                reason: e.to_string(),
            },
            CoreError::BatchRejected(BatchRejection::MissingColumns { columns }) => {
                Error::MissingColumns { columns }
            }
            CoreError::BatchRejected(BatchRejection::InvalidRow { row, error }) => {
                Error::BatchRejected {
                    row,
                    reason: error.to_string(),
                }
            }
            CoreError::NotFound(entity) => Error::NotFound { entity },
            CoreError::Config(reason) => Error::Config { reason },
            CoreError::Internal(reason) => Error::Internal { reason },
        }
    }
}

/// Convert a core `Result` to an executor `Result`.
pub(crate) fn convert_result<T>(r: medistock_core::Result<T>) -> crate::Result<T> {
    r.map_err(Error::from)
}

impl From<SearchResult> for SearchResponse {
    fn from(result: SearchResult) -> Self {
        SearchResponse {
            count: result.count(),
            query: result.query,
            results: result.names,
            search_type: result.kind,
        }
    }
}

impl From<AddOutcome> for AddItemResponse {
    fn from(outcome: AddOutcome) -> Self {
        match outcome {
            AddOutcome::Created(record) => AddItemResponse {
                status: AddStatus::Success,
                message: format!("Added medicine: {}", record.name),
                medicine: Some(record),
            },
            AddOutcome::Duplicate(name) => AddItemResponse {
                status: AddStatus::Exists,
                message: format!("{} already exists in the medicine database", name),
                medicine: None,
            },
        }
    }
}

impl From<BatchOutcome> for BatchResponse {
    fn from(outcome: BatchOutcome) -> Self {
        let mut message = format!("Uploaded {} medicines", outcome.created.len());
        if !outcome.duplicates.is_empty() {
            message.push_str(&format!(
                ", skipped {} already present",
                outcome.duplicates.len()
            ));
        }
        BatchResponse {
            status: AddStatus::Success,
            message,
            medicines: outcome.created,
            duplicates: outcome.duplicates,
        }
    }
}

impl From<LowStock> for LowStockResponse {
    fn from(low: LowStock) -> Self {
        LowStockResponse {
            results: low.records,
            threshold: i64::from(low.threshold),
        }
    }
}

impl From<IndexStatus> for HealthReport {
    fn from(status: IndexStatus) -> Self {
        HealthReport {
            status: "healthy".to_string(),
            medicines_count: status.item_count,
            indexed_names: status.indexed_names,
            expiry_tracking_available: status.expiry_mode.is_tracked(),
        }
    }
}
