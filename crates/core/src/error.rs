//! Error types for Medistock
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Duplicate names are deliberately absent: adding a name that is already
//! indexed is a successful outcome (`AddOutcome::Duplicate`), not an error.

use thiserror::Error;

/// Result type alias for Medistock operations
pub type Result<T> = std::result::Result<T, Error>;

/// A single field failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Required field was not supplied
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Field was supplied but is empty after trimming
    #[error("field '{0}' must not be empty")]
    EmptyField(&'static str),

    /// Field exceeds its length limit
    #[error("field '{field}' is {actual} characters, limit is {max}")]
    TooLong {
        /// Field name
        field: &'static str,
        /// Length in characters
        actual: usize,
        /// Maximum allowed
        max: usize,
    },

    /// Quantity is not a non-negative integer
    #[error("invalid quantity '{0}': expected a non-negative integer")]
    InvalidQuantity(String),

    /// Expiry date is not a valid `YYYY-MM-DD` date
    #[error("invalid expiry date '{0}': use YYYY-MM-DD")]
    InvalidExpiryDate(String),
}

/// Why a batch was refused as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BatchRejection {
    /// The header lacks one or more required columns; no row was examined
    #[error("missing required columns: {}", .columns.join(", "))]
    MissingColumns {
        /// Required columns absent from the header
        columns: Vec<String>,
    },

    /// A row failed validation; nothing in the batch was committed
    #[error("row {row}: {error}")]
    InvalidRow {
        /// Zero-based row index (header excluded)
        row: usize,
        /// The first validation failure in that row
        error: ValidationError,
    },
}

/// Error types for Medistock
#[derive(Debug, Error)]
pub enum Error {
    /// Caller supplied a missing or malformed field
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Batch refused atomically
    #[error("batch rejected: {0}")]
    BatchRejected(#[from] BatchRejection),

    /// Referenced entity does not exist
    #[error("not found: {0}")]
    NotFound(String),

    /// Internal invariant violated (bug)
    #[error("internal error: {0}")]
    Internal(String),

    /// Configuration could not be read or parsed
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Error::Internal(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Whether the caller can fix this by changing its input
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Error::Validation(_) | Error::BatchRejected(_))
    }
}
