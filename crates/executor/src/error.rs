//! Error types for command execution.
//!
//! All errors from command execution are represented by the [`Error`] enum.
//! These errors are:
//! - **Structured**: Each variant has typed fields for error details
//! - **Serializable**: Can be converted to/from JSON
//! - **Lossless**: No error information is lost in conversion from internal errors

use serde::{Deserialize, Serialize};

/// Command execution errors.
///
/// # Categories
///
/// | Category | Variants | Description |
/// |----------|----------|-------------|
/// | Validation | `InvalidInput`, `MissingField` | Bad input |
/// | Batch | `BatchRejected`, `MissingColumns` | Upload refused as a whole |
/// | Not Found | `NotFound` | Entity doesn't exist |
/// | System | `Config`, `Internal` | Infrastructure errors |
///
/// # Example
///
/// ```ignore
/// use medistock_executor::{Command, Error};
///
/// match executor.execute(cmd) {
///     Ok(output) => { /* handle success */ }
///     Err(Error::MissingField { field }) => {
///         println!("'{}' is required", field);
///     }
///     Err(e) => {
///         println!("Error: {}", e);
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Validation Errors ====================
    /// Invalid input
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What was wrong
        reason: String,
    },

    /// Required field absent from the command
    #[error("missing required field: {field}")]
    MissingField {
        /// Wire name of the field
        field: String,
    },

    // ==================== Batch Errors ====================
    /// A row failed validation; nothing was committed
    #[error("row {row}: {reason}")]
    BatchRejected {
        /// Zero-based row index, header excluded
        row: usize,
        /// The validation failure
        reason: String,
    },

    /// The batch header lacks required columns
    #[error("missing required columns: {}", .columns.join(", "))]
    MissingColumns {
        /// Required columns absent from the header
        columns: Vec<String>,
    },

    // ==================== Not Found ====================
    /// Entity not found
    #[error("not found: {entity}")]
    NotFound {
        /// What was looked up
        entity: String,
    },

    // ==================== System Errors ====================
    /// Configuration could not be loaded
    #[error("configuration error: {reason}")]
    Config {
        /// Loader message
        reason: String,
    },

    /// Internal error (bug or invariant violation)
    #[error("internal error: {reason}")]
    Internal {
        /// Description
        reason: String,
    },
}

/// Coarse error category, for transports that map errors to status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Caller input was invalid
    Validation,
    /// A batch was rejected as a whole
    Batch,
    /// Referenced entity does not exist
    NotFound,
    /// Fault on the service side
    Internal,
}

impl Error {
    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidInput { .. } | Error::MissingField { .. } => ErrorKind::Validation,
            Error::BatchRejected { .. } | Error::MissingColumns { .. } => ErrorKind::Batch,
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::Config { .. } | Error::Internal { .. } => ErrorKind::Internal,
        }
    }

    /// Whether the caller can fix this by changing its input
    pub fn is_caller_error(&self) -> bool {
        matches!(self.kind(), ErrorKind::Validation | ErrorKind::Batch)
    }
}
