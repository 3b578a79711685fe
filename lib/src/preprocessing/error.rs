//! Error types for preprocessing operations.

use crate::table::TableError;
use thiserror::Error;

/// Error type for preprocessing operations.
///
/// All errors are raised synchronously from `fit` or `transform`; no
/// transformer ever returns a partially processed table.
#[derive(Debug, Error)]
pub enum PreprocessingError {
    /// The table being transformed does not have the columns seen at fit time.
    #[error("Schema mismatch: {0}")]
    SchemaMismatch(String),
    /// A numeric-only strategy was requested on a non-numeric column.
    #[error("Strategy {strategy} cannot be applied to {kind} column {column}")]
    StrategyKindMismatch {
        column: String,
        kind: String,
        strategy: String,
    },
    /// No non-missing values are available to compute a statistic.
    #[error("Empty column: no observed values in {0}")]
    EmptyColumn(String),
    /// Unknown strategy, missing constant, or a value the strategy cannot use.
    #[error("Invalid strategy: {0}")]
    InvalidStrategy(String),
    /// Empty data provided where non-empty was required.
    #[error("Empty data: {0}")]
    EmptyData(String),
    /// Data contains missing values when not expected.
    #[error("Missing values: {0}")]
    MissingValues(String),
    /// Invalid hyperparameter value or unsupported operation.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    /// Serialization or deserialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(String),
    /// The output table could not be assembled.
    #[error(transparent)]
    Table(#[from] TableError),
}

impl From<std::io::Error> for PreprocessingError {
    fn from(err: std::io::Error) -> Self {
        PreprocessingError::IoError(err.to_string())
    }
}

impl From<bincode::Error> for PreprocessingError {
    fn from(err: bincode::Error) -> Self {
        PreprocessingError::SerializationError(err.to_string())
    }
}

impl From<serde_json::Error> for PreprocessingError {
    fn from(err: serde_json::Error) -> Self {
        PreprocessingError::SerializationError(err.to_string())
    }
}
