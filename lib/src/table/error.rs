//! Error types for table construction and access.

use thiserror::Error;

/// Error type for building or reading a [`Table`](super::Table).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TableError {
    /// Two schema columns share a name.
    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),
    /// A row does not carry one value per schema column.
    #[error("Row {row} has {got} values, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        got: usize,
    },
    /// A column name is not part of the schema.
    #[error("Unknown column: {0}")]
    UnknownColumn(String),
    /// A record mapping lacks a schema column.
    #[error("Row {row} is missing a value for column {column}")]
    MissingField { row: usize, column: String },
    /// A cell cannot be represented in a numeric matrix.
    #[error("Non-numeric {found} value in column {column} at row {row}")]
    NonNumeric {
        row: usize,
        column: String,
        found: &'static str,
    },
}
