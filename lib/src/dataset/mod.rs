//! Dataset loading.
//!
//! Source files used with this crate have no header row and mark absent
//! values with a token of their own (the UCI heart-disease files use `"?"`).
//! [`CsvLoader`] reads such files into a [`Table`](crate::table::Table)
//! using a caller-supplied [`Schema`], normalizing the token to
//! [`Value::Missing`](crate::table::Value::Missing) on the way in.
//!
//! Fetching remote files is left to the caller: anything implementing
//! [`std::io::Read`] can be passed to [`CsvLoader::load_reader`].
//!
//! [`schemas`] holds the column layouts of the two reference datasets.

use crate::table::TableError;
use thiserror::Error;

pub mod loader;
pub mod schemas;

pub use loader::CsvLoader;

/// Error type for dataset loading.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// A field could not be converted to its column's kind.
    #[error("Row {row}, column {column}: cannot parse '{value}'")]
    Parse {
        row: usize,
        column: String,
        value: String,
    },
    #[error(transparent)]
    Table(#[from] TableError),
}
