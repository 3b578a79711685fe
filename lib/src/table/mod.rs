//! Typed tabular data.
//!
//! A [`Table`] is an ordered sequence of rows sharing one [`Schema`]. Each
//! column declares its [`ColumnKind`] once; cells are tagged [`Value`]s so a
//! numeric column can still hold a raw `"?"` token until it is normalized
//! with a [`Sentinel`].
//!
//! # Example
//!
//! ```
//! use tabular_impute::table::{Column, Schema, Sentinel, Table, Value};
//!
//! let schema = Schema::new(vec![Column::numeric("ca"), Column::numeric("thal")]).unwrap();
//! let raw = Table::new(
//!     schema,
//!     vec![
//!         vec![Value::Number(0.0), Value::text("?")],
//!         vec![Value::text("?"), Value::Number(3.0)],
//!     ],
//! )
//! .unwrap();
//!
//! let table = raw.normalize_sentinel(&Sentinel::Text("?".into()));
//! assert_eq!(table.value(0, "thal"), Some(&Value::Missing));
//! ```

pub mod error;
pub mod schema;
#[allow(clippy::module_inception)]
pub mod table;
pub mod value;

pub use error::TableError;
pub use schema::{Column, ColumnKind, Schema};
pub use table::Table;
pub use value::{Sentinel, Value};
