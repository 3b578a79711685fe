//! # tabular-impute
//!
//! Missing-value imputation for small typed tables, with the scaling steps
//! that usually follow it.
//!
//! ## Core Design Principles
//!
//! - **Fit/Transform Separation**: An unfitted transformer only holds
//!   hyperparameters. Fitting produces a separate, immutable fitted type that
//!   carries the learned statistics and nothing else.
//! - **Typed Columns**: Every column declares whether it is numeric,
//!   categorical or boolean. Strategies that only make sense for numbers are
//!   rejected on other columns instead of being silently coerced.
//! - **Explicit Missingness**: Source files mark absent values in their own
//!   way (`"?"`, `NaN`, empty fields). All of them are normalized to a single
//!   [`Value::Missing`](table::Value::Missing) marker.
//!
//! ## Quick Start
//!
//! ```rust
//! use tabular_impute::dataset::{schemas, CsvLoader};
//! use tabular_impute::preprocessing::{FittedTransformer, ImputeStrategy, SimpleImputer, Transformer};
//! use tabular_impute::table::Value;
//!
//! let data = "63.0,1.0,1.0,145.0,233.0,1.0,2.0,150.0,0.0,2.3,3.0,0.0,6.0,0\n\
//!             67.0,1.0,4.0,160.0,286.0,0.0,2.0,108.0,1.0,1.5,2.0,3.0,3.0,2\n\
//!             67.0,1.0,4.0,120.0,229.0,0.0,2.0,129.0,1.0,2.6,2.0,?,7.0,1\n";
//!
//! let table = CsvLoader::new(schemas::heart_disease())
//!     .sentinel(schemas::HEART_DISEASE_SENTINEL)
//!     .load_str(data)
//!     .unwrap();
//!
//! let fitted = SimpleImputer::new(ImputeStrategy::Mean)
//!     .fit(&table.select(&["age", "ca"]).unwrap())
//!     .unwrap();
//! let filled = fitted.transform(&table.select(&["age", "ca"]).unwrap()).unwrap();
//!
//! assert_eq!(filled.value(2, "ca"), Some(&Value::Number(1.5)));
//! ```
//!
//! ## Module Structure
//!
//! - `table`: Typed cells, schemas and row-major tables
//! - `dataset`: Delimited-file loading and the reference dataset schemas
//! - `preprocessing`: Imputers, missing indicators and scalers
//! - `serialization`: Binary persistence of fitted parameters

/// Typed tabular data.
pub mod table;

/// Data loading utilities.
pub mod dataset;

/// Data preprocessing transformers.
pub mod preprocessing;

/// Parameter persistence.
pub mod serialization;

pub use preprocessing::{
    FittedSimpleImputer, FittedTransformer, ImputeStrategy, PreprocessingError, SimpleImputer,
    Transformer,
};
pub use table::{Column, ColumnKind, Schema, Sentinel, Table, Value};
