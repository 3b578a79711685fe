//! Imputation transformers for handling missing values.
//!
//! This module provides transformers for imputing (filling in) missing values
//! in tables.
//!
//! # Available Transformers
//!
//! | Transformer | Description |
//! |-------------|-------------|
//! | [`SimpleImputer`] | Impute with mean, median, most_frequent, or constant |
//! | [`MissingIndicator`] | Boolean columns marking where values were missing |
//!
//! # Example
//!
//! ```ignore
//! use tabular_impute::preprocessing::{ImputeStrategy, SimpleImputer, Transformer};
//! use tabular_impute::table::Sentinel;
//!
//! let imputer = SimpleImputer::new(ImputeStrategy::MostFrequent)
//!     .with_missing_values(Sentinel::Text("?".into()))
//!     .with_add_indicator(true);
//! let fitted = imputer.fit(&train)?;
//! let imputed = fitted.transform(&test)?;
//! ```

pub mod config;
pub mod indicator;
pub mod simple;

pub use config::ImputerConfig;
pub use indicator::{
    FittedMissingIndicator, MissingIndicator, MissingIndicatorParams, INDICATOR_SUFFIX,
};
pub use simple::{
    ColumnStatistic, FittedSimpleImputer, ImputeStrategy, SimpleImputer, SimpleImputerParams,
};
