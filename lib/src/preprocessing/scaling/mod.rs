//! Scaling transformers for numeric columns.
//!
//! Scalers learn per-column parameters from the numeric columns of a table
//! and leave categorical and boolean columns untouched. They expect imputed
//! input: a missing cell in a numeric column is an error.
//!
//! # Available Transformers
//!
//! | Transformer | Description | Use Case |
//! |-------------|-------------|----------|
//! | [`StandardScaler`] | Z-score normalization (mean=0, std=1) | Default choice for most algorithms |
//! | [`MinMaxScaler`] | Scale to [0, 1] or custom range | When bounded output is needed |

mod columns;
pub mod minmax;
pub mod standard;

pub use minmax::{FittedMinMaxScaler, MinMaxScaler, MinMaxScalerConfig, MinMaxScalerParams};
pub use standard::{
    FittedStandardScaler, StandardScaler, StandardScalerConfig, StandardScalerParams,
};
