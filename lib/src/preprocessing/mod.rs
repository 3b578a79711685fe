//! Data preprocessing transformers for typed tables.
//!
//! Every transformer follows the same two-phase shape:
//!
//! - [`Transformer`]: unfitted, holds hyperparameters, learns from a reference table.
//! - [`FittedTransformer`]: fitted, immutable, transforms any table with the
//!   same schema and can be saved and loaded.
//!
//! # Available Transformers
//!
//! ## Imputation
//! - [`SimpleImputer`]: Fill missing values with mean, median, most_frequent, or constant
//! - [`MissingIndicator`]: Boolean columns marking where values were missing
//!
//! ## Scaling
//! - [`StandardScaler`]: Z-score normalization
//! - [`MinMaxScaler`]: Scale to [0, 1] or custom range
//!
//! # Example
//!
//! ```ignore
//! use tabular_impute::preprocessing::{FittedTransformer, ImputeStrategy, SimpleImputer, Transformer};
//!
//! let fitted = SimpleImputer::new(ImputeStrategy::Median).fit(&train)?;
//! let train_filled = fitted.transform(&train)?;
//!
//! // Save for later use
//! fitted.save_to_file("imputer.bin")?;
//!
//! // Later, load and transform new data
//! let loaded = FittedSimpleImputer::load_from_file("imputer.bin")?;
//! let test_filled = loaded.transform(&test)?;
//! ```

pub mod error;
pub mod imputation;
pub mod scaling;
pub mod traits;

// Re-export main types
pub use error::PreprocessingError;
pub use imputation::{
    ColumnStatistic, FittedMissingIndicator, FittedSimpleImputer, ImputeStrategy, ImputerConfig,
    MissingIndicator, SimpleImputer, SimpleImputerParams,
};
pub use scaling::{
    FittedMinMaxScaler, FittedStandardScaler, MinMaxScaler, MinMaxScalerConfig,
    MinMaxScalerParams, StandardScaler, StandardScalerConfig, StandardScalerParams,
};
pub use traits::{FittedTransformer, Transformer};
