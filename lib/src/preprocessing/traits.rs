//! Core traits for preprocessing transformers.
//!
//! This module defines the two central traits:
//! - [`Transformer`]: Used during fitting; has hyperparameters and learns from a table.
//! - [`FittedTransformer`]: After fitting; immutable, reusable and serializable.

use crate::preprocessing::error::PreprocessingError;
use crate::serialization::SerializableParams;

/// Trait for unfitted transformers with hyperparameters.
///
/// A transformer learns per-column parameters from a reference table and can
/// then transform any table sharing that table's schema.
///
/// # Example
/// ```ignore
/// use tabular_impute::preprocessing::{ImputeStrategy, SimpleImputer, Transformer};
///
/// let imputer = SimpleImputer::new(ImputeStrategy::Median);
/// let fitted = imputer.fit(&train)?;
/// let filled = fitted.transform(&test)?;
/// ```
pub trait Transformer: Clone {
    /// Input data type for transformation.
    type Input;
    /// Output data type after transformation.
    type Output;
    /// Serializable representation of learned parameters.
    type Params: SerializableParams;
    /// The fitted transformer type ready for inference.
    type Fitted: FittedTransformer<Params = Self::Params, Input = Self::Input, Output = Self::Output>;

    /// Fit the transformer to the reference data.
    ///
    /// # Errors
    /// Returns [`PreprocessingError`] if a statistic cannot be computed for
    /// some column, or the configuration does not apply to the data.
    fn fit(&self, data: &Self::Input) -> Result<Self::Fitted, PreprocessingError>;

    /// Fit the transformer and transform the same data in one step.
    fn fit_transform(&self, data: &Self::Input) -> Result<Self::Output, PreprocessingError> {
        self.fit(data)?.transform(data)
    }
}

/// Trait for fitted transformers ready for inference.
///
/// Fitted transformers are never mutated by `transform`, so one instance can
/// be shared read-only between callers.
///
/// # Guarantees
/// - `extract_params()` + `from_params()` is a round-trip.
pub trait FittedTransformer: Clone {
    /// Input data type for transformation.
    type Input;
    /// Output data type after transformation.
    type Output;
    /// Serializable representation of learned parameters.
    type Params: SerializableParams;

    /// Transform data using learned parameters.
    ///
    /// # Errors
    /// Returns [`PreprocessingError`] if the input schema doesn't match the
    /// one seen at fit time.
    fn transform(&self, data: &Self::Input) -> Result<Self::Output, PreprocessingError>;

    /// Reverse the transformation (if supported).
    ///
    /// Imputation cannot be inverted; scalers can.
    fn inverse_transform(&self, data: &Self::Output) -> Result<Self::Input, PreprocessingError>;

    /// Extract learned parameters as a serializable representation.
    fn extract_params(&self) -> Self::Params;

    /// Reconstruct a fitted transformer from parameters.
    fn from_params(params: Self::Params) -> Result<Self, PreprocessingError>
    where
        Self: Sized;

    /// Save the fitted transformer to a file.
    fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), PreprocessingError> {
        let params = self.extract_params();
        let bytes = params
            .to_bytes()
            .map_err(|e| PreprocessingError::SerializationError(e.to_string()))?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Load a fitted transformer from a file.
    fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, PreprocessingError>
    where
        Self: Sized,
    {
        let bytes = std::fs::read(path)?;
        let params = Self::Params::from_bytes(&bytes)
            .map_err(|e| PreprocessingError::SerializationError(e.to_string()))?;
        Self::from_params(params)
    }

    /// Returns the number of columns seen during fit.
    fn n_features_in(&self) -> usize;
}
