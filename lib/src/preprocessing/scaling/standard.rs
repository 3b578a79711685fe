//! Standard Scaler (Z-score normalization).
//!
//! Transforms numeric columns by removing the mean and scaling to unit variance.
//!
//! The standard score of a sample `x` is calculated as:
//! ```text
//! z = (x - u) / s
//! ```
//! where `u` is the mean of the training samples, and `s` is the population
//! standard deviation. Categorical and boolean columns pass through.
//!
//! # Example
//! ```ignore
//! use tabular_impute::preprocessing::{StandardScaler, Transformer, FittedTransformer};
//!
//! let scaler = StandardScaler::new().with_mean(true).with_std(true);
//! let fitted = scaler.fit(&imputed)?;
//! let scaled = fitted.transform(&imputed)?;
//! ```

use super::columns::{column_values, map_columns, numeric_columns};
use crate::preprocessing::error::PreprocessingError;
use crate::preprocessing::traits::{FittedTransformer, Transformer};
use crate::table::Table;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Configuration for StandardScaler.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StandardScalerConfig {
    /// If True, center the data before scaling.
    pub with_mean: bool,
    /// If True, scale the data to unit variance.
    pub with_std: bool,
}

impl Default for StandardScalerConfig {
    fn default() -> Self {
        Self {
            with_mean: true,
            with_std: true,
        }
    }
}

/// Serializable parameters for a fitted StandardScaler.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StandardScalerParams {
    /// Configuration options.
    pub config: StandardScalerConfig,
    /// Numeric columns scaled, in fit schema order.
    pub columns: Vec<String>,
    /// Mean of each column (zeros if with_mean=False).
    pub mean: Vec<f64>,
    /// Standard deviation of each column (ones if with_std=False).
    pub std: Vec<f64>,
}

/// StandardScaler transformer (unfitted).
#[derive(Clone, Debug, Default)]
pub struct StandardScaler {
    config: StandardScalerConfig,
}

impl StandardScaler {
    /// Create a new StandardScaler with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to center data by mean.
    pub fn with_mean(mut self, with_mean: bool) -> Self {
        self.config.with_mean = with_mean;
        self
    }

    /// Set whether to scale data to unit variance.
    pub fn with_std(mut self, with_std: bool) -> Self {
        self.config.with_std = with_std;
        self
    }
}

impl Transformer for StandardScaler {
    type Input = Table;
    type Output = Table;
    type Params = StandardScalerParams;
    type Fitted = FittedStandardScaler;

    fn fit(&self, data: &Table) -> Result<FittedStandardScaler, PreprocessingError> {
        if data.is_empty() {
            return Err(PreprocessingError::EmptyData(
                "Cannot fit StandardScaler on empty data".to_string(),
            ));
        }

        let columns = numeric_columns(data);
        let mut mean = Vec::with_capacity(columns.len());
        let mut std = Vec::with_capacity(columns.len());

        for name in &columns {
            let values = column_values(data, name)?;
            let n = values.len() as f64;
            let mu = values.iter().sum::<f64>() / n;

            mean.push(if self.config.with_mean { mu } else { 0.0 });

            let s = if self.config.with_std {
                (values.iter().map(|x| (x - mu).powi(2)).sum::<f64>() / n).sqrt()
            } else {
                1.0
            };
            // Constant columns keep their offset only
            std.push(if s == 0.0 { 1.0 } else { s });
        }

        info!(columns = columns.len(), rows = data.n_rows(), "fitted StandardScaler");

        Ok(FittedStandardScaler {
            config: self.config.clone(),
            columns,
            mean,
            std,
        })
    }
}

/// Fitted StandardScaler ready for inference.
#[derive(Clone, Debug)]
pub struct FittedStandardScaler {
    config: StandardScalerConfig,
    columns: Vec<String>,
    mean: Vec<f64>,
    std: Vec<f64>,
}

impl FittedStandardScaler {
    /// Scaled column names.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Get the mean values for each scaled column.
    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    /// Get the standard deviation values for each scaled column.
    pub fn std(&self) -> &[f64] {
        &self.std
    }
}

impl FittedTransformer for FittedStandardScaler {
    type Input = Table;
    type Output = Table;
    type Params = StandardScalerParams;

    fn transform(&self, data: &Table) -> Result<Table, PreprocessingError> {
        map_columns(data, &self.columns, |k, x| (x - self.mean[k]) / self.std[k])
    }

    fn inverse_transform(&self, data: &Table) -> Result<Table, PreprocessingError> {
        map_columns(data, &self.columns, |k, x| x * self.std[k] + self.mean[k])
    }

    fn extract_params(&self) -> StandardScalerParams {
        StandardScalerParams {
            config: self.config.clone(),
            columns: self.columns.clone(),
            mean: self.mean.clone(),
            std: self.std.clone(),
        }
    }

    fn from_params(params: StandardScalerParams) -> Result<Self, PreprocessingError> {
        let n = params.columns.len();
        if params.mean.len() != n || params.std.len() != n {
            return Err(PreprocessingError::InvalidParameter(format!(
                "expected {} mean/std entries, got {}/{}",
                n,
                params.mean.len(),
                params.std.len()
            )));
        }
        Ok(Self {
            config: params.config,
            columns: params.columns,
            mean: params.mean,
            std: params.std,
        })
    }

    fn n_features_in(&self) -> usize {
        self.columns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Column, Schema, Value};

    fn create_test_data() -> Table {
        // numeric [[0, 1], [0, 1], [1, 3]] plus a categorical column
        let schema = Schema::new(vec![
            Column::numeric("a"),
            Column::numeric("b"),
            Column::categorical("sex"),
        ])
        .unwrap();
        Table::new(
            schema,
            vec![
                vec![0.0.into(), 1.0.into(), "M".into()],
                vec![0.0.into(), 1.0.into(), "F".into()],
                vec![1.0.into(), 3.0.into(), "I".into()],
            ],
        )
        .unwrap()
    }

    fn numbers(table: &Table, name: &str) -> Vec<f64> {
        table
            .column(name)
            .unwrap()
            .map(|v| v.as_f64().unwrap())
            .collect()
    }

    #[test]
    fn test_standard_scaler_fit() {
        let fitted = StandardScaler::new().fit(&create_test_data()).unwrap();

        assert_eq!(fitted.columns(), &["a".to_string(), "b".to_string()]);
        let mean = fitted.mean();
        assert!((mean[0] - 1.0 / 3.0).abs() < 1e-10);
        assert!((mean[1] - 5.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_standard_scaler_transform() {
        let data = create_test_data();
        let transformed = StandardScaler::new().fit_transform(&data).unwrap();

        for name in ["a", "b"] {
            let values = numbers(&transformed, name);
            let n = values.len() as f64;
            let mean = values.iter().sum::<f64>() / n;
            let std = (values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n).sqrt();
            assert!(mean.abs() < 1e-10, "mean of {} = {}", name, mean);
            assert!((std - 1.0).abs() < 1e-8, "std of {} = {}", name, std);
        }
        assert_eq!(transformed.value(2, "sex"), Some(&Value::text("I")));
    }

    #[test]
    fn test_standard_scaler_inverse_transform() {
        let data = create_test_data();
        let fitted = StandardScaler::new().fit(&data).unwrap();
        let recovered = fitted
            .inverse_transform(&fitted.transform(&data).unwrap())
            .unwrap();

        for name in ["a", "b"] {
            for (o, r) in numbers(&data, name).iter().zip(numbers(&recovered, name)) {
                assert!((o - r).abs() < 1e-10);
            }
        }
    }

    #[test]
    fn test_standard_scaler_without_mean_or_std() {
        let data = create_test_data();
        let fitted = StandardScaler::new().with_mean(false).fit(&data).unwrap();
        assert!(fitted.mean().iter().all(|&m| m == 0.0));

        let fitted = StandardScaler::new()
            .with_mean(false)
            .with_std(false)
            .fit(&data)
            .unwrap();
        assert!(fitted.std().iter().all(|&s| s == 1.0));
        assert_eq!(fitted.transform(&data).unwrap(), data);
    }

    #[test]
    fn test_standard_scaler_constant_feature() {
        let schema = Schema::new(vec![Column::numeric("x")]).unwrap();
        let data = Table::new(schema, vec![vec![5.0.into()], vec![5.0.into()]]).unwrap();
        let fitted = StandardScaler::new().fit(&data).unwrap();

        assert!((fitted.std()[0] - 1.0).abs() < 1e-12);
        assert!((fitted.mean()[0] - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_standard_scaler_rejects_missing() {
        let schema = Schema::new(vec![Column::numeric("x")]).unwrap();
        let data = Table::new(schema, vec![vec![1.0.into()], vec![Value::Missing]]).unwrap();
        assert!(matches!(
            StandardScaler::new().fit(&data),
            Err(PreprocessingError::MissingValues(_))
        ));
    }

    #[test]
    fn test_standard_scaler_schema_mismatch() {
        let data = create_test_data();
        let fitted = StandardScaler::new().fit(&data).unwrap();
        let narrower = data.select(&["a", "sex"]).unwrap();
        assert!(matches!(
            fitted.transform(&narrower),
            Err(PreprocessingError::SchemaMismatch(_))
        ));
    }

    #[test]
    fn test_standard_scaler_empty_data() {
        let schema = Schema::new(vec![Column::numeric("x")]).unwrap();
        let data = Table::new(schema, vec![]).unwrap();
        assert!(matches!(
            StandardScaler::new().fit(&data),
            Err(PreprocessingError::EmptyData(_))
        ));
    }

    #[test]
    fn test_standard_scaler_save_load_file() {
        let data = create_test_data();
        let fitted = StandardScaler::new().fit(&data).unwrap();

        let temp_file = std::env::temp_dir().join("tabular_impute_test_standard.bin");
        fitted.save_to_file(&temp_file).unwrap();
        let loaded = FittedStandardScaler::load_from_file(&temp_file).unwrap();

        assert_eq!(loaded.n_features_in(), 2);
        assert_eq!(
            loaded.transform(&data).unwrap(),
            fitted.transform(&data).unwrap()
        );

        std::fs::remove_file(temp_file).ok();
    }
}
