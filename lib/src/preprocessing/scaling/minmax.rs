//! Min-Max Scaler.
//!
//! Transforms numeric columns by scaling each to a given range, `[0, 1]` by
//! default:
//! ```text
//! X_scaled = (X - X_min) * scale + min,   scale = (max - min) / (X_max - X_min)
//! ```
//! Categorical and boolean columns pass through.

use super::columns::{column_values, map_columns, numeric_columns};
use crate::preprocessing::error::PreprocessingError;
use crate::preprocessing::traits::{FittedTransformer, Transformer};
use crate::table::Table;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Configuration for MinMaxScaler.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MinMaxScalerConfig {
    /// Minimum value of the target range.
    pub min: f64,
    /// Maximum value of the target range.
    pub max: f64,
}

impl Default for MinMaxScalerConfig {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

/// Serializable parameters for a fitted MinMaxScaler.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MinMaxScalerParams {
    /// Configuration options.
    pub config: MinMaxScalerConfig,
    /// Numeric columns scaled, in fit schema order.
    pub columns: Vec<String>,
    /// Minimum of each column.
    pub min_: Vec<f64>,
    /// Maximum of each column.
    pub max_: Vec<f64>,
    /// Scale factor for each column: (max - min) / (column_max - column_min).
    pub scale_: Vec<f64>,
}

/// MinMaxScaler transformer (unfitted).
#[derive(Clone, Debug, Default)]
pub struct MinMaxScaler {
    config: MinMaxScalerConfig,
}

impl MinMaxScaler {
    /// Create a new MinMaxScaler with default range [0, 1].
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target range.
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.config.min = min;
        self.config.max = max;
        self
    }
}

impl Transformer for MinMaxScaler {
    type Input = Table;
    type Output = Table;
    type Params = MinMaxScalerParams;
    type Fitted = FittedMinMaxScaler;

    fn fit(&self, data: &Table) -> Result<FittedMinMaxScaler, PreprocessingError> {
        if self.config.min >= self.config.max {
            return Err(PreprocessingError::InvalidParameter(format!(
                "MinMaxScaler range min ({}) must be below max ({})",
                self.config.min, self.config.max
            )));
        }
        if data.is_empty() {
            return Err(PreprocessingError::EmptyData(
                "Cannot fit MinMaxScaler on empty data".to_string(),
            ));
        }

        let columns = numeric_columns(data);
        let target_range = self.config.max - self.config.min;
        let mut min_ = Vec::with_capacity(columns.len());
        let mut max_ = Vec::with_capacity(columns.len());
        let mut scale_ = Vec::with_capacity(columns.len());

        for name in &columns {
            let values = column_values(data, name)?;
            let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let range = hi - lo;
            min_.push(lo);
            max_.push(hi);
            scale_.push(if range == 0.0 { 1.0 } else { target_range / range });
        }

        info!(columns = columns.len(), rows = data.n_rows(), "fitted MinMaxScaler");

        Ok(FittedMinMaxScaler {
            config: self.config.clone(),
            columns,
            min_,
            max_,
            scale_,
        })
    }
}

/// Fitted MinMaxScaler ready for inference.
#[derive(Clone, Debug)]
pub struct FittedMinMaxScaler {
    config: MinMaxScalerConfig,
    columns: Vec<String>,
    min_: Vec<f64>,
    max_: Vec<f64>,
    scale_: Vec<f64>,
}

impl FittedMinMaxScaler {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Get the minimum values for each column.
    pub fn min(&self) -> &[f64] {
        &self.min_
    }

    /// Get the scale factor for each column.
    pub fn scale(&self) -> &[f64] {
        &self.scale_
    }

    /// Get the data range (max - min) for each column.
    pub fn data_range(&self) -> Vec<f64> {
        self.max_
            .iter()
            .zip(&self.min_)
            .map(|(hi, lo)| hi - lo)
            .collect()
    }
}

impl FittedTransformer for FittedMinMaxScaler {
    type Input = Table;
    type Output = Table;
    type Params = MinMaxScalerParams;

    fn transform(&self, data: &Table) -> Result<Table, PreprocessingError> {
        map_columns(data, &self.columns, |k, x| {
            (x - self.min_[k]) * self.scale_[k] + self.config.min
        })
    }

    fn inverse_transform(&self, data: &Table) -> Result<Table, PreprocessingError> {
        map_columns(data, &self.columns, |k, x| {
            (x - self.config.min) / self.scale_[k] + self.min_[k]
        })
    }

    fn extract_params(&self) -> MinMaxScalerParams {
        MinMaxScalerParams {
            config: self.config.clone(),
            columns: self.columns.clone(),
            min_: self.min_.clone(),
            max_: self.max_.clone(),
            scale_: self.scale_.clone(),
        }
    }

    fn from_params(params: MinMaxScalerParams) -> Result<Self, PreprocessingError> {
        let n = params.columns.len();
        if params.min_.len() != n || params.max_.len() != n || params.scale_.len() != n {
            return Err(PreprocessingError::InvalidParameter(format!(
                "expected {} min/max/scale entries",
                n
            )));
        }
        Ok(Self {
            config: params.config,
            columns: params.columns,
            min_: params.min_,
            max_: params.max_,
            scale_: params.scale_,
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
        let schema = Schema::new(vec![
            Column::numeric("length"),
            Column::categorical("sex"),
            Column::numeric("rings"),
        ])
        .unwrap();
        Table::new(
            schema,
            vec![
                vec![0.2.into(), "M".into(), 4.0.into()],
                vec![0.4.into(), "F".into(), 8.0.into()],
                vec![0.6.into(), "I".into(), 12.0.into()],
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
    fn test_minmax_scaler_transform() {
        let data = create_test_data();
        let out = MinMaxScaler::new().fit_transform(&data).unwrap();

        for name in ["length", "rings"] {
            let values = numbers(&out, name);
            assert!((values[0] - 0.0).abs() < 1e-12);
            assert!((values[1] - 0.5).abs() < 1e-12);
            assert!((values[2] - 1.0).abs() < 1e-12);
        }
        assert_eq!(out.value(1, "sex"), Some(&Value::text("F")));
    }

    #[test]
    fn test_minmax_scaler_custom_range() {
        let data = create_test_data();
        let out = MinMaxScaler::new()
            .with_range(-1.0, 1.0)
            .fit_transform(&data)
            .unwrap();
        let rings = numbers(&out, "rings");
        assert!((rings[0] + 1.0).abs() < 1e-12);
        assert!(rings[1].abs() < 1e-12);
        assert!((rings[2] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_minmax_scaler_inverse_transform() {
        let data = create_test_data();
        let fitted = MinMaxScaler::new().fit(&data).unwrap();
        let recovered = fitted
            .inverse_transform(&fitted.transform(&data).unwrap())
            .unwrap();
        for (o, r) in numbers(&data, "rings").iter().zip(numbers(&recovered, "rings")) {
            assert!((o - r).abs() < 1e-10);
        }
    }

    #[test]
    fn test_minmax_scaler_data_range() {
        let fitted = MinMaxScaler::new().fit(&create_test_data()).unwrap();
        let range = fitted.data_range();
        assert!((range[0] - 0.4).abs() < 1e-12);
        assert!((range[1] - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_minmax_scaler_zero_range() {
        let schema = Schema::new(vec![Column::numeric("x")]).unwrap();
        let data = Table::new(schema, vec![vec![3.0.into()], vec![3.0.into()]]).unwrap();
        let fitted = MinMaxScaler::new().fit(&data).unwrap();
        assert_eq!(fitted.scale(), &[1.0]);
        assert_eq!(fitted.transform(&data).unwrap().value(0, "x"), Some(&Value::Number(0.0)));
    }

    #[test]
    fn test_minmax_scaler_invalid_range() {
        let result = MinMaxScaler::new()
            .with_range(1.0, 1.0)
            .fit(&create_test_data());
        assert!(matches!(result, Err(PreprocessingError::InvalidParameter(_))));
    }

    #[test]
    fn test_minmax_scaler_serialization() {
        let data = create_test_data();
        let fitted = MinMaxScaler::new().fit(&data).unwrap();
        let restored = FittedMinMaxScaler::from_params(fitted.extract_params()).unwrap();
        assert_eq!(
            restored.transform(&data).unwrap(),
            fitted.transform(&data).unwrap()
        );
        assert_eq!(restored.n_features_in(), 2);
    }
}
