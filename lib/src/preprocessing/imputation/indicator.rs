//! Missing indicator.
//!
//! Records which columns had missing cells in the reference table and emits
//! one boolean column per such column, `true` where the source cell was
//! missing. [`SimpleImputer`](super::SimpleImputer) uses the same fitted
//! state for its `add_indicator` option.

use crate::preprocessing::error::PreprocessingError;
use crate::preprocessing::traits::{FittedTransformer, Transformer};
use crate::table::{Column, Schema, Sentinel, Table, Value};
use serde::{Deserialize, Serialize};

/// Suffix appended to a column name to form its indicator column name.
pub const INDICATOR_SUFFIX: &str = "_missing";

/// Serializable parameters for a fitted MissingIndicator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MissingIndicatorParams {
    /// Marker treated as missing besides `Value::Missing`.
    pub missing_values: Sentinel,
    /// Columns that had at least one missing cell at fit time, in schema order.
    pub features: Vec<String>,
    /// Number of columns seen during fit.
    pub n_features: usize,
}

/// MissingIndicator transformer (unfitted).
#[derive(Clone, Debug, Default)]
pub struct MissingIndicator {
    missing_values: Sentinel,
}

impl MissingIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source-specific missing marker.
    pub fn with_missing_values(mut self, sentinel: Sentinel) -> Self {
        self.missing_values = sentinel;
        self
    }
}

impl Transformer for MissingIndicator {
    type Input = Table;
    type Output = Table;
    type Params = MissingIndicatorParams;
    type Fitted = FittedMissingIndicator;

    fn fit(&self, data: &Table) -> Result<FittedMissingIndicator, PreprocessingError> {
        let features = data
            .count_missing(&self.missing_values)
            .into_iter()
            .filter(|(_, n)| *n > 0)
            .map(|(name, _)| name)
            .collect();

        Ok(FittedMissingIndicator {
            missing_values: self.missing_values.clone(),
            features,
            n_features: data.n_columns(),
        })
    }
}

/// Fitted MissingIndicator.
#[derive(Clone, Debug)]
pub struct FittedMissingIndicator {
    missing_values: Sentinel,
    features: Vec<String>,
    n_features: usize,
}

impl FittedMissingIndicator {
    /// Columns that get an indicator, in fit-time discovery order.
    pub fn features(&self) -> &[String] {
        &self.features
    }

    /// Indicator column declarations whose names don't collide with `taken`.
    pub(crate) fn indicator_columns(&self, taken: &Schema) -> Vec<Column> {
        let mut columns: Vec<Column> = Vec::with_capacity(self.features.len());
        for feature in &self.features {
            let mut name = format!("{}{}", feature, INDICATOR_SUFFIX);
            while taken.contains(&name) || columns.iter().any(|c| c.name == name) {
                name.push('_');
            }
            columns.push(Column::boolean(name));
        }
        columns
    }

    /// Per-row flags for every indicator feature: `masks[row][k]` is true
    /// iff `features[k]` was missing in that row.
    pub(crate) fn masks(&self, data: &Table) -> Result<Vec<Vec<bool>>, PreprocessingError> {
        let mut indices = Vec::with_capacity(self.features.len());
        for feature in &self.features {
            let idx = data.schema().index_of(feature).ok_or_else(|| {
                PreprocessingError::SchemaMismatch(format!(
                    "column '{}' seen at fit time is missing",
                    feature
                ))
            })?;
            indices.push(idx);
        }

        Ok(data
            .rows()
            .iter()
            .map(|row| {
                indices
                    .iter()
                    .map(|&idx| self.missing_values.matches(&row[idx]))
                    .collect()
            })
            .collect())
    }
}

impl FittedTransformer for FittedMissingIndicator {
    type Input = Table;
    type Output = Table;
    type Params = MissingIndicatorParams;

    /// Emit only the indicator columns for `data`.
    fn transform(&self, data: &Table) -> Result<Table, PreprocessingError> {
        let masks = self.masks(data)?;
        let schema = Schema::new(self.indicator_columns(data.schema()))?;
        let rows = masks
            .into_iter()
            .map(|flags| flags.into_iter().map(Value::Bool).collect())
            .collect();
        Ok(Table::new(schema, rows)?)
    }

    fn inverse_transform(&self, _data: &Table) -> Result<Table, PreprocessingError> {
        Err(PreprocessingError::InvalidParameter(
            "MissingIndicator does not support inverse_transform".to_string(),
        ))
    }

    fn extract_params(&self) -> MissingIndicatorParams {
        MissingIndicatorParams {
            missing_values: self.missing_values.clone(),
            features: self.features.clone(),
            n_features: self.n_features,
        }
    }

    fn from_params(params: MissingIndicatorParams) -> Result<Self, PreprocessingError> {
        Ok(Self {
            missing_values: params.missing_values,
            features: params.features,
            n_features: params.n_features,
        })
    }

    fn n_features_in(&self) -> usize {
        self.n_features
    }
}
