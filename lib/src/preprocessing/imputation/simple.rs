//! Simple Imputer.
//!
//! Imputation transformer for completing missing values.
//! Supports mean, median, most_frequent, and constant strategies.
//!
//! A cell is missing if it is [`Value::Missing`] or matches the configured
//! [`Sentinel`]. Statistics are computed once per column at fit time and
//! reused by every later transform.
//!
//! # Example
//! ```
//! use tabular_impute::preprocessing::{FittedTransformer, ImputeStrategy, SimpleImputer, Transformer};
//! use tabular_impute::table::{Column, Schema, Table, Value};
//!
//! let schema = Schema::new(vec![Column::numeric("x")]).unwrap();
//! let table = Table::new(
//!     schema,
//!     vec![vec![1.0.into()], vec![2.0.into()], vec![Value::Missing], vec![4.0.into()]],
//! )
//! .unwrap();
//!
//! let fitted = SimpleImputer::new(ImputeStrategy::Mean).fit(&table).unwrap();
//! let filled = fitted.transform(&table).unwrap();
//! assert_eq!(filled.value(2, "x"), Some(&Value::Number(7.0 / 3.0)));
//! ```

use super::indicator::{FittedMissingIndicator, MissingIndicator, MissingIndicatorParams};
use crate::preprocessing::error::PreprocessingError;
use crate::preprocessing::traits::{FittedTransformer, Transformer};
use crate::table::{Column, ColumnKind, Sentinel, Table, Value};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

/// Strategy for imputing missing values.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum ImputeStrategy {
    /// Replace missing values with the mean of each numeric column.
    #[default]
    Mean,
    /// Replace missing values with the median of each numeric column.
    Median,
    /// Replace missing values with the most frequent value of each column.
    MostFrequent,
    /// Replace missing values with a constant value, identical for every column.
    Constant(Value),
}

impl ImputeStrategy {
    /// Parse a strategy by name.
    ///
    /// `fill_value` is required by `"constant"` and ignored otherwise.
    ///
    /// # Errors
    /// [`PreprocessingError::InvalidStrategy`] for an unknown name, a
    /// constant strategy without a fill value, or a missing fill value.
    pub fn from_name(name: &str, fill_value: Option<Value>) -> Result<Self, PreprocessingError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "mean" => Ok(ImputeStrategy::Mean),
            "median" => Ok(ImputeStrategy::Median),
            "most_frequent" | "most-frequent" => Ok(ImputeStrategy::MostFrequent),
            "constant" => match fill_value {
                Some(Value::Missing) => Err(PreprocessingError::InvalidStrategy(
                    "constant fill value cannot be missing".to_string(),
                )),
                Some(fill) => Ok(ImputeStrategy::Constant(fill)),
                None => Err(PreprocessingError::InvalidStrategy(
                    "constant strategy requires a fill value".to_string(),
                )),
            },
            other => Err(PreprocessingError::InvalidStrategy(format!(
                "unknown strategy '{}'",
                other
            ))),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ImputeStrategy::Mean => "mean",
            ImputeStrategy::Median => "median",
            ImputeStrategy::MostFrequent => "most_frequent",
            ImputeStrategy::Constant(_) => "constant",
        }
    }

    /// Mean and median only make sense on numeric columns.
    pub fn requires_numeric(&self) -> bool {
        matches!(self, ImputeStrategy::Mean | ImputeStrategy::Median)
    }

    fn check_kind(&self, column: &Column) -> Result<(), PreprocessingError> {
        if self.requires_numeric() && column.kind != ColumnKind::Numeric {
            return Err(PreprocessingError::StrategyKindMismatch {
                column: column.name.clone(),
                kind: column.kind.to_string(),
                strategy: self.name().to_string(),
            });
        }
        Ok(())
    }

    /// Reject a constant fill that would itself count as missing under `sentinel`.
    ///
    /// # Errors
    /// [`PreprocessingError::InvalidStrategy`] if the fill matches the sentinel.
    pub fn check_fill(&self, sentinel: &Sentinel) -> Result<(), PreprocessingError> {
        if let ImputeStrategy::Constant(fill) = self {
            if sentinel.matches(fill) {
                return Err(PreprocessingError::InvalidStrategy(format!(
                    "constant fill value {} matches the missing marker {}",
                    fill, sentinel
                )));
            }
        }
        Ok(())
    }
}

impl FromStr for ImputeStrategy {
    type Err = PreprocessingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ImputeStrategy::from_name(s, None)
    }
}

impl fmt::Display for ImputeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImputeStrategy::Constant(fill) => write!(f, "constant({})", fill),
            other => f.write_str(other.name()),
        }
    }
}

/// Fill value learned for one column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColumnStatistic {
    /// Column name.
    pub name: String,
    /// Kind of the column at fit time.
    pub kind: ColumnKind,
    /// Value that replaces missing cells.
    pub fill: Value,
}

/// Serializable parameters for a fitted SimpleImputer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimpleImputerParams {
    /// Strategy used for imputation.
    pub strategy: ImputeStrategy,
    /// Marker treated as missing besides `Value::Missing`.
    pub missing_values: Sentinel,
    /// Whether transform appends indicator columns.
    pub add_indicator: bool,
    /// Fill value for each column, in fit schema order.
    pub statistics: Vec<ColumnStatistic>,
    /// Columns with at least one missing cell at fit time.
    pub indicator_features: Vec<String>,
}

/// SimpleImputer transformer (unfitted).
///
/// Imputation transformer for completing missing values.
#[derive(Clone, Debug, Default)]
pub struct SimpleImputer {
    strategy: ImputeStrategy,
    missing_values: Sentinel,
    add_indicator: bool,
}

impl SimpleImputer {
    /// Create a new SimpleImputer with the specified strategy.
    pub fn new(strategy: ImputeStrategy) -> Self {
        Self {
            strategy,
            missing_values: Sentinel::default(),
            add_indicator: false,
        }
    }

    /// Set the source-specific missing marker.
    pub fn with_missing_values(mut self, sentinel: Sentinel) -> Self {
        self.missing_values = sentinel;
        self
    }

    /// Append a boolean indicator column per column that had missing values at fit time.
    pub fn with_add_indicator(mut self, add_indicator: bool) -> Self {
        self.add_indicator = add_indicator;
        self
    }

    pub fn strategy(&self) -> &ImputeStrategy {
        &self.strategy
    }
}

/// Hashable identity of a cell for frequency counting.
#[derive(PartialEq, Eq, Hash)]
enum FrequencyKey<'a> {
    Number(u64),
    Text(&'a str),
    Bool(bool),
}

impl<'a> FrequencyKey<'a> {
    fn of(value: &'a Value) -> Option<Self> {
        match value {
            // -0.0 and 0.0 count as the same value
            Value::Number(x) if *x == 0.0 => Some(FrequencyKey::Number(0.0f64.to_bits())),
            Value::Number(x) => Some(FrequencyKey::Number(x.to_bits())),
            Value::Text(s) => Some(FrequencyKey::Text(s)),
            Value::Bool(b) => Some(FrequencyKey::Bool(*b)),
            Value::Missing => None,
        }
    }
}

/// Most frequent value; ties go to the value encountered first.
fn most_frequent<'a>(observed: &[&'a Value]) -> Option<&'a Value> {
    let mut slots: HashMap<FrequencyKey<'a>, usize> = HashMap::new();
    let mut counts: Vec<(&'a Value, usize)> = Vec::new();

    for &value in observed {
        let Some(key) = FrequencyKey::of(value) else {
            continue;
        };
        match slots.get(&key) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(key, counts.len());
                counts.push((value, 1));
            }
        }
    }

    let mut best: Option<(&'a Value, usize)> = None;
    for (value, count) in counts {
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

/// Numeric payloads of the observed cells of a column.
fn observed_numbers(
    column: &Column,
    observed: &[&Value],
    strategy: &ImputeStrategy,
) -> Result<Vec<f64>, PreprocessingError> {
    if observed.is_empty() {
        return Err(PreprocessingError::EmptyColumn(column.name.clone()));
    }
    observed
        .iter()
        .map(|value| {
            value.as_f64().ok_or_else(|| {
                PreprocessingError::InvalidStrategy(format!(
                    "{} requires numbers, column '{}' holds {} value '{}'",
                    strategy.name(),
                    column.name,
                    value.type_name(),
                    value
                ))
            })
        })
        .collect()
}

/// Compute the fill value for one column, ignoring missing cells.
fn compute_statistic<'a>(
    column: &Column,
    values: impl Iterator<Item = &'a Value>,
    strategy: &ImputeStrategy,
    sentinel: &Sentinel,
) -> Result<Value, PreprocessingError> {
    strategy.check_kind(column)?;

    let observed: Vec<&Value> = values.filter(|v| !sentinel.matches(v)).collect();

    let fill = match strategy {
        ImputeStrategy::Mean => {
            let numbers = observed_numbers(column, &observed, strategy)?;
            Value::Number(numbers.iter().sum::<f64>() / numbers.len() as f64)
        }
        ImputeStrategy::Median => {
            let mut sorted = observed_numbers(column, &observed, strategy)?;
            sorted.sort_by(f64::total_cmp);
            let n = sorted.len();
            if n % 2 == 0 {
                Value::Number((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
            } else {
                Value::Number(sorted[n / 2])
            }
        }
        ImputeStrategy::MostFrequent => most_frequent(&observed)
            .cloned()
            .ok_or_else(|| PreprocessingError::EmptyColumn(column.name.clone()))?,
        ImputeStrategy::Constant(fill) => fill.clone(),
    };

    Ok(fill)
}

impl Transformer for SimpleImputer {
    type Input = Table;
    type Output = Table;
    type Params = SimpleImputerParams;
    type Fitted = FittedSimpleImputer;

    fn fit(&self, data: &Table) -> Result<FittedSimpleImputer, PreprocessingError> {
        self.strategy.check_fill(&self.missing_values)?;

        let mut statistics = Vec::with_capacity(data.n_columns());
        for column in data.schema().columns() {
            let fill = compute_statistic(
                column,
                data.column(&column.name)?,
                &self.strategy,
                &self.missing_values,
            )?;
            debug!(column = %column.name, fill = %fill, "computed fill value");
            statistics.push(ColumnStatistic {
                name: column.name.clone(),
                kind: column.kind,
                fill,
            });
        }

        let indicator = MissingIndicator::new()
            .with_missing_values(self.missing_values.clone())
            .fit(data)?;

        info!(
            strategy = %self.strategy,
            rows = data.n_rows(),
            columns = statistics.len(),
            with_missing = indicator.features().len(),
            "fitted SimpleImputer"
        );

        Ok(FittedSimpleImputer {
            strategy: self.strategy.clone(),
            missing_values: self.missing_values.clone(),
            add_indicator: self.add_indicator,
            statistics,
            indicator,
        })
    }
}

/// Fitted SimpleImputer ready for inference.
#[derive(Clone, Debug)]
pub struct FittedSimpleImputer {
    strategy: ImputeStrategy,
    missing_values: Sentinel,
    add_indicator: bool,
    statistics: Vec<ColumnStatistic>,
    indicator: FittedMissingIndicator,
}

impl FittedSimpleImputer {
    /// Fill values for each column, in fit schema order.
    pub fn statistics(&self) -> &[ColumnStatistic] {
        &self.statistics
    }

    /// Fill value for the named column.
    pub fn statistic(&self, name: &str) -> Option<&Value> {
        self.statistics
            .iter()
            .find(|s| s.name == name)
            .map(|s| &s.fill)
    }

    /// Columns that get an indicator when `add_indicator` is set.
    pub fn indicator_features(&self) -> &[String] {
        self.indicator.features()
    }

    pub fn strategy(&self) -> &ImputeStrategy {
        &self.strategy
    }

    pub fn missing_values(&self) -> &Sentinel {
        &self.missing_values
    }

    pub fn add_indicator(&self) -> bool {
        self.add_indicator
    }

    /// Transform, overriding the indicator flag stored at construction.
    ///
    /// Output columns are the input columns in input order, followed by the
    /// indicator columns (when requested) in fit-time discovery order.
    pub fn transform_with_indicator(
        &self,
        data: &Table,
        add_indicator: bool,
    ) -> Result<Table, PreprocessingError> {
        let mut fills = Vec::with_capacity(data.n_columns());
        for column in data.schema().columns() {
            self.strategy.check_kind(column)?;
            let stat = self
                .statistics
                .iter()
                .find(|s| s.name == column.name)
                .ok_or_else(|| {
                    PreprocessingError::SchemaMismatch(format!(
                        "column '{}' was not seen at fit time",
                        column.name
                    ))
                })?;
            if stat.kind != column.kind {
                return Err(PreprocessingError::SchemaMismatch(format!(
                    "column '{}' was {} at fit time, got {}",
                    column.name, stat.kind, column.kind
                )));
            }
            fills.push(&stat.fill);
        }
        for stat in &self.statistics {
            if !data.schema().contains(&stat.name) {
                return Err(PreprocessingError::SchemaMismatch(format!(
                    "column '{}' seen at fit time is missing",
                    stat.name
                )));
            }
        }

        let masks = if add_indicator {
            Some(self.indicator.masks(data)?)
        } else {
            None
        };

        let mut schema = data.schema().clone();
        if add_indicator {
            for column in self.indicator.indicator_columns(data.schema()) {
                schema.push(column)?;
            }
        }

        let mut filled_cells = 0usize;
        let mut rows = Vec::with_capacity(data.n_rows());
        for (i, row) in data.rows().iter().enumerate() {
            let mut out = Vec::with_capacity(schema.len());
            for (value, fill) in row.iter().zip(&fills) {
                if self.missing_values.matches(value) {
                    filled_cells += 1;
                    out.push((*fill).clone());
                } else {
                    out.push(value.clone());
                }
            }
            if let Some(masks) = &masks {
                out.extend(masks[i].iter().map(|&flag| Value::Bool(flag)));
            }
            rows.push(out);
        }

        debug!(
            rows = data.n_rows(),
            filled_cells,
            add_indicator,
            "transformed table with SimpleImputer"
        );

        Ok(Table::new(schema, rows)?)
    }
}

impl FittedTransformer for FittedSimpleImputer {
    type Input = Table;
    type Output = Table;
    type Params = SimpleImputerParams;

    fn transform(&self, data: &Table) -> Result<Table, PreprocessingError> {
        self.transform_with_indicator(data, self.add_indicator)
    }

    fn inverse_transform(&self, _data: &Table) -> Result<Table, PreprocessingError> {
        Err(PreprocessingError::InvalidParameter(
            "SimpleImputer does not support inverse_transform (missing value information is lost)"
                .to_string(),
        ))
    }

    fn extract_params(&self) -> SimpleImputerParams {
        SimpleImputerParams {
            strategy: self.strategy.clone(),
            missing_values: self.missing_values.clone(),
            add_indicator: self.add_indicator,
            statistics: self.statistics.clone(),
            indicator_features: self.indicator.features().to_vec(),
        }
    }

    fn from_params(params: SimpleImputerParams) -> Result<Self, PreprocessingError> {
        params
            .strategy
            .check_fill(&params.missing_values)
            .map_err(|e| PreprocessingError::InvalidParameter(e.to_string()))?;
        for (i, stat) in params.statistics.iter().enumerate() {
            if params.missing_values.matches(&stat.fill) {
                return Err(PreprocessingError::InvalidParameter(format!(
                    "fill value for column '{}' counts as missing",
                    stat.name
                )));
            }
            if params.statistics[..i].iter().any(|s| s.name == stat.name) {
                return Err(PreprocessingError::InvalidParameter(format!(
                    "duplicate statistic for column '{}'",
                    stat.name
                )));
            }
        }
        for feature in &params.indicator_features {
            if !params.statistics.iter().any(|s| &s.name == feature) {
                return Err(PreprocessingError::InvalidParameter(format!(
                    "indicator column '{}' has no fitted statistic",
                    feature
                )));
            }
        }

        let indicator = FittedMissingIndicator::from_params(MissingIndicatorParams {
            missing_values: params.missing_values.clone(),
            features: params.indicator_features,
            n_features: params.statistics.len(),
        })?;

        Ok(Self {
            strategy: params.strategy,
            missing_values: params.missing_values,
            add_indicator: params.add_indicator,
            statistics: params.statistics,
            indicator,
        })
    }

    fn n_features_in(&self) -> usize {
        self.statistics.len()
    }
}
