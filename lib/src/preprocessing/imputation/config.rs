//! JSON configuration for [`SimpleImputer`].
//!
//! ```json
//! { "strategy": "constant", "fill_value": "unknown", "missing_values": "?", "add_indicator": true }
//! ```
//!
//! `missing_values` accepts a string token, a number, `"NaN"`, or `null`
//! (only the canonical missing marker).

use super::simple::{ImputeStrategy, SimpleImputer};
use crate::preprocessing::error::PreprocessingError;
use crate::table::{Sentinel, Value};
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_strategy() -> String {
    "mean".to_string()
}

/// Declarative imputer settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImputerConfig {
    /// One of `mean`, `median`, `most_frequent`, `constant`.
    #[serde(default = "default_strategy")]
    pub strategy: String,
    /// Fill value for the constant strategy.
    #[serde(default)]
    pub fill_value: Option<serde_json::Value>,
    /// Source-specific missing marker.
    #[serde(default)]
    pub missing_values: Option<serde_json::Value>,
    #[serde(default)]
    pub add_indicator: bool,
}

impl Default for ImputerConfig {
    fn default() -> Self {
        Self {
            strategy: default_strategy(),
            fill_value: None,
            missing_values: None,
            add_indicator: false,
        }
    }
}

impl ImputerConfig {
    pub fn from_json_str(text: &str) -> Result<Self, PreprocessingError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PreprocessingError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Resolve the configured sentinel.
    pub fn sentinel(&self) -> Result<Sentinel, PreprocessingError> {
        match &self.missing_values {
            None | Some(serde_json::Value::Null) => Ok(Sentinel::Missing),
            Some(serde_json::Value::String(s)) if s.eq_ignore_ascii_case("nan") => Ok(Sentinel::Nan),
            Some(serde_json::Value::String(s)) => Ok(Sentinel::Text(s.clone())),
            Some(serde_json::Value::Number(n)) => n
                .as_f64()
                .map(Sentinel::Number)
                .ok_or_else(|| PreprocessingError::InvalidParameter(format!("bad sentinel {}", n))),
            Some(other) => Err(PreprocessingError::InvalidParameter(format!(
                "missing_values must be a string, number or null, got {}",
                other
            ))),
        }
    }

    fn fill_value(&self) -> Result<Option<Value>, PreprocessingError> {
        match &self.fill_value {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(serde_json::Value::String(s)) => Ok(Some(Value::Text(s.clone()))),
            Some(serde_json::Value::Bool(b)) => Ok(Some(Value::Bool(*b))),
            Some(serde_json::Value::Number(n)) => n.as_f64().map(|x| Some(Value::Number(x))).ok_or_else(
                || PreprocessingError::InvalidStrategy(format!("bad fill value {}", n)),
            ),
            Some(other) => Err(PreprocessingError::InvalidStrategy(format!(
                "fill_value must be a string, number or bool, got {}",
                other
            ))),
        }
    }

    /// Build the configured imputer.
    ///
    /// # Errors
    /// [`PreprocessingError::InvalidStrategy`] for an unknown strategy name,
    /// a constant strategy without a usable fill value, or a fill value that
    /// matches `missing_values`.
    pub fn build(&self) -> Result<SimpleImputer, PreprocessingError> {
        let strategy = ImputeStrategy::from_name(&self.strategy, self.fill_value()?)?;
        let sentinel = self.sentinel()?;
        strategy.check_fill(&sentinel)?;
        Ok(SimpleImputer::new(strategy)
            .with_missing_values(sentinel)
            .with_add_indicator(self.add_indicator))
    }
}
