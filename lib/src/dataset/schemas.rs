//! Column layouts of the reference datasets.
//!
//! Both come from the UCI repository without header rows, so the names below
//! are the ones documented alongside the files.

use crate::table::{Column, Schema};

/// Token used for absent values in the processed heart-disease files.
pub const HEART_DISEASE_SENTINEL: &str = "?";

/// `processed.cleveland.data`: 13 attributes plus the `num` diagnosis.
///
/// Coded attributes (`sex`, `cp`, `fbs`, `restecg`, `exang`, `slope`, `thal`,
/// `num`) are categorical; `ca` counts major vessels and stays numeric.
pub fn heart_disease() -> Schema {
    let columns = vec![
        Column::numeric("age"),
        Column::categorical("sex"),
        Column::categorical("cp"),
        Column::numeric("trestbps"),
        Column::numeric("chol"),
        Column::categorical("fbs"),
        Column::categorical("restecg"),
        Column::numeric("thalach"),
        Column::categorical("exang"),
        Column::numeric("oldpeak"),
        Column::categorical("slope"),
        Column::numeric("ca"),
        Column::categorical("thal"),
        Column::categorical("num"),
    ];
    Schema::from_known(columns)
}

/// `abalone.data`: sex (M, F, I) followed by seven measurements and the ring count.
pub fn abalone() -> Schema {
    let columns = vec![
        Column::categorical("sex"),
        Column::numeric("length"),
        Column::numeric("diameter"),
        Column::numeric("height"),
        Column::numeric("whole_weight"),
        Column::numeric("shucked_weight"),
        Column::numeric("viscera_weight"),
        Column::numeric("shell_weight"),
        Column::numeric("rings"),
    ];
    Schema::from_known(columns)
}
