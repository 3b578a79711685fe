//! Numeric column access shared by the scalers.

use crate::preprocessing::error::PreprocessingError;
use crate::table::{ColumnKind, Table, Value};

/// Names of the columns declared numeric, in schema order.
pub(crate) fn numeric_columns(data: &Table) -> Vec<String> {
    data.columns_of_kind(ColumnKind::Numeric)
        .into_iter()
        .map(|c| c.name.clone())
        .collect()
}

fn number_at(value: &Value, column: &str, row: usize) -> Result<f64, PreprocessingError> {
    match value {
        Value::Number(x) if !x.is_nan() => Ok(*x),
        Value::Number(_) | Value::Missing => Err(PreprocessingError::MissingValues(format!(
            "column '{}' row {} (impute before scaling)",
            column, row
        ))),
        other => Err(PreprocessingError::InvalidParameter(format!(
            "column '{}' row {} holds {} value '{}'",
            column,
            row,
            other.type_name(),
            other
        ))),
    }
}

/// Every value of a numeric column; missing or non-numeric cells fail.
pub(crate) fn column_values(data: &Table, name: &str) -> Result<Vec<f64>, PreprocessingError> {
    data.column(name)?
        .enumerate()
        .map(|(row, value)| number_at(value, name, row))
        .collect()
}

/// Copy of `data` with `f(k, x)` applied to every cell of `columns[k]`.
pub(crate) fn map_columns<F>(
    data: &Table,
    columns: &[String],
    f: F,
) -> Result<Table, PreprocessingError>
where
    F: Fn(usize, f64) -> f64,
{
    let mut indices = Vec::with_capacity(columns.len());
    for name in columns {
        let (idx, column) = data
            .schema()
            .columns()
            .iter()
            .enumerate()
            .find(|(_, c)| &c.name == name)
            .ok_or_else(|| {
                PreprocessingError::SchemaMismatch(format!(
                    "column '{}' seen at fit time is missing",
                    name
                ))
            })?;
        if column.kind != ColumnKind::Numeric {
            return Err(PreprocessingError::SchemaMismatch(format!(
                "column '{}' was numeric at fit time, now {}",
                name, column.kind
            )));
        }
        indices.push(idx);
    }

    let mut rows = data.rows().to_vec();
    for (r, row) in rows.iter_mut().enumerate() {
        for (k, &idx) in indices.iter().enumerate() {
            let x = number_at(&row[idx], &columns[k], r)?;
            row[idx] = Value::Number(f(k, x));
        }
    }
    Ok(Table::new(data.schema().clone(), rows)?)
}
