//! Row-oriented table with a declared schema.

use super::error::TableError;
use super::schema::{Column, ColumnKind, Schema};
use super::value::{Sentinel, Value};
use ndarray::Array2;
use std::collections::HashMap;

/// An immutable table: a schema plus rows holding one value per column.
///
/// Operations that change contents (sentinel normalization, imputation,
/// scaling) return a new table.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    schema: Schema,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Create a table from ordered rows.
    ///
    /// # Errors
    /// [`TableError::RowWidth`] if a row does not match the schema width.
    pub fn new(schema: Schema, rows: Vec<Vec<Value>>) -> Result<Self, TableError> {
        let expected = schema.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(TableError::RowWidth {
                    row: i,
                    expected,
                    got: row.len(),
                });
            }
        }
        Ok(Self { schema, rows })
    }

    /// Create a table from `column name -> value` records.
    ///
    /// Each record must carry exactly the schema's columns.
    pub fn from_records(
        schema: Schema,
        records: Vec<HashMap<String, Value>>,
    ) -> Result<Self, TableError> {
        let mut rows = Vec::with_capacity(records.len());
        for (i, mut record) in records.into_iter().enumerate() {
            let mut row = Vec::with_capacity(schema.len());
            for column in schema.columns() {
                match record.remove(&column.name) {
                    Some(value) => row.push(value),
                    None => {
                        return Err(TableError::MissingField {
                            row: i,
                            column: column.name.clone(),
                        })
                    }
                }
            }
            if let Some(extra) = record.into_keys().next() {
                return Err(TableError::UnknownColumn(extra));
            }
            rows.push(row);
        }
        Ok(Self { schema, rows })
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_columns(&self) -> usize {
        self.schema.len()
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows(), self.n_columns())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over the values of one column, top to bottom.
    pub fn column(&self, name: &str) -> Result<impl Iterator<Item = &Value>, TableError> {
        let idx = self
            .schema
            .index_of(name)
            .ok_or_else(|| TableError::UnknownColumn(name.to_string()))?;
        Ok(self.rows.iter().map(move |row| &row[idx]))
    }

    /// Value at `row` in column `name`, or `None` if out of range.
    pub fn value(&self, row: usize, name: &str) -> Option<&Value> {
        let idx = self.schema.index_of(name)?;
        self.rows.get(row).map(|r| &r[idx])
    }

    /// Replace every cell matching `sentinel` with [`Value::Missing`].
    pub fn normalize_sentinel(&self, sentinel: &Sentinel) -> Table {
        let rows = self
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|v| {
                        if sentinel.matches(v) {
                            Value::Missing
                        } else {
                            v.clone()
                        }
                    })
                    .collect()
            })
            .collect();
        Table {
            schema: self.schema.clone(),
            rows,
        }
    }

    /// Number of missing cells per column, in schema order.
    pub fn count_missing(&self, sentinel: &Sentinel) -> Vec<(String, usize)> {
        self.schema
            .columns()
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let n = self
                    .rows
                    .iter()
                    .filter(|row| sentinel.matches(&row[idx]))
                    .count();
                (column.name.clone(), n)
            })
            .collect()
    }

    /// Keep only the named columns, in the given order.
    pub fn select(&self, names: &[&str]) -> Result<Table, TableError> {
        let mut indices = Vec::with_capacity(names.len());
        let mut columns = Vec::with_capacity(names.len());
        for name in names {
            let idx = self
                .schema
                .index_of(name)
                .ok_or_else(|| TableError::UnknownColumn(name.to_string()))?;
            indices.push(idx);
            columns.push(self.schema.columns()[idx].clone());
        }
        let schema = Schema::new(columns)?;
        let rows = self
            .rows
            .iter()
            .map(|row| indices.iter().map(|&i| row[i].clone()).collect())
            .collect();
        Ok(Table { schema, rows })
    }

    /// Convert to a dense `(rows, columns)` matrix.
    ///
    /// Numbers pass through and booleans become `0.0`/`1.0`. Text and
    /// missing cells cannot be represented and fail.
    pub fn to_array2(&self) -> Result<Array2<f64>, TableError> {
        let (n_rows, n_cols) = self.shape();
        let mut out = Array2::<f64>::zeros((n_rows, n_cols));
        for (i, row) in self.rows.iter().enumerate() {
            for (j, value) in row.iter().enumerate() {
                out[[i, j]] = match value {
                    Value::Number(x) => *x,
                    Value::Bool(b) => f64::from(u8::from(*b)),
                    other => {
                        return Err(TableError::NonNumeric {
                            row: i,
                            column: self.schema.columns()[j].name.clone(),
                            found: other.type_name(),
                        })
                    }
                };
            }
        }
        Ok(out)
    }

    /// Names of the columns declared with `kind`.
    pub fn columns_of_kind(&self, kind: ColumnKind) -> Vec<&Column> {
        self.schema
            .columns()
            .iter()
            .filter(|c| c.kind == kind)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abalone_sample() -> Table {
        let schema = Schema::new(vec![
            Column::categorical("sex"),
            Column::numeric("length"),
            Column::numeric("rings"),
        ])
        .unwrap();
        Table::new(
            schema,
            vec![
                vec![Value::text("M"), Value::Number(0.455), Value::Number(15.0)],
                vec![Value::text("F"), Value::text("?"), Value::Number(7.0)],
                vec![Value::text("?"), Value::Number(0.53), Value::Number(9.0)],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_table_rejects_ragged_rows() {
        let schema = Schema::new(vec![Column::numeric("a"), Column::numeric("b")]).unwrap();
        let result = Table::new(schema, vec![vec![Value::Number(1.0)]]);
        assert_eq!(
            result,
            Err(TableError::RowWidth {
                row: 0,
                expected: 2,
                got: 1
            })
        );
    }

    #[test]
    fn test_from_records_orders_by_schema() {
        let schema = Schema::new(vec![Column::numeric("a"), Column::categorical("b")]).unwrap();
        let mut record = HashMap::new();
        record.insert("b".to_string(), Value::text("x"));
        record.insert("a".to_string(), Value::Number(1.0));
        let table = Table::from_records(schema, vec![record]).unwrap();
        assert_eq!(table.rows()[0], vec![Value::Number(1.0), Value::text("x")]);
    }

    #[test]
    fn test_from_records_missing_and_unknown_fields() {
        let schema = Schema::new(vec![Column::numeric("a"), Column::numeric("b")]).unwrap();

        let mut partial = HashMap::new();
        partial.insert("a".to_string(), Value::Number(1.0));
        let result = Table::from_records(schema.clone(), vec![partial]);
        assert!(matches!(result, Err(TableError::MissingField { row: 0, .. })));

        let mut extra = HashMap::new();
        extra.insert("a".to_string(), Value::Number(1.0));
        extra.insert("b".to_string(), Value::Number(2.0));
        extra.insert("c".to_string(), Value::Number(3.0));
        let result = Table::from_records(schema, vec![extra]);
        assert_eq!(result, Err(TableError::UnknownColumn("c".to_string())));
    }

    #[test]
    fn test_normalize_sentinel() {
        let table = abalone_sample();
        let normalized = table.normalize_sentinel(&Sentinel::Text("?".to_string()));

        assert_eq!(normalized.value(1, "length"), Some(&Value::Missing));
        assert_eq!(normalized.value(2, "sex"), Some(&Value::Missing));
        assert_eq!(normalized.value(0, "sex"), Some(&Value::text("M")));
        // source untouched
        assert_eq!(table.value(1, "length"), Some(&Value::text("?")));
    }

    #[test]
    fn test_count_missing() {
        let table = abalone_sample();
        let counts = table.count_missing(&Sentinel::Text("?".to_string()));
        assert_eq!(
            counts,
            vec![
                ("sex".to_string(), 1),
                ("length".to_string(), 1),
                ("rings".to_string(), 0)
            ]
        );
    }

    #[test]
    fn test_select_and_column() {
        let table = abalone_sample();
        let selected = table.select(&["rings", "length"]).unwrap();
        assert_eq!(selected.shape(), (3, 2));
        let rings: Vec<f64> = selected
            .column("rings")
            .unwrap()
            .filter_map(Value::as_f64)
            .collect();
        assert_eq!(rings, vec![15.0, 7.0, 9.0]);
        assert!(table.select(&["whole_weight"]).is_err());
    }

    #[test]
    fn test_to_array2() {
        let schema = Schema::new(vec![Column::numeric("x"), Column::boolean("x_missing")]).unwrap();
        let table = Table::new(
            schema,
            vec![
                vec![Value::Number(1.5), Value::Bool(false)],
                vec![Value::Number(2.0), Value::Bool(true)],
            ],
        )
        .unwrap();
        let matrix = table.to_array2().unwrap();
        assert_eq!(matrix.shape(), &[2, 2]);
        assert_eq!(matrix[[0, 0]], 1.5);
        assert_eq!(matrix[[1, 1]], 1.0);
        assert_eq!(matrix[[0, 1]], 0.0);
    }

    #[test]
    fn test_to_array2_rejects_text() {
        let result = abalone_sample().to_array2();
        assert!(matches!(result, Err(TableError::NonNumeric { row: 0, .. })));
    }
}
