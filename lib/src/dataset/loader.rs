//! Delimited-text loader.

use super::DatasetError;
use crate::table::{Column, ColumnKind, Schema, Table, TableError, Value};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::info;

/// Loads a headerless delimited file into a [`Table`].
///
/// Column names and kinds come from the schema supplied by the caller. Empty
/// fields and fields equal to the sentinel token become [`Value::Missing`],
/// so the returned table is already normalized.
///
/// # Example
///
/// ```
/// use tabular_impute::dataset::CsvLoader;
/// use tabular_impute::table::{Column, Schema, Value};
///
/// let schema = Schema::new(vec![Column::numeric("ca"), Column::categorical("thal")]).unwrap();
/// let table = CsvLoader::new(schema)
///     .sentinel("?")
///     .load_str("0.0,6.0\n?,3.0\n")
///     .unwrap();
///
/// assert_eq!(table.value(1, "ca"), Some(&Value::Missing));
/// assert_eq!(table.value(0, "thal"), Some(&Value::text("6.0")));
/// ```
#[derive(Clone, Debug)]
pub struct CsvLoader {
    schema: Schema,
    delimiter: u8,
    has_headers: bool,
    sentinel: Option<String>,
    trim: bool,
}

impl CsvLoader {
    /// Comma-delimited, no header row, fields trimmed, no sentinel token.
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            delimiter: b',',
            has_headers: false,
            sentinel: None,
            trim: true,
        }
    }

    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Skip a header row. Names still come from the schema.
    pub fn has_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    /// Token the source uses for "value absent", e.g. `"?"`.
    pub fn sentinel(mut self, token: impl Into<String>) -> Self {
        self.sentinel = Some(token.into());
        self
    }

    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Load from a local file.
    pub fn load_path<P: AsRef<Path>>(&self, path: P) -> Result<Table, DatasetError> {
        let file = File::open(path)?;
        self.load_reader(BufReader::new(file))
    }

    pub fn load_str(&self, text: &str) -> Result<Table, DatasetError> {
        self.load_reader(text.as_bytes())
    }

    /// Load from any reader (a file, a downloaded body, an in-memory buffer).
    pub fn load_reader<R: Read>(&self, reader: R) -> Result<Table, DatasetError> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(self.has_headers)
            .flexible(true)
            .trim(if self.trim { Trim::All } else { Trim::None })
            .from_reader(reader);

        let expected = self.schema.len();
        let mut rows = Vec::new();

        for (i, result) in rdr.records().enumerate() {
            let record = result?;
            if record.len() != expected {
                return Err(TableError::RowWidth {
                    row: i,
                    expected,
                    got: record.len(),
                }
                .into());
            }
            let row = record
                .iter()
                .zip(self.schema.columns())
                .map(|(field, column)| self.parse_field(i, field, column))
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }

        info!(rows = rows.len(), columns = expected, "loaded delimited table");
        Ok(Table::new(self.schema.clone(), rows)?)
    }

    fn parse_field(&self, row: usize, field: &str, column: &Column) -> Result<Value, DatasetError> {
        if field.is_empty() || self.sentinel.as_deref() == Some(field) {
            return Ok(Value::Missing);
        }

        let parse_error = || DatasetError::Parse {
            row,
            column: column.name.clone(),
            value: field.to_string(),
        };

        match column.kind {
            ColumnKind::Numeric => field.parse::<f64>().map(Value::Number).map_err(|_| parse_error()),
            ColumnKind::Categorical => Ok(Value::Text(field.to_string())),
            ColumnKind::Boolean => match field.to_ascii_lowercase().as_str() {
                "true" | "1" => Ok(Value::Bool(true)),
                "false" | "0" => Ok(Value::Bool(false)),
                _ => Err(parse_error()),
            },
        }
    }
}
