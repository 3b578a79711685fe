//! Column declarations.

use super::error::TableError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared kind of a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnKind {
    /// Continuous or count-valued numbers.
    Numeric,
    /// Labels, whether stored as text or as numeric codes.
    Categorical,
    /// True/false flags.
    Boolean,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::Numeric => write!(f, "numeric"),
            ColumnKind::Categorical => write!(f, "categorical"),
            ColumnKind::Boolean => write!(f, "boolean"),
        }
    }
}

/// A named, typed column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
}

impl Column {
    pub fn new(name: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn numeric(name: impl Into<String>) -> Self {
        Self::new(name, ColumnKind::Numeric)
    }

    pub fn categorical(name: impl Into<String>) -> Self {
        Self::new(name, ColumnKind::Categorical)
    }

    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, ColumnKind::Boolean)
    }
}

/// Ordered list of columns with unique names.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    columns: Vec<Column>,
}

impl Schema {
    /// Build a schema, rejecting duplicate column names.
    pub fn new(columns: Vec<Column>) -> Result<Self, TableError> {
        for (i, column) in columns.iter().enumerate() {
            if columns[..i].iter().any(|c| c.name == column.name) {
                return Err(TableError::DuplicateColumn(column.name.clone()));
            }
        }
        Ok(Self { columns })
    }

    /// Build a schema from a fixed column list known to have unique names.
    pub(crate) fn from_known(columns: Vec<Column>) -> Self {
        debug_assert!(Self::new(columns.clone()).is_ok());
        Self { columns }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Position of the column called `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Append a column, rejecting a duplicate name.
    pub fn push(&mut self, column: Column) -> Result<(), TableError> {
        if self.contains(&column.name) {
            return Err(TableError::DuplicateColumn(column.name));
        }
        self.columns.push(column);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_rejects_duplicates() {
        let result = Schema::new(vec![Column::numeric("age"), Column::numeric("age")]);
        assert_eq!(result, Err(TableError::DuplicateColumn("age".to_string())));
    }

    #[test]
    fn test_schema_lookup() {
        let schema = Schema::new(vec![Column::categorical("sex"), Column::numeric("length")])
            .unwrap();
        assert_eq!(schema.index_of("length"), Some(1));
        assert_eq!(schema.get("sex").unwrap().kind, ColumnKind::Categorical);
        assert!(!schema.contains("rings"));
        assert_eq!(schema.names().collect::<Vec<_>>(), vec!["sex", "length"]);
    }

    #[test]
    fn test_schema_push() {
        let mut schema = Schema::new(vec![Column::numeric("ca")]).unwrap();
        schema.push(Column::boolean("ca_missing")).unwrap();
        assert_eq!(schema.len(), 2);
        assert!(schema.push(Column::numeric("ca")).is_err());
    }
}
