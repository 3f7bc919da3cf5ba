//! Table and cell data structures

use std::borrow::Cow;
use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use serde::{Deserialize, Serialize};

use super::schema::Column;
use crate::error::TableError;

/// A cell value with type information
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(Cow<'static, str>),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CellValue::Null, CellValue::Null) => true,
            (CellValue::Bool(a), CellValue::Bool(b)) => a == b,
            (CellValue::Int(a), CellValue::Int(b)) => a == b,
            (CellValue::Float(a), CellValue::Float(b)) => {
                // Handle NaN comparison
                if a.is_nan() && b.is_nan() {
                    true
                } else {
                    a == b
                }
            }
            (CellValue::String(a), CellValue::String(b)) => a == b,
            (CellValue::Date(a), CellValue::Date(b)) => a == b,
            (CellValue::DateTime(a), CellValue::DateTime(b)) => a == b,
            // Cross-type numeric comparison
            (CellValue::Int(a), CellValue::Float(b)) => (*a as f64) == *b,
            (CellValue::Float(a), CellValue::Int(b)) => *a == (*b as f64),
            _ => false,
        }
    }
}

impl CellValue {
    /// Numeric view of the value, if it is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Int(i) => Some(*i as f64),
            CellValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Convert to a display string
    pub fn display(&self) -> Cow<'_, str> {
        match self {
            CellValue::Null => Cow::Borrowed("NULL"),
            CellValue::Bool(b) => Cow::Owned(b.to_string()),
            CellValue::Int(i) => Cow::Owned(i.to_string()),
            CellValue::Float(f) => Cow::Owned(f.to_string()),
            CellValue::String(s) => Cow::Borrowed(s.as_ref()),
            CellValue::Date(d) => Cow::Owned(d.to_string()),
            CellValue::DateTime(dt) => Cow::Owned(dt.to_string()),
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(Cow::Owned(s.to_string()))
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(Cow::Owned(s))
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<i32> for CellValue {
    fn from(i: i32) -> Self {
        CellValue::Int(i64::from(i))
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(d: NaiveDate) -> Self {
        CellValue::Date(d)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(dt: NaiveDateTime) -> Self {
        CellValue::DateTime(dt)
    }
}

impl<T> From<Option<T>> for CellValue
where
    T: Into<CellValue>,
{
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => CellValue::Null,
        }
    }
}

/// Ordered, name-indexed column store
type ColumnMap = IndexMap<String, Column, FxBuildHasher>;

/// A named table of equal-length columns
#[derive(Debug, Clone)]
pub struct Table {
    name: String,
    columns: ColumnMap,
    row_count: usize,
}

impl Table {
    /// Create a new empty table
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: ColumnMap::default(),
            row_count: 0,
        }
    }

    /// Assemble a table from columns, in the given order
    pub fn from_columns(
        name: impl Into<String>,
        columns: impl IntoIterator<Item = Column>,
    ) -> Result<Self, TableError> {
        let mut table = Self::new(name);
        for column in columns {
            table.add_column(column)?;
        }
        Ok(table)
    }

    /// Append a column; the first column fixes the row count
    pub fn add_column(&mut self, column: Column) -> Result<(), TableError> {
        if self.columns.contains_key(&column.name) {
            return Err(TableError::DuplicateColumn { name: column.name });
        }
        if self.columns.is_empty() {
            self.row_count = column.len();
        } else if column.len() != self.row_count {
            let actual = column.len();
            return Err(TableError::ColumnLength {
                name: column.name,
                expected: self.row_count,
                actual,
            });
        }
        self.columns.insert(column.name.clone(), column);
        Ok(())
    }

    /// Table name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Column names in column order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.keys().map(String::as_str).collect()
    }

    /// Columns in column order
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.values()
    }

    /// Get column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.get(name)
    }

    /// Get column index by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.get_index_of(name)
    }

    /// Get column by name, failing if it does not exist
    pub fn require_column(&self, name: &str) -> Result<&Column, TableError> {
        self.column(name).ok_or_else(|| TableError::InvalidColumn {
            name: name.to_string(),
        })
    }

    /// Values of a column, suitable for array comparison
    pub fn column_values(&self, name: &str) -> Result<&[CellValue], TableError> {
        self.require_column(name).map(|c| c.values.as_slice())
    }

    /// Single cell lookup
    pub fn cell(&self, row: usize, column: &str) -> Option<&CellValue> {
        self.column(column).and_then(|c| c.get(row))
    }

    /// Cells of one row, in column order
    pub fn row(&self, index: usize) -> Option<Vec<&CellValue>> {
        if index >= self.row_count {
            return None;
        }
        Some(self.columns.values().filter_map(|c| c.get(index)).collect())
    }

    /// All rows as name-to-value maps
    pub fn to_rows(&self) -> Vec<IndexMap<String, CellValue>> {
        (0..self.row_count)
            .map(|i| {
                self.columns
                    .values()
                    .map(|c| (c.name.clone(), c.values[i].clone()))
                    .collect()
            })
            .collect()
    }

    /// All columns as a name-to-values map
    pub fn to_column_map(&self) -> IndexMap<String, Vec<CellValue>> {
        self.columns
            .values()
            .map(|c| (c.name.clone(), c.values.clone()))
            .collect()
    }

    /// Reorder columns by name with a stable sort
    pub(crate) fn order_columns_by(&mut self, mut cmp: impl FnMut(&str, &str) -> Ordering) {
        self.columns.sort_by(|a, _, b, _| cmp(a.as_str(), b.as_str()));
    }

    /// Apply a row permutation to every column
    pub(crate) fn reorder_rows(&mut self, order: &[usize]) {
        debug_assert_eq!(order.len(), self.row_count);
        for column in self.columns.values_mut() {
            column.permute(order);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::from_columns(
            "sample",
            vec![
                Column::new("a", vec![1i64, 2]),
                Column::new("b", vec!["x", "y"]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_accessors() {
        let table = sample();
        assert_eq!(table.name(), "sample");
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.column_names(), vec!["a", "b"]);
        assert_eq!(table.column_index("b"), Some(1));
        assert_eq!(table.cell(1, "b"), Some(&CellValue::from("y")));
        assert_eq!(
            table.row(0),
            Some(vec![&CellValue::Int(1), &CellValue::from("x")])
        );
        assert!(table.row(2).is_none());
    }

    #[test]
    fn test_to_rows_and_column_map() {
        let table = sample();
        let rows = table.to_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1]["a"], CellValue::Int(2));
        assert_eq!(rows[1].keys().collect::<Vec<_>>(), vec!["a", "b"]);

        let columns = table.to_column_map();
        assert_eq!(columns["b"], vec![CellValue::from("x"), CellValue::from("y")]);
    }

    #[test]
    fn test_rejects_uneven_columns() {
        let err = Table::from_columns(
            "t",
            vec![Column::new("a", vec![1i64, 2]), Column::new("b", vec![1i64])],
        )
        .unwrap_err();
        assert_eq!(
            err,
            TableError::ColumnLength {
                name: "b".into(),
                expected: 2,
                actual: 1,
            }
        );
        assert_eq!(err.to_string(), "Column b has 1 values, expected 2");
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let err = Table::from_columns(
            "t",
            vec![Column::new("a", vec![1i64]), Column::new("a", vec![2i64])],
        )
        .unwrap_err();
        assert!(matches!(err, TableError::DuplicateColumn { .. }));
    }

    #[test]
    fn test_missing_column() {
        let table = sample();
        assert!(matches!(
            table.column_values("zzz"),
            Err(TableError::InvalidColumn { .. })
        ));
        assert_eq!(table.column_values("a").unwrap().len(), 2);
    }

    #[test]
    fn test_numeric_equality_across_kinds() {
        assert_eq!(CellValue::Int(1), CellValue::Float(1.0));
        assert_eq!(CellValue::Float(0.0), CellValue::Float(-0.0));
        assert_ne!(CellValue::Int(1), CellValue::Float(1.5));
        assert_ne!(CellValue::Float(0.0), CellValue::Null);
    }

    #[test]
    fn test_nan_equality() {
        assert_eq!(CellValue::Float(f64::NAN), CellValue::Float(f64::NAN));
        assert_eq!(CellValue::Int(2), CellValue::Float(2.0));
        assert_ne!(CellValue::Int(2), CellValue::from("2"));
        assert_eq!(CellValue::Int(3).as_number(), Some(3.0));
        assert_eq!(CellValue::from("3").as_number(), None);
    }
}
