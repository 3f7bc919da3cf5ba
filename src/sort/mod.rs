//! Deterministic row and column ordering for tables

mod order;

use std::cmp::Ordering;

use crate::error::TableError;
use crate::model::{Column, Table};

pub use order::compare_cells;

/// One column of a multi-key row sort
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub column: String,
    pub ascending: bool,
}

impl SortKey {
    pub fn ascending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            ascending: true,
        }
    }

    pub fn descending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            ascending: false,
        }
    }
}

/// Sorting engine.
///
/// Row sorts reorder the table in place and are stable. Column sorts take the
/// table by value and hand back the reassembled one, so no handle to the old
/// column order survives.
pub struct TableSorter;

impl TableSorter {
    /// Sort rows by a single column
    pub fn sort_rows<'a>(
        table: &'a mut Table,
        column: &str,
        ascending: bool,
    ) -> Result<&'a mut Table, TableError> {
        let key = SortKey {
            column: column.to_string(),
            ascending,
        };
        Self::sort_rows_by_keys(table, std::slice::from_ref(&key))
    }

    /// Sort rows by every column, ascending, in the current column order
    pub fn sort_rows_by_all(table: &mut Table) -> &mut Table {
        let keys: Vec<&Column> = table.columns().collect();
        let order = Self::row_order(table.row_count(), &keys, &vec![true; keys.len()]);
        table.reorder_rows(&order);
        table
    }

    /// Sort rows by several columns; later keys break ties in earlier ones
    pub fn sort_rows_by_keys<'a>(
        table: &'a mut Table,
        keys: &[SortKey],
    ) -> Result<&'a mut Table, TableError> {
        let columns = keys
            .iter()
            .map(|k| table.require_column(&k.column))
            .collect::<Result<Vec<_>, _>>()?;
        let directions: Vec<bool> = keys.iter().map(|k| k.ascending).collect();

        log::debug!(
            "Sorting {} rows of {} by {:?}",
            table.row_count(),
            table.name(),
            keys
        );

        let order = Self::row_order(table.row_count(), &columns, &directions);
        table.reorder_rows(&order);
        Ok(table)
    }

    /// Sort columns by name
    pub fn sort_columns(mut table: Table, ascending: bool) -> Table {
        log::debug!("Sorting columns of {}", table.name());
        table.order_columns_by(|a, b| {
            if ascending {
                a.cmp(b)
            } else {
                b.cmp(a)
            }
        });
        table
    }

    /// Canonical form: columns by name, then rows by every column
    pub fn sort(table: Table) -> Table {
        let mut table = Self::sort_columns(table, true);
        Self::sort_rows_by_all(&mut table);
        table
    }

    /// Stable permutation of row indices under the given keys
    fn row_order(row_count: usize, columns: &[&Column], ascending: &[bool]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..row_count).collect();
        order.sort_by(|&a, &b| {
            columns
                .iter()
                .zip(ascending)
                .map(|(column, &asc)| {
                    let ord = compare_cells(&column.values[a], &column.values[b]);
                    if asc {
                        ord
                    } else {
                        ord.reverse()
                    }
                })
                .find(|ord| *ord != Ordering::Equal)
                .unwrap_or(Ordering::Equal)
        });
        order
    }
}

impl Table {
    /// Sort rows by one column in place
    pub fn sort_rows(&mut self, column: &str, ascending: bool) -> Result<&mut Self, TableError> {
        TableSorter::sort_rows(self, column, ascending)
    }

    /// Sort rows by every column in place
    pub fn sort_rows_by_all(&mut self) -> &mut Self {
        TableSorter::sort_rows_by_all(self)
    }

    /// Reorder columns by name
    pub fn sort_columns(self, ascending: bool) -> Self {
        TableSorter::sort_columns(self, ascending)
    }

    /// Columns by name, then rows by every column
    pub fn sort(self) -> Self {
        TableSorter::sort(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CellValue;

    fn table(columns: Vec<Column>) -> Table {
        Table::from_columns("t", columns).unwrap()
    }

    fn values(table: &Table, name: &str) -> Vec<CellValue> {
        table.column_values(name).unwrap().to_vec()
    }

    #[test]
    fn test_sort_rows_ascending() {
        let mut t = table(vec![
            Column::new("k", vec![3i64, 1, 2]),
            Column::new("v", vec!["c", "a", "b"]),
        ]);
        t.sort_rows("k", true).unwrap();
        assert_eq!(values(&t, "k"), vec![1i64.into(), 2i64.into(), 3i64.into()]);
        assert_eq!(values(&t, "v"), vec!["a".into(), "b".into(), "c".into()]);
    }

    #[test]
    fn test_sort_rows_descending() {
        let mut t = table(vec![Column::new("k", vec![1.5, 3.0, 2.0])]);
        t.sort_rows("k", false).unwrap();
        assert_eq!(values(&t, "k"), vec![3.0.into(), 2.0.into(), 1.5.into()]);
    }

    #[test]
    fn test_sort_rows_is_stable() {
        let mut t = table(vec![
            Column::new("k", vec!["b", "a", "b", "a"]),
            Column::new("pos", vec![0i64, 1, 2, 3]),
        ]);
        t.sort_rows("k", true).unwrap();
        assert_eq!(
            values(&t, "pos"),
            vec![1i64.into(), 3i64.into(), 0i64.into(), 2i64.into()]
        );

        let mut t = table(vec![
            Column::new("k", vec!["b", "a", "b", "a"]),
            Column::new("pos", vec![0i64, 1, 2, 3]),
        ]);
        t.sort_rows("k", false).unwrap();
        assert_eq!(
            values(&t, "pos"),
            vec![0i64.into(), 2i64.into(), 1i64.into(), 3i64.into()]
        );
    }

    #[test]
    fn test_sort_rows_unknown_column() {
        let mut t = table(vec![Column::new("k", vec![2i64, 1])]);
        let err = t.sort_rows("missing", true).unwrap_err();
        assert_eq!(
            err,
            TableError::InvalidColumn {
                name: "missing".into()
            }
        );
        assert_eq!(values(&t, "k"), vec![2i64.into(), 1i64.into()]);
    }

    #[test]
    fn test_sort_rows_by_all() {
        let mut t = table(vec![
            Column::new("a", vec![2i64, 1, 2, 1]),
            Column::new("b", vec!["y", "z", "x", "a"]),
        ]);
        t.sort_rows_by_all();
        assert_eq!(
            values(&t, "a"),
            vec![1i64.into(), 1i64.into(), 2i64.into(), 2i64.into()]
        );
        assert_eq!(
            values(&t, "b"),
            vec!["a".into(), "z".into(), "x".into(), "y".into()]
        );
    }

    #[test]
    fn test_sort_rows_by_keys_mixed_directions() {
        let mut t = table(vec![
            Column::new("a", vec![1i64, 2, 1, 2]),
            Column::new("b", vec![10i64, 20, 30, 40]),
        ]);
        TableSorter::sort_rows_by_keys(
            &mut t,
            &[SortKey::descending("a"), SortKey::ascending("b")],
        )
        .unwrap();
        assert_eq!(
            values(&t, "b"),
            vec![20i64.into(), 40i64.into(), 10i64.into(), 30i64.into()]
        );
    }

    #[test]
    fn test_sort_rows_nulls_first() {
        let mut t = table(vec![Column::new("a", vec![Some(2i64), None, Some(1)])]);
        t.sort_rows("a", true).unwrap();
        assert_eq!(
            values(&t, "a"),
            vec![CellValue::Null, 1i64.into(), 2i64.into()]
        );
    }

    #[test]
    fn test_sort_columns() {
        let t = table(vec![
            Column::new("z", vec![1i64]),
            Column::new("a", vec![2i64]),
            Column::new("m", vec![3i64]),
        ]);
        let t = t.sort_columns(true);
        assert_eq!(t.column_names(), vec!["a", "m", "z"]);
        assert_eq!(t.cell(0, "z"), Some(&CellValue::Int(1)));

        let t = t.sort_columns(false);
        assert_eq!(t.column_names(), vec!["z", "m", "a"]);
        assert_eq!(t.name(), "t");
    }

    #[test]
    fn test_sort_is_idempotent() {
        let t = table(vec![
            Column::new("b", vec!["y", "x", "y"]),
            Column::new("a", vec![2.0, 1.0, 0.5]),
        ]);
        let once = t.sort();
        assert_eq!(once.column_names(), vec!["a", "b"]);
        assert_eq!(values(&once, "a"), vec![0.5.into(), 1.0.into(), 2.0.into()]);

        let twice = once.clone().sort();
        assert!(crate::compare::equals_tables(&once, &twice, 0.0).is_ok());
    }
}
