//! Tolerant equality checks for tables and flat value sequences

pub mod cell;

use crate::error::{ComparisonError, Location};
use crate::model::{CellValue, Table};

pub use cell::{CellComparator, CellMatch};

/// Equality engine for tables and sequences
pub struct TableComparator {
    cells: CellComparator,
}

impl TableComparator {
    /// Create a comparator, rejecting negative or NaN precision
    pub fn new(precision: f64) -> Result<Self, ComparisonError> {
        if precision.is_nan() || precision < 0.0 {
            return Err(ComparisonError::InvalidPrecision(precision));
        }
        Ok(Self {
            cells: CellComparator::new(precision),
        })
    }

    /// Check that two tables hold the same data.
    ///
    /// Checks run in a fixed order and stop at the first failure: row count,
    /// column count, column names (order-sensitive), then every cell, row by
    /// row in the first table's column order. Cells of the second table are
    /// looked up by column name.
    pub fn equals_tables(&self, left: &Table, right: &Table) -> Result<(), ComparisonError> {
        log::debug!(
            "Comparing tables {} and {} with precision {}",
            left.name(),
            right.name(),
            self.cells.precision()
        );

        if left.row_count() != right.row_count() {
            return Err(ComparisonError::RowCount {
                left: left.row_count(),
                right: right.row_count(),
            });
        }
        if left.column_count() != right.column_count() {
            return Err(ComparisonError::ColumnCount {
                left: left.column_count(),
                right: right.column_count(),
            });
        }
        let left_names = left.column_names();
        let right_names = right.column_names();
        if left_names != right_names {
            return Err(ComparisonError::ColumnNames {
                left: left_names.into_iter().map(String::from).collect(),
                right: right_names.into_iter().map(String::from).collect(),
            });
        }

        // Names are identical, so every lookup succeeds
        let pairs: Vec<_> = left
            .columns()
            .filter_map(|c| right.column(&c.name).map(|other| (c, other)))
            .collect();

        for row in 0..left.row_count() {
            for (column, other) in &pairs {
                self.check(
                    &column.values[row],
                    &other.values[row],
                    || Location::Cell {
                        row,
                        column: column.name.clone(),
                    },
                )?;
            }
        }

        Ok(())
    }

    /// Check that two sequences hold the same values, position by position
    pub fn equals_arrays(
        &self,
        left: &[CellValue],
        right: &[CellValue],
    ) -> Result<(), ComparisonError> {
        if left.len() != right.len() {
            return Err(ComparisonError::RowCount {
                left: left.len(),
                right: right.len(),
            });
        }

        for (i, (a, b)) in left.iter().zip(right).enumerate() {
            self.check(a, b, || Location::Index(i))?;
        }

        Ok(())
    }

    fn check(
        &self,
        a: &CellValue,
        b: &CellValue,
        location: impl FnOnce() -> Location,
    ) -> Result<(), ComparisonError> {
        let precision = match self.cells.compare(a, b) {
            CellMatch::Equal => return Ok(()),
            CellMatch::NumericMismatch => Some(self.cells.precision()),
            CellMatch::Mismatch => None,
        };
        let location = location();
        log::debug!("First mismatch at {}: {} vs {}", location, a, b);
        Err(ComparisonError::ValueMismatch {
            location,
            left: a.clone(),
            right: b.clone(),
            precision,
        })
    }
}

/// Compare two tables with the given precision
pub fn equals_tables(left: &Table, right: &Table, precision: f64) -> Result<(), ComparisonError> {
    TableComparator::new(precision)?.equals_tables(left, right)
}

/// Compare two value sequences with the given precision
pub fn equals_arrays(
    left: &[CellValue],
    right: &[CellValue],
    precision: f64,
) -> Result<(), ComparisonError> {
    TableComparator::new(precision)?.equals_arrays(left, right)
}
