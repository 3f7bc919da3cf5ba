//! Assertion-style entry points for test suites

use crate::compare;
use crate::config::DEFAULT_PRECISION;
use crate::error::ComparisonError;
use crate::model::{CellValue, Table};

/// Assert two tables are equal within [`DEFAULT_PRECISION`]
pub fn assert_table_equals(left: &Table, right: &Table) -> Result<(), ComparisonError> {
    assert_table_equals_with_precision(left, right, DEFAULT_PRECISION)
}

pub fn assert_table_equals_with_precision(
    left: &Table,
    right: &Table,
    precision: f64,
) -> Result<(), ComparisonError> {
    compare::equals_tables(left, right, precision)
}

/// Assert two value sequences are equal within [`DEFAULT_PRECISION`]
pub fn assert_array_equals(left: &[CellValue], right: &[CellValue]) -> Result<(), ComparisonError> {
    assert_array_equals_with_precision(left, right, DEFAULT_PRECISION)
}

pub fn assert_array_equals_with_precision(
    left: &[CellValue],
    right: &[CellValue],
    precision: f64,
) -> Result<(), ComparisonError> {
    compare::equals_arrays(left, right, precision)
}
