//! Cell-level comparison logic

use crate::model::CellValue;

/// Outcome of comparing one pair of cells
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellMatch {
    Equal,
    /// Two numbers further apart than the precision
    NumericMismatch,
    /// Any other unequal pair
    Mismatch,
}

/// Cell comparator with a numeric tolerance
#[derive(Debug, Clone, Copy)]
pub struct CellComparator {
    precision: f64,
}

impl CellComparator {
    /// Create a new cell comparator
    pub fn new(precision: f64) -> Self {
        Self { precision }
    }

    /// Precision applied to numeric pairs
    pub fn precision(&self) -> f64 {
        self.precision
    }

    /// Compare two cell values.
    ///
    /// Numbers (integer or float, in any combination) are equal when
    /// `|a - b| <= precision`; every other pair must be exactly equal.
    pub fn compare(&self, a: &CellValue, b: &CellValue) -> CellMatch {
        match (a.as_number(), b.as_number()) {
            (Some(x), Some(y)) => {
                if numbers_equal(x, y, self.precision) {
                    CellMatch::Equal
                } else {
                    CellMatch::NumericMismatch
                }
            }
            _ if a == b => CellMatch::Equal,
            _ => CellMatch::Mismatch,
        }
    }

    /// Compare two cell values for equality
    pub fn equal(&self, a: &CellValue, b: &CellValue) -> bool {
        self.compare(a, b) == CellMatch::Equal
    }
}

fn numbers_equal(x: f64, y: f64, precision: f64) -> bool {
    if x.is_nan() || y.is_nan() {
        return x.is_nan() && y.is_nan();
    }
    // Equal infinities would otherwise yield NaN
    x == y || (x - y).abs() <= precision
}
