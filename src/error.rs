//! Error types for table comparison and manipulation

use thiserror::Error;

use crate::model::CellValue;

/// Where a value mismatch was found
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    /// Position in a flat sequence
    Index(usize),
    /// Row and column of a table cell
    Cell { row: usize, column: String },
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::Index(i) => write!(f, "row {}", i),
            Location::Cell { row, column } => write!(f, "row {} column {}", row, column),
        }
    }
}

/// Why two tables or sequences are not equal.
///
/// Only the first failing check is reported; the variants are listed in the
/// order the checks run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComparisonError {
    #[error("Row count mismatch: {left} vs {right}")]
    RowCount { left: usize, right: usize },

    #[error("Column count mismatch: {left} vs {right}")]
    ColumnCount { left: usize, right: usize },

    #[error("Column names mismatch: {left:?} vs {right:?}")]
    ColumnNames { left: Vec<String>, right: Vec<String> },

    #[error("Value mismatch in {location}: {left} vs {right}{}", precision_suffix(.precision))]
    ValueMismatch {
        location: Location,
        left: CellValue,
        right: CellValue,
        /// Set when both values were numbers
        precision: Option<f64>,
    },

    #[error("Precision must be a non-negative number, got {0}")]
    InvalidPrecision(f64),
}

fn precision_suffix(precision: &Option<f64>) -> String {
    match precision {
        Some(p) => format!(" with precision {}", p),
        None => String::new(),
    }
}

/// Errors from building, looking up, or sorting tables
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("Column not found: {name}")]
    InvalidColumn { name: String },

    #[error("Duplicate column name: {name}")]
    DuplicateColumn { name: String },

    #[error("Column {name} has {actual} values, expected {expected}")]
    ColumnLength {
        name: String,
        expected: usize,
        actual: usize,
    },
}
