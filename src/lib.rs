//! tabassert - Tolerant equality assertions for tabular data
//!
//! Compares tables and flat value sequences field by field with a configurable
//! numeric precision, and sorts tables into a canonical row and column order so
//! that tables assembled in different orders can be compared.

pub mod assertions;
pub mod compare;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod sort;

pub use assertions::{
    assert_array_equals, assert_array_equals_with_precision, assert_table_equals,
    assert_table_equals_with_precision,
};
pub use compare::TableComparator;
pub use config::{LoadOptions, DEFAULT_PRECISION};
pub use error::{ComparisonError, Location, TableError};
pub use model::{CellType, CellValue, Column, Table};
pub use parser::{load_csv, load_csv_with, CsvLoader, TableLoader};
pub use sort::{SortKey, TableSorter};
