//! Natural ordering of cell values

use std::cmp::Ordering;

use crate::model::CellValue;

/// Rank of each kind of value, used only when a column mixes kinds
fn rank(value: &CellValue) -> u8 {
    match value {
        CellValue::Null => 0,
        CellValue::Bool(_) => 1,
        CellValue::Int(_) | CellValue::Float(_) => 2,
        CellValue::String(_) => 3,
        CellValue::Date(_) => 4,
        CellValue::DateTime(_) => 5,
    }
}

/// Total order over cell values.
///
/// Nulls come first, numbers compare as f64 (NaN last), text compares
/// lexically and dates chronologically.
pub fn compare_cells(a: &CellValue, b: &CellValue) -> Ordering {
    match (a, b) {
        (CellValue::Null, CellValue::Null) => Ordering::Equal,
        (CellValue::Bool(a), CellValue::Bool(b)) => a.cmp(b),
        (CellValue::String(a), CellValue::String(b)) => a.cmp(b),
        (CellValue::Date(a), CellValue::Date(b)) => a.cmp(b),
        (CellValue::DateTime(a), CellValue::DateTime(b)) => a.cmp(b),
        _ => match (a.as_number(), b.as_number()) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            _ => rank(a).cmp(&rank(b)),
        },
    }
}
