//! Column metadata and type information

use serde::{Deserialize, Serialize};

use super::table::CellValue;

/// Declared logical type of a column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellType {
    #[default]
    Null,
    Bool,
    Int,
    Float,
    String,
    Date,
    DateTime,
    Mixed,
}

impl CellType {
    /// Widen the type to accommodate another type
    pub fn widen(self, other: CellType) -> CellType {
        if self == other {
            return self;
        }

        match (self, other) {
            (CellType::Null, t) | (t, CellType::Null) => t,
            (CellType::Int, CellType::Float) | (CellType::Float, CellType::Int) => CellType::Float,
            (CellType::Date, CellType::DateTime) | (CellType::DateTime, CellType::Date) => {
                CellType::DateTime
            }
            _ => CellType::Mixed,
        }
    }

    /// Type of a single cell value
    pub fn of(value: &CellValue) -> CellType {
        match value {
            CellValue::Null => CellType::Null,
            CellValue::Bool(_) => CellType::Bool,
            CellValue::Int(_) => CellType::Int,
            CellValue::Float(_) => CellType::Float,
            CellValue::String(_) => CellType::String,
            CellValue::Date(_) => CellType::Date,
            CellValue::DateTime(_) => CellType::DateTime,
        }
    }

    /// Infer the narrowest type covering every value
    pub fn infer<'a>(values: impl IntoIterator<Item = &'a CellValue>) -> CellType {
        values
            .into_iter()
            .fold(CellType::Null, |acc, v| acc.widen(CellType::of(v)))
    }

    /// Whether values of this type compare numerically
    pub fn is_numeric(self) -> bool {
        matches!(self, CellType::Int | CellType::Float)
    }
}

impl std::fmt::Display for CellType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellType::Null => write!(f, "null"),
            CellType::Bool => write!(f, "bool"),
            CellType::Int => write!(f, "int"),
            CellType::Float => write!(f, "float"),
            CellType::String => write!(f, "string"),
            CellType::Date => write!(f, "date"),
            CellType::DateTime => write!(f, "datetime"),
            CellType::Mixed => write!(f, "mixed"),
        }
    }
}

/// A named, typed sequence of cell values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column name, unique within its table
    pub name: String,
    /// Declared type; inferred from the values unless given explicitly
    pub cell_type: CellType,
    /// Values in row order
    pub values: Vec<CellValue>,
}

impl Column {
    /// Create a column, inferring its type from the values
    pub fn new<V>(name: impl Into<String>, values: impl IntoIterator<Item = V>) -> Self
    where
        V: Into<CellValue>,
    {
        let values: Vec<CellValue> = values.into_iter().map(Into::into).collect();
        let cell_type = CellType::infer(&values);
        Self {
            name: name.into(),
            cell_type,
            values,
        }
    }

    /// Create a column with a declared type
    pub fn with_type(
        name: impl Into<String>,
        cell_type: CellType,
        values: Vec<CellValue>,
    ) -> Self {
        Self {
            name: name.into(),
            cell_type,
            values,
        }
    }

    /// Number of values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the column holds no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at a row index
    pub fn get(&self, index: usize) -> Option<&CellValue> {
        self.values.get(index)
    }

    /// Rearrange values so that position `i` holds the value previously at `order[i]`
    pub(crate) fn permute(&mut self, order: &[usize]) {
        let mut taken: Vec<Option<CellValue>> =
            std::mem::take(&mut self.values).into_iter().map(Some).collect();
        self.values = order
            .iter()
            .map(|&i| taken[i].take().unwrap_or(CellValue::Null))
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widen() {
        assert_eq!(CellType::Null.widen(CellType::Int), CellType::Int);
        assert_eq!(CellType::Int.widen(CellType::Float), CellType::Float);
        assert_eq!(CellType::Date.widen(CellType::DateTime), CellType::DateTime);
        assert_eq!(CellType::Bool.widen(CellType::String), CellType::Mixed);
    }

    #[test]
    fn test_column_infers_type() {
        let column = Column::new("a", vec![Some(1i64), None, Some(3)]);
        assert_eq!(column.cell_type, CellType::Int);
        assert_eq!(column.len(), 3);
        assert_eq!(column.get(1), Some(&CellValue::Null));

        let column = Column::new("b", vec![CellValue::Int(1), CellValue::Float(2.5)]);
        assert_eq!(column.cell_type, CellType::Float);
        assert!(column.cell_type.is_numeric());
    }

    #[test]
    fn test_permute() {
        let mut column = Column::new("a", vec!["x", "y", "z"]);
        column.permute(&[2, 0, 1]);
        assert_eq!(
            column.values,
            vec![CellValue::from("z"), CellValue::from("x"), CellValue::from("y")]
        );
    }
}
