//! Row value model for campaign export data.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single cell as delivered by the ingestion collaborator.
///
/// Exports mix strings, numbers, and booleans for the same semantic field
/// depending on the tool and locale that produced them. All numeric access
/// goes through [`crate::resolve::parse_number`]; nothing casts a cell
/// directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Numeric value, already parsed upstream (e.g. from a platform API).
    Number(f64),
    /// Boolean flag column.
    Bool(bool),
    /// Raw text, possibly locale-formatted ("1.234,56", "€12.50").
    Text(String),
    /// Missing/absent value.
    Null,
}

impl CellValue {
    /// Returns true if the cell carries no value.
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// The cell's text content, if it is a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

/// One export row: an ordered mapping from column name to cell value.
///
/// Rows are immutable inputs to the pipeline. Column order is preserved so
/// resolution scans columns in the order the export listed them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    #[serde(flatten)]
    cells: IndexMap<String, CellValue>,
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a cell value.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<CellValue>) {
        self.cells.insert(column.into(), value.into());
    }

    /// Builder-style cell insertion.
    pub fn with(mut self, column: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.insert(column, value);
        self
    }

    /// Get a cell by column name.
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    /// Column names in export order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(|k| k.as_str())
    }

    /// Number of columns in this row.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the row has no columns.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<CellValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
