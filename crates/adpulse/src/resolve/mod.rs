//! Column resolution: mapping semantic fields onto an export's actual columns.
//!
//! Resolution is two-stage. [`ResolvedColumns::from_schema`] runs the pattern
//! tables once per dataset and memoizes field → column name; per-row access
//! then goes through the memo table only, never re-running a regex.

mod fields;
mod numeric;

pub use fields::SemanticField;
pub use numeric::parse_number;

use indexmap::IndexMap;
use regex::Regex;

use crate::input::{CellValue, Row};

/// Find the best-matching column for an ordered pattern list.
///
/// Patterns are tried in priority order; for each pattern the schema is
/// scanned in column order and the first match wins. Later patterns are only
/// consulted when earlier ones matched nothing. `None` means the field is
/// entirely absent from this export.
pub fn resolve_column<'a>(columns: &[&'a str], patterns: &[Regex]) -> Option<&'a str> {
    for pattern in patterns {
        if let Some(col) = columns.iter().copied().find(|c| pattern.is_match(c)) {
            return Some(col);
        }
    }
    None
}

/// Per-dataset memo table: semantic field → resolved column name.
#[derive(Debug, Clone)]
pub struct ResolvedColumns {
    columns: IndexMap<SemanticField, Option<String>>,
}

impl ResolvedColumns {
    /// Resolve every semantic field against one schema.
    ///
    /// The schema is the column-name set of the dataset's first row, assumed
    /// representative of every row in the export.
    pub fn from_schema(schema: &[&str]) -> Self {
        let columns = SemanticField::ALL
            .iter()
            .map(|field| {
                let resolved = resolve_column(schema, field.patterns());
                match resolved {
                    Some(col) => log::debug!("resolved {} -> '{}'", field.label(), col),
                    None => log::debug!("no column for {}", field.label()),
                }
                (*field, resolved.map(String::from))
            })
            .collect();

        Self { columns }
    }

    /// Resolve from a representative row.
    pub fn from_row(row: &Row) -> Self {
        let schema: Vec<&str> = row.columns().collect();
        Self::from_schema(&schema)
    }

    /// The column name a field resolved to, if any.
    pub fn get(&self, field: SemanticField) -> Option<&str> {
        self.columns.get(&field).and_then(|c| c.as_deref())
    }

    /// Extract a field's numeric value from a row.
    ///
    /// An unresolved field or missing cell is 0 for every row, not an error.
    pub fn value_of(&self, row: &Row, field: SemanticField) -> f64 {
        self.get(field)
            .and_then(|col| row.get(col))
            .map(parse_number)
            .unwrap_or(0.0)
    }

    /// The raw cell a field resolved to in a row.
    pub fn cell_of<'a>(&self, row: &'a Row, field: SemanticField) -> Option<&'a CellValue> {
        self.get(field).and_then(|col| row.get(col))
    }
}
