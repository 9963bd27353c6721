//! CSV row-loading adapter.
//!
//! Reads a pre-cleaned export into typed rows. Delimiter detection and
//! summary-row exclusion are the upstream ingestion collaborator's job; this
//! adapter expects a header row and one record per data row.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{AdpulseError, Result};

use super::row::{CellValue, Row};

/// Loader configuration.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Field delimiter.
    pub delimiter: u8,
    /// Quote character.
    pub quote: u8,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
        }
    }
}

/// Read rows from a CSV file on disk.
pub fn read_rows_from_path(path: impl AsRef<Path>, config: &LoaderConfig) -> Result<Vec<Row>> {
    let file = File::open(path.as_ref())?;
    read_rows(file, config)
}

/// Read rows from any reader producing CSV with a header row.
pub fn read_rows(reader: impl Read, config: &LoaderConfig) -> Result<Vec<Row>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .quote(config.quote)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader.headers()?.iter().map(|s| s.to_string()).collect();
    if headers.is_empty() {
        return Err(AdpulseError::EmptyData("no header row found".to_string()));
    }

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let row: Row = headers
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.clone(), type_cell(record.get(idx).unwrap_or(""))))
            .collect();
        rows.push(row);
    }

    Ok(rows)
}

/// Assign the narrowest cell type a raw CSV field supports.
///
/// Only canonically-formatted numbers become [`CellValue::Number`];
/// locale-formatted values ("1.234,56") stay text for the numeric
/// normalizer to handle.
fn type_cell(raw: &str) -> CellValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return CellValue::Null;
    }
    if trimmed.eq_ignore_ascii_case("true") {
        return CellValue::Bool(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return CellValue::Bool(false);
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => CellValue::Number(n),
        _ => CellValue::Text(trimmed.to_string()),
    }
}
