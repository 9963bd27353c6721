//! Locale-aware numeric normalization.
//!
//! Exports format the same quantity as "1,234.56" (US), "1.234,56" (EU),
//! "€12.50", or "45,2%". Everything numeric in the pipeline funnels through
//! [`parse_number`], which never fails: unparseable input normalizes to 0.

use crate::input::CellValue;

/// Parse a heterogeneous cell into a canonical float.
///
/// Numbers pass through unchanged; text goes through separator
/// disambiguation and symbol stripping; anything else is 0.
pub fn parse_number(value: &CellValue) -> f64 {
    match value {
        CellValue::Number(n) if n.is_finite() => *n,
        CellValue::Text(s) => parse_numeric_str(s),
        _ => 0.0,
    }
}

/// Normalize a numeric-looking string.
///
/// Separator rule: when the last comma falls after the last dot (or no dot
/// exists), the comma is the decimal separator; dots are thousands
/// separators and are dropped. Otherwise the dot is decimal and commas are
/// dropped. Whitespace and any remaining non-numeric character (currency
/// symbols, percent signs, units) are stripped before the final parse.
pub(crate) fn parse_numeric_str(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let decimal_comma = match (trimmed.rfind(','), trimmed.rfind('.')) {
        (Some(comma), Some(dot)) => comma > dot,
        (Some(_), None) => true,
        _ => false,
    };

    let separated: String = if decimal_comma {
        trimmed
            .chars()
            .filter(|c| *c != '.')
            .collect::<String>()
            .replacen(',', ".", 1)
    } else {
        trimmed.chars().filter(|c| *c != ',').collect()
    };

    let cleaned: String = separated
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    match cleaned.parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => 0.0,
    }
}
