//! Daily trend buckets and export date parsing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::input::CellValue;

/// Date formats seen across export tools, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d.%m.%Y", "%m/%d/%Y"];

/// One calendar day of summed delivery metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyBucket {
    /// ISO calendar date (serialized as `YYYY-MM-DD`).
    pub date: NaiveDate,
    pub spend: f64,
    pub impressions: f64,
    pub clicks: f64,
    pub conversions: f64,
    pub revenue: f64,
}

impl DailyBucket {
    /// Create an empty bucket for a date.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            spend: 0.0,
            impressions: 0.0,
            clicks: 0.0,
            conversions: 0.0,
            revenue: 0.0,
        }
    }
}

/// Parse a date cell from an export row.
///
/// Datetime values ("2024-03-01T00:00:00", "2024-03-01 08:30:00") carry the
/// date in their first ten characters. Returns `None` for anything
/// unparseable; the caller drops such rows from the time series only.
pub(crate) fn parse_export_date(value: &CellValue) -> Option<NaiveDate> {
    let text = value.as_text()?.trim();
    if text.is_empty() {
        return None;
    }

    let candidate = match text.get(..10) {
        Some(prefix)
            if text.len() > 10 && matches!(text.as_bytes()[10], b'T' | b' ') =>
        {
            prefix
        }
        _ => text,
    };

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(candidate, fmt).ok())
}
