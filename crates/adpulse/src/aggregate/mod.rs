//! Single-pass row aggregation.
//!
//! One scan over the row sequence accumulates per-field totals and buckets
//! rows into daily time-series entries. Columns are resolved once against the
//! first row's schema; the pass itself only reads through the memo table.

mod trends;

pub use trends::DailyBucket;

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::input::Row;
use crate::resolve::{ResolvedColumns, SemanticField};

use trends::parse_export_date;

/// Raw accumulator sums before any ratio is derived.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTotals {
    pub spend: f64,
    pub impressions: f64,
    pub clicks: f64,
    pub link_clicks: f64,
    pub landing_page_views: f64,
    pub revenue: f64,
    pub purchases: f64,
    pub leads: f64,
    /// Blended conversions per the purchase/lead precedence rule.
    pub conversions: f64,
    /// Running sum of per-row frequency; meaned later.
    pub frequency_sum: f64,
    pub row_count: usize,
}

/// Output of one aggregation pass.
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    pub totals: RawTotals,
    /// Daily buckets keyed by date; iteration order is ascending.
    pub buckets: BTreeMap<NaiveDate, DailyBucket>,
}

/// Aggregate a row sequence into totals and daily buckets.
///
/// The schema is taken from the first row and assumed uniform across the
/// dataset; callers guarantee that as a precondition. An empty sequence
/// yields zeroed totals and no buckets.
pub fn aggregate(rows: &[Row]) -> Aggregation {
    let Some(first) = rows.first() else {
        return Aggregation::default();
    };

    let resolved = ResolvedColumns::from_row(first);
    let mut totals = RawTotals::default();
    let mut buckets: BTreeMap<NaiveDate, DailyBucket> = BTreeMap::new();
    let mut undated_rows = 0usize;

    for row in rows {
        let spend = resolved.value_of(row, SemanticField::Spend);
        let impressions = resolved.value_of(row, SemanticField::Impressions);
        let clicks = resolved.value_of(row, SemanticField::Clicks);
        let revenue = resolved.value_of(row, SemanticField::Revenue);
        let conversions = blended_conversions(&resolved, row);

        totals.spend += spend;
        totals.impressions += impressions;
        totals.clicks += clicks;
        totals.link_clicks += resolved.value_of(row, SemanticField::LinkClicks);
        totals.landing_page_views += resolved.value_of(row, SemanticField::LandingPageViews);
        totals.revenue += revenue;
        totals.purchases += resolved.value_of(row, SemanticField::Purchases);
        totals.leads += resolved.value_of(row, SemanticField::Leads);
        totals.conversions += conversions;
        totals.frequency_sum += resolved.value_of(row, SemanticField::Frequency);
        totals.row_count += 1;

        match resolved
            .cell_of(row, SemanticField::Date)
            .and_then(parse_export_date)
        {
            Some(date) => {
                let bucket = buckets
                    .entry(date)
                    .or_insert_with(|| DailyBucket::new(date));
                bucket.spend += spend;
                bucket.impressions += impressions;
                bucket.clicks += clicks;
                bucket.conversions += conversions;
                bucket.revenue += revenue;
            }
            None => undated_rows += 1,
        }
    }

    if undated_rows > 0 {
        log::debug!(
            "{} of {} rows had no parseable date and were left out of the time series",
            undated_rows,
            totals.row_count
        );
    }

    Aggregation { totals, buckets }
}

/// Blend conversion signals for one row.
///
/// Granular purchase/lead tracking wins whenever either is nonzero for the
/// row; only then does the generic "Results" column stand in. Each row
/// decides independently, so a dataset with partial granular tracking mixes
/// both conversion definitions in one sum (a known ambiguity of the
/// blending rule, kept as-is).
fn blended_conversions(resolved: &ResolvedColumns, row: &Row) -> f64 {
    let purchases = resolved.value_of(row, SemanticField::Purchases);
    let leads = resolved.value_of(row, SemanticField::Leads);

    if purchases > 0.0 || leads > 0.0 {
        purchases + leads
    } else {
        resolved.value_of(row, SemanticField::Conversions)
    }
}
