//! The key-metrics record and derived-ratio calculation.

use serde::{Deserialize, Serialize};

use crate::aggregate::RawTotals;

/// The full set of summed and derived campaign metrics.
///
/// Field names serialize in camelCase because the bundle feeds a JS
/// dashboard and an LLM prompt builder downstream. Invariant: every ratio
/// field is finite; division by zero yields exactly 0, and the frequency
/// mean defaults to 1 (no fatigue assumed) when there is no data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyMetrics {
    pub spend: f64,
    pub revenue: f64,
    pub impressions: f64,
    pub clicks: f64,
    /// Blended conversions (purchase/lead precedence over generic results).
    pub conversions: f64,
    /// Click-through rate, percent.
    pub ctr: f64,
    /// Cost per click.
    pub cpc: f64,
    /// Cost per acquisition.
    pub cpa: f64,
    /// Return on ad spend.
    pub roas: f64,
    /// Cost per thousand impressions.
    pub cpm: f64,
    pub purchases: f64,
    pub cost_per_purchase: f64,
    pub leads: f64,
    pub cost_per_lead: f64,
    /// Mean exposures per person across rows.
    pub frequency: f64,
    pub link_clicks: f64,
    pub landing_page_views: f64,
}

impl KeyMetrics {
    /// Derive the full record from raw accumulator sums.
    pub fn from_totals(totals: &RawTotals) -> Self {
        Self {
            spend: totals.spend,
            revenue: totals.revenue,
            impressions: totals.impressions,
            clicks: totals.clicks,
            conversions: totals.conversions,
            ctr: ratio(totals.clicks, totals.impressions) * 100.0,
            cpc: ratio(totals.spend, totals.clicks),
            cpa: ratio(totals.spend, totals.conversions),
            roas: ratio(totals.revenue, totals.spend),
            cpm: ratio(totals.spend, totals.impressions) * 1000.0,
            purchases: totals.purchases,
            cost_per_purchase: ratio(totals.spend, totals.purchases),
            leads: totals.leads,
            cost_per_lead: ratio(totals.spend, totals.leads),
            frequency: if totals.row_count > 0 {
                totals.frequency_sum / totals.row_count as f64
            } else {
                1.0
            },
            link_clicks: totals.link_clicks,
            landing_page_views: totals.landing_page_views,
        }
    }
}

impl Default for KeyMetrics {
    fn default() -> Self {
        Self::from_totals(&RawTotals::default())
    }
}

/// Zero-guarded division: 0 when the denominator is not positive.
fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals() -> RawTotals {
        RawTotals {
            spend: 100.0,
            impressions: 10_000.0,
            clicks: 200.0,
            link_clicks: 150.0,
            landing_page_views: 120.0,
            revenue: 350.0,
            purchases: 8.0,
            leads: 2.0,
            conversions: 10.0,
            frequency_sum: 6.0,
            row_count: 3,
        }
    }

    #[test]
    fn test_derived_ratios() {
        let metrics = KeyMetrics::from_totals(&totals());

        assert_eq!(metrics.ctr, 2.0);
        assert_eq!(metrics.cpc, 0.5);
        assert_eq!(metrics.cpa, 10.0);
        assert_eq!(metrics.roas, 3.5);
        assert_eq!(metrics.cpm, 10.0);
        assert_eq!(metrics.cost_per_purchase, 12.5);
        assert_eq!(metrics.cost_per_lead, 50.0);
        assert_eq!(metrics.frequency, 2.0);
    }

    #[test]
    fn test_zero_division_yields_zero() {
        let metrics = KeyMetrics::from_totals(&RawTotals {
            spend: 50.0,
            row_count: 2,
            ..RawTotals::default()
        });

        assert_eq!(metrics.ctr, 0.0);
        assert_eq!(metrics.cpc, 0.0);
        assert_eq!(metrics.cpa, 0.0);
        assert_eq!(metrics.roas, 0.0);
        assert_eq!(metrics.cpm, 0.0);
        assert_eq!(metrics.cost_per_purchase, 0.0);
        assert_eq!(metrics.cost_per_lead, 0.0);
    }

    #[test]
    fn test_frequency_defaults_to_one_without_rows() {
        let metrics = KeyMetrics::from_totals(&RawTotals::default());
        assert_eq!(metrics.frequency, 1.0);
    }

    #[test]
    fn test_all_fields_finite_on_empty_totals() {
        let metrics = KeyMetrics::from_totals(&RawTotals::default());
        let json = serde_json::to_value(&metrics).unwrap();

        for (name, value) in json.as_object().unwrap() {
            let number = value.as_f64().unwrap();
            assert!(number.is_finite(), "{name} must be finite");
        }
    }

    #[test]
    fn test_camel_case_serialization() {
        let json = serde_json::to_value(KeyMetrics::default()).unwrap();

        assert!(json.get("costPerPurchase").is_some());
        assert!(json.get("landingPageViews").is_some());
        assert!(json.get("cost_per_purchase").is_none());
    }
}
