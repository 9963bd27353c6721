//! Property-based tests for the adpulse pipeline.
//!
//! These tests use proptest to generate random inputs and verify that the
//! pipeline maintains its invariants under all conditions:
//!
//! 1. **No panics**: parsing and aggregation never crash on any input
//! 2. **Finiteness**: NaN and infinity never leave the engine
//! 3. **Determinism**: same input always produces same output
//! 4. **Order-independence**: row order never changes the totals

use proptest::prelude::*;

use adpulse::{CellValue, MetricsEngine, Row, parse_number};

// =============================================================================
// Test Strategies
// =============================================================================

/// Strings that look like locale-formatted numbers.
fn numeric_like() -> impl Strategy<Value = String> {
    prop_oneof![
        // US format
        "[0-9]{1,3}(,[0-9]{3}){0,2}(\\.[0-9]{1,2})?",
        // EU format
        "[0-9]{1,3}(\\.[0-9]{3}){0,2}(,[0-9]{1,2})?",
        // Currency-decorated
        "[€$][0-9]{1,6}([\\.,][0-9]{2})?",
        // Percent fragments
        "[0-9]{1,3},[0-9]%",
        // Plain
        "-?[0-9]{1,9}(\\.[0-9]{1,4})?",
    ]
}

/// Arbitrary cell values, including garbage.
fn any_cell() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        any::<f64>().prop_map(CellValue::Number),
        any::<bool>().prop_map(CellValue::Bool),
        numeric_like().prop_map(CellValue::Text),
        "[\\PC]{0,40}".prop_map(CellValue::Text),
        Just(CellValue::Null),
    ]
}

/// Rows over a fixed campaign-export schema with arbitrary cell contents.
fn campaign_rows() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec(
        (any_cell(), any_cell(), any_cell(), any_cell(), any_cell()).prop_map(
            |(spend, impressions, clicks, results, day)| {
                Row::new()
                    .with("Amount spent", spend)
                    .with("Impressions", impressions)
                    .with("Clicks (all)", clicks)
                    .with("Results", results)
                    .with("Day", day)
            },
        ),
        0..40,
    )
}

// =============================================================================
// Numeric Normalizer Properties
// =============================================================================

proptest! {
    /// parse_number never panics and never returns a non-finite value.
    #[test]
    fn parse_number_is_total_and_finite(cell in any_cell()) {
        let parsed = parse_number(&cell);
        prop_assert!(parsed.is_finite());
    }

    /// Parsing is deterministic.
    #[test]
    fn parse_number_is_deterministic(cell in any_cell()) {
        prop_assert_eq!(parse_number(&cell), parse_number(&cell));
    }

    /// Canonically-formatted numbers survive a text round-trip.
    #[test]
    fn canonical_floats_round_trip(value in 0.0f64..1_000_000.0) {
        let rounded = (value * 100.0).round() / 100.0;
        let text = CellValue::Text(format!("{rounded:.2}"));
        prop_assert!((parse_number(&text) - rounded).abs() < 1e-9);
    }
}

// =============================================================================
// Pipeline Properties
// =============================================================================

proptest! {
    /// The engine never panics and the whole bundle stays finite.
    #[test]
    fn bundle_is_always_finite(rows in campaign_rows()) {
        let bundle = MetricsEngine::new().analyze(&rows);

        let json = serde_json::to_value(&bundle.totals).unwrap();
        for (name, value) in json.as_object().unwrap() {
            let number = value.as_f64().unwrap();
            prop_assert!(number.is_finite(), "{} must be finite", name);
        }
        for bucket in &bundle.trends {
            prop_assert!(bucket.spend.is_finite());
            prop_assert!(bucket.conversions.is_finite());
        }
    }

    /// The composite score is always in 0..=100.
    #[test]
    fn score_is_bounded(rows in campaign_rows()) {
        let bundle = MetricsEngine::new().analyze(&rows);
        prop_assert!(bundle.score.value <= 100);
    }

    /// Analysis is deterministic.
    #[test]
    fn analysis_is_deterministic(rows in campaign_rows()) {
        let engine = MetricsEngine::new();
        prop_assert_eq!(engine.analyze(&rows), engine.analyze(&rows));
    }

    /// Row order never affects the totals or the bucket contents.
    #[test]
    fn totals_are_order_independent(rows in campaign_rows()) {
        let engine = MetricsEngine::new();
        let forward = engine.analyze(&rows);

        let mut reversed = rows.clone();
        reversed.reverse();
        let backward = engine.analyze(&reversed);

        prop_assert!(close(forward.totals.spend, backward.totals.spend));
        prop_assert!(close(forward.totals.conversions, backward.totals.conversions));
        prop_assert_eq!(forward.trends.len(), backward.trends.len());
    }

    /// Trend buckets always come out in strictly ascending date order.
    #[test]
    fn trends_are_sorted_ascending(rows in campaign_rows()) {
        let bundle = MetricsEngine::new().analyze(&rows);
        for pair in bundle.trends.windows(2) {
            prop_assert!(pair[0].date < pair[1].date);
        }
    }
}

/// Float comparison tolerant of summation-order differences.
fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * (1.0 + a.abs().max(b.abs()))
}
