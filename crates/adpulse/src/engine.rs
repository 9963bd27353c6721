//! Engine façade orchestrating aggregation, derivation, and scoring.

use serde::{Deserialize, Serialize};

use crate::aggregate::{DailyBucket, aggregate};
use crate::error::Result;
use crate::input::Row;
use crate::metrics::KeyMetrics;
use crate::score::{Score, ScoreConfig, score_metrics};

/// The combined output bundle consumed by narrative-generation and UI
/// collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsBundle {
    /// Summed and derived key metrics.
    pub totals: KeyMetrics,
    /// Daily buckets in ascending date order.
    pub trends: Vec<DailyBucket>,
    /// Composite performance score with breakdown and explanation.
    pub score: Score,
}

/// The metrics engine: a pure function of rows, packaged with its scoring
/// configuration.
///
/// # Example
///
/// ```
/// use adpulse::{MetricsEngine, Row};
///
/// let rows = vec![
///     Row::new()
///         .with("Day", "2024-03-01")
///         .with("Amount spent", "1.234,56")
///         .with("Impressions", "40000")
///         .with("Clicks (all)", "800")
///         .with("Results", "12"),
/// ];
///
/// let bundle = MetricsEngine::new().analyze(&rows);
/// assert_eq!(bundle.totals.spend, 1234.56);
/// assert_eq!(bundle.trends.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MetricsEngine {
    config: ScoreConfig,
}

impl MetricsEngine {
    /// Create an engine with the default (valid) scoring configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with a custom scoring configuration.
    ///
    /// Fails if the configuration violates its contract (pillar weights
    /// must sum to 1.0). This is the only error the engine can surface;
    /// analysis itself never fails.
    pub fn with_config(config: ScoreConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active scoring configuration.
    pub fn config(&self) -> &ScoreConfig {
        &self.config
    }

    /// Run the full pipeline over a row sequence.
    ///
    /// Re-running on the same input is deterministic and idempotent. An
    /// empty sequence short-circuits to zeroed totals, no trends, and a
    /// 0/Critical/Low score without running the scoring formulas.
    pub fn analyze(&self, rows: &[Row]) -> MetricsBundle {
        if rows.is_empty() {
            return MetricsBundle {
                totals: KeyMetrics::default(),
                trends: Vec::new(),
                score: Score::zeroed(&self.config),
            };
        }

        let aggregation = aggregate(rows);
        let totals = KeyMetrics::from_totals(&aggregation.totals);
        let trends = aggregation.buckets.into_values().collect();
        let score = score_metrics(&totals, &self.config);

        MetricsBundle {
            totals,
            trends,
            score,
        }
    }
}
