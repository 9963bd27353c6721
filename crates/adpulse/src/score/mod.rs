//! Four-pillar weighted scoring model.
//!
//! Performance, delivery, creative, and structure pillars are normalized
//! against benchmarks, penalized for low conversion volume and audience
//! fatigue, and blended into a 0–100 composite with a letter-style rating
//! and a confidence level.

mod config;

pub use config::{Benchmarks, PillarWeights, ScoreConfig};

use serde::{Deserialize, Serialize};

use crate::metrics::KeyMetrics;

/// Letter-style rating derived from the composite value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rating {
    Excellent,
    Good,
    Average,
    Critical,
}

impl Rating {
    /// Rating thresholds on the final 0–100 value.
    fn from_value(value: u8) -> Self {
        match value {
            v if v > 85 => Rating::Excellent,
            v if v > 70 => Rating::Good,
            v if v > 40 => Rating::Average,
            _ => Rating::Critical,
        }
    }
}

/// How much conversion evidence backs the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    fn from_conversions(conversions: f64) -> Self {
        if conversions > 15.0 {
            Confidence::High
        } else if conversions > 5.0 {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}

/// Unrounded 0–100 sub-scores for each pillar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PillarBreakdown {
    pub performance: f64,
    pub delivery: f64,
    pub creative: f64,
    pub structure: f64,
}

/// Machine-readable description of the weighting model.
///
/// Static metadata derived from the configuration, exposed so downstream
/// consumers can render "how this was calculated" without re-deriving it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreExplanation {
    pub summary: String,
    pub weights: PillarWeights,
    pub benchmarks: Benchmarks,
}

impl ScoreExplanation {
    fn from_config(config: &ScoreConfig) -> Self {
        Self {
            summary: "Weighted blend of performance, delivery, creative, and account \
                      structure pillars, each normalized against industry benchmarks. \
                      Low conversion volume and audience fatigue reduce the final value."
                .to_string(),
            weights: config.weights.clone(),
            benchmarks: config.benchmarks.clone(),
        }
    }
}

/// Composite performance score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    /// Composite value, 0–100.
    pub value: u8,
    pub rating: Rating,
    pub confidence: Confidence,
    pub breakdown: PillarBreakdown,
    pub explanation: ScoreExplanation,
}

impl Score {
    /// The all-zero score an empty dataset short-circuits to.
    pub(crate) fn zeroed(config: &ScoreConfig) -> Self {
        Self {
            value: 0,
            rating: Rating::Critical,
            confidence: Confidence::Low,
            breakdown: PillarBreakdown::default(),
            explanation: ScoreExplanation::from_config(config),
        }
    }
}

/// Score derived metrics against a validated configuration.
pub(crate) fn score_metrics(metrics: &KeyMetrics, config: &ScoreConfig) -> Score {
    let breakdown = PillarBreakdown {
        performance: performance_pillar(metrics, &config.benchmarks),
        delivery: delivery_pillar(metrics, &config.benchmarks),
        creative: creative_pillar(metrics, &config.benchmarks),
        structure: structure_pillar(metrics),
    };

    let weights = &config.weights;
    let weighted = breakdown.performance * weights.performance
        + breakdown.delivery * weights.delivery
        + breakdown.creative * weights.creative
        + breakdown.structure * weights.structure;

    let mut value = weighted.round();
    if metrics.conversions < 10.0 {
        value -= 15.0;
    }
    let value = value.clamp(0.0, 100.0) as u8;

    Score {
        value,
        rating: Rating::from_value(value),
        confidence: Confidence::from_conversions(metrics.conversions),
        breakdown,
        explanation: ScoreExplanation::from_config(config),
    }
}

/// Conversion efficiency against the CPA benchmark, blended with ROAS.
fn performance_pillar(m: &KeyMetrics, b: &Benchmarks) -> f64 {
    let mut score = if m.conversions > 0.0 {
        // A zero CPA with real conversions means free acquisitions.
        let cpa_score = if m.cpa > 0.0 {
            b.cpa / m.cpa * 90.0
        } else {
            100.0
        };
        cpa_score.clamp(10.0, 100.0)
    } else {
        20.0
    };

    if m.roas > 0.0 {
        let roas_score = (m.roas / b.roas * 100.0).clamp(0.0, 100.0);
        score = (score + roas_score) / 2.0;
    }

    if m.conversions < 5.0 {
        score *= 0.6;
    }

    score
}

/// Delivery cost and engagement, with a fatigue penalty above the
/// frequency threshold.
fn delivery_pillar(m: &KeyMetrics, b: &Benchmarks) -> f64 {
    let cpm_score = if m.cpm > 0.0 {
        b.cpm / m.cpm * 50.0
    } else if m.impressions > 0.0 {
        50.0
    } else {
        0.0
    };
    let ctr_score = m.ctr / b.ctr * 50.0;

    let mut score = (cpm_score + ctr_score).clamp(10.0, 100.0);
    if m.frequency > b.frequency_fatigue_threshold {
        score *= 0.8;
    }
    score
}

/// Click-through rate against benchmark.
fn creative_pillar(m: &KeyMetrics, b: &Benchmarks) -> f64 {
    (m.ctr / b.ctr * 100.0).clamp(10.0, 100.0)
}

/// Conversion-volume tiers with a tracking-failure penalty for spend
/// without conversions.
fn structure_pillar(m: &KeyMetrics) -> f64 {
    let mut score: f64 = if m.conversions > 20.0 {
        95.0
    } else if m.conversions > 5.0 {
        70.0
    } else {
        40.0
    };

    if m.spend > 2000.0 && m.conversions < 2.0 {
        score -= 40.0;
    }

    score.max(0.0)
}
