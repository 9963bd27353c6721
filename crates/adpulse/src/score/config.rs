//! Scoring benchmarks and pillar weights.

use serde::{Deserialize, Serialize};

use crate::error::{AdpulseError, Result};

/// Tolerance when checking that pillar weights sum to 1.0.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Industry benchmark constants the pillars normalize against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Benchmarks {
    /// Benchmark click-through rate, percent.
    pub ctr: f64,
    /// Benchmark cost per acquisition.
    pub cpa: f64,
    /// Benchmark return on ad spend.
    pub roas: f64,
    /// Benchmark cost per thousand impressions.
    pub cpm: f64,
    /// Mean frequency above which audience fatigue is assumed.
    pub frequency_fatigue_threshold: f64,
}

impl Default for Benchmarks {
    fn default() -> Self {
        Self {
            ctr: 1.5,
            cpa: 25.0,
            roas: 3.5,
            cpm: 15.0,
            frequency_fatigue_threshold: 3.5,
        }
    }
}

/// Weights of the four pillars in the composite score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PillarWeights {
    pub performance: f64,
    pub delivery: f64,
    pub creative: f64,
    pub structure: f64,
}

impl PillarWeights {
    /// Sum of all four weights; must be 1.0 for a valid configuration.
    pub fn sum(&self) -> f64 {
        self.performance + self.delivery + self.creative + self.structure
    }
}

impl Default for PillarWeights {
    fn default() -> Self {
        Self {
            performance: 0.40,
            delivery: 0.25,
            creative: 0.20,
            structure: 0.15,
        }
    }
}

/// Immutable scoring configuration: benchmarks plus pillar weights.
///
/// Passed into the scoring engine explicitly; validated once at engine
/// construction, never per call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreConfig {
    pub benchmarks: Benchmarks,
    pub weights: PillarWeights,
}

impl ScoreConfig {
    /// Check the configuration contract: pillar weights sum to 1.0.
    pub fn validate(&self) -> Result<()> {
        let sum = self.weights.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(AdpulseError::Config(format!(
                "pillar weights must sum to 1.0, got {sum}"
            )));
        }
        Ok(())
    }
}
