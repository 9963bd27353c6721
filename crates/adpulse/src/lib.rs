//! Adpulse: campaign metrics aggregation and scoring engine.
//!
//! Adpulse turns heterogeneous, loosely-structured advertising exports into
//! a single reproducible set of business metrics plus a composite
//! performance score. Column names are inferred across inconsistent export
//! schemas and locales, numeric values are normalized regardless of
//! separator convention, conversion signals are blended, and rows are
//! bucketed into a daily time series.
//!
//! # Core Principles
//!
//! - **Deterministic**: aggregation is a pure function of the row sequence
//! - **Never throws on data**: malformed values degrade to neutral defaults
//! - **Finite output**: every ratio is guarded; NaN and infinity never leave
//!   the engine
//!
//! # Example
//!
//! ```
//! use adpulse::{MetricsEngine, Row};
//!
//! let rows = vec![
//!     Row::new()
//!         .with("Day", "2024-03-01")
//!         .with("Amount spent", "12,50")
//!         .with("Impressions", "4000")
//!         .with("Clicks (all)", "80")
//!         .with("Results", "3"),
//! ];
//!
//! let bundle = MetricsEngine::new().analyze(&rows);
//! println!("CTR: {:.2}%", bundle.totals.ctr);
//! println!("Score: {} ({:?})", bundle.score.value, bundle.score.rating);
//! ```

pub mod aggregate;
pub mod error;
pub mod input;
pub mod metrics;
pub mod resolve;
pub mod score;

mod engine;

pub use crate::engine::{MetricsBundle, MetricsEngine};
pub use aggregate::{Aggregation, DailyBucket, RawTotals, aggregate};
pub use error::{AdpulseError, Result};
pub use input::{CellValue, LoaderConfig, Row, read_rows, read_rows_from_path};
pub use metrics::KeyMetrics;
pub use resolve::{ResolvedColumns, SemanticField, parse_number, resolve_column};
pub use score::{
    Benchmarks, Confidence, PillarBreakdown, PillarWeights, Rating, Score, ScoreConfig,
    ScoreExplanation,
};
