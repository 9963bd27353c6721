//! Error types for the adpulse library.

use thiserror::Error;

/// Main error type for adpulse operations.
///
/// The metrics pipeline itself never fails on malformed data; it degrades to
/// neutral defaults instead. Errors here come from the row-loading adapter or
/// from a scoring configuration that violates its contract.
#[derive(Debug, Error)]
pub enum AdpulseError {
    /// Error reading from the underlying source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Empty file or missing header row.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Scoring configuration violates an invariant (e.g. pillar weights
    /// not summing to 1.0).
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for adpulse operations.
pub type Result<T> = std::result::Result<T, AdpulseError>;
