//! Error types for assumption validation, loading and scenario runs

use std::path::PathBuf;
use thiserror::Error;

/// An input parameter that violates its constraint.
///
/// Raised once, before any series is built; nothing is computed for an
/// invalid parameter set.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssumptionError {
    #[error("{field} must be positive (got {value})")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} cannot be negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must lie in [{min}, {max}) (got {value})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("{field} exceeds {max} (got {value})")]
    TooLarge {
        field: &'static str,
        value: f64,
        max: f64,
    },

    #[error("projected costs could reach {ceiling:.0}, above the {max:.0} limit")]
    CostsTooLarge { ceiling: f64, max: f64 },
}

impl AssumptionError {
    /// Name of the offending parameter
    pub fn field(&self) -> &'static str {
        match self {
            Self::NonPositive { field, .. }
            | Self::Negative { field, .. }
            | Self::OutOfRange { field, .. }
            | Self::TooLarge { field, .. }
            | Self::NotFinite { field } => field,
            // No single parameter; the combination compounds too far
            Self::CostsTooLarge { .. } => "projected_costs",
        }
    }
}

/// Failure while reading assumptions or a scenario grid from disk
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid assumptions JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid scenario CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid start month '{0}', expected YYYY-MM")]
    StartMonth(String),

    #[error("scenario grid {0} contains no scenarios")]
    EmptyGrid(PathBuf),
}

/// A named scenario whose assumptions failed validation
#[derive(Debug, Clone, PartialEq, Error)]
#[error("scenario '{name}': {source}")]
pub struct ScenarioError {
    pub name: String,
    #[source]
    pub source: AssumptionError,
}
