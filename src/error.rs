// src/error.rs

use thiserror::Error;

/// Failure modes of the analytics layer.
///
/// Every variant is a permanent input-validity condition or a legitimate
/// small-sample condition. Nothing here is transient, so callers should
/// substitute an explanatory message for the affected output rather than
/// retry the call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// Too few observations to compute the requested statistic.
    #[error("insufficient data: need at least {needed} observations, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Lower specification limit at or above the upper limit.
    #[error("invalid specification limits: LSL {lsl} must be below USL {usl}")]
    InvalidSpecLimits { lsl: f64, usl: f64 },

    /// Zero process variation makes capability indices undefined.
    #[error("degenerate distribution: standard deviation is zero")]
    DegenerateDistribution,

    /// Out-of-spec check requested on a series with no limits configured.
    #[error("no specification limits configured on this series")]
    MissingSpecLimits,

    /// A specification limit or observation was NaN or infinite.
    #[error("non-finite value: {0}")]
    NonFiniteValue(f64),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
