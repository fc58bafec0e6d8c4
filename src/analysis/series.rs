// src/analysis/series.rs

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};

/// An ordered sequence of measurements for one process parameter.
///
/// Order is significant: it reflects measurement sequence (time or
/// process-step order) and is never reordered by any analysis. A series is
/// built fresh per analysis call and never mutated afterwards.
///
/// Specification limits are the "Voice of the Customer" — externally imposed
/// quality requirements, independent of observed variation. They are optional
/// and independent of each other; when both are present the lower limit must
/// sit below the upper one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSeries {
    pub name: String,
    pub values: Vec<f64>,
    pub lower_spec_limit: Option<f64>,
    pub upper_spec_limit: Option<f64>,
}

impl MetricSeries {
    /// Creates a series with no specification limits.
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
            lower_spec_limit: None,
            upper_spec_limit: None,
        }
    }

    /// Attaches specification limits, validating them once at construction.
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::NonFiniteValue`] if a provided limit is NaN or infinite.
    /// - [`AnalysisError::InvalidSpecLimits`] if both limits are provided and
    ///   `lsl >= usl`.
    pub fn with_limits(mut self, lsl: Option<f64>, usl: Option<f64>) -> Result<Self> {
        for limit in [lsl, usl].into_iter().flatten() {
            if !limit.is_finite() {
                return Err(AnalysisError::NonFiniteValue(limit));
            }
        }
        if let (Some(l), Some(u)) = (lsl, usl) {
            if l >= u {
                return Err(AnalysisError::InvalidSpecLimits { lsl: l, usl: u });
            }
        }
        self.lower_spec_limit = lsl;
        self.upper_spec_limit = usl;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True if at least one specification limit is configured.
    pub fn has_spec_limits(&self) -> bool {
        self.lower_spec_limit.is_some() || self.upper_spec_limit.is_some()
    }
}

/// Arithmetic mean, or `None` for an empty slice.
pub(crate) fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (n - 1 denominator), or `None` for fewer than
/// two values.
pub(crate) fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let sum_sq = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>();
    Some((sum_sq / (values.len() - 1) as f64).sqrt())
}
