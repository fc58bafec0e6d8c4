// src/analysis/oos.rs

use super::series::MetricSeries;
use crate::error::{AnalysisError, Result};

/// Indices of observations outside the specification limits, in original
/// order.
///
/// An out-of-spec observation is a quality failure against the externally
/// imposed limits, distinct from instability against control limits. When
/// only one limit is configured, only that bound is evaluated.
///
/// # Errors
///
/// [`AnalysisError::MissingSpecLimits`] when the series carries neither
/// limit — asking for an out-of-spec check without any spec configured is a
/// caller bug, not an empty result.
pub fn find_out_of_spec(series: &MetricSeries) -> Result<Vec<usize>> {
    if !series.has_spec_limits() {
        return Err(AnalysisError::MissingSpecLimits);
    }

    let out = series
        .values
        .iter()
        .enumerate()
        .filter(|(_, &v)| {
            series.upper_spec_limit.is_some_and(|usl| v > usl)
                || series.lower_spec_limit.is_some_and(|lsl| v < lsl)
        })
        .map(|(i, _)| i)
        .collect();
    Ok(out)
}
