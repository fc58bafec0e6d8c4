// src/analysis/control.rs

use serde::{Deserialize, Serialize};

use super::series::{mean, MetricSeries};
use crate::error::{AnalysisError, Result};

/// XmR scaling factor for individuals charts: 3/d2 with d2 = 1.128 for a
/// moving range of subgroup size 2. Standard constant, do not tune.
const XMR_FACTOR: f64 = 2.66;

/// Control limits for an individuals (XmR) chart.
///
/// Control limits are the "Voice of the Process": statistically derived
/// boundaries of expected common-cause variation, distinct from the
/// specification limits carried on [`MetricSeries`]. Owned by the caller
/// that requested them; never cached across calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlLimits {
    pub mean: f64,
    pub moving_range_mean: f64,
    pub upper_control_limit: f64,
    pub lower_control_limit: f64,
}

impl ControlLimits {
    /// Indices of observations falling outside these control limits,
    /// in original order.
    ///
    /// A point beyond the control limits marks process instability —
    /// an unexpected event worth investigating even when the observation
    /// is still within specification.
    pub fn beyond_limits(&self, series: &MetricSeries) -> Vec<usize> {
        series
            .values
            .iter()
            .enumerate()
            .filter(|(_, &v)| v > self.upper_control_limit || v < self.lower_control_limit)
            .map(|(i, _)| i)
            .collect()
    }
}

/// Computes XmR control limits for a series of individual observations.
///
/// The moving range is the sequence of absolute successive differences
/// `|x[i] - x[i-1]|`. Limits are `mean ± 2.66 * mean(moving range)`.
///
/// # Errors
///
/// [`AnalysisError::InsufficientData`] when the series holds fewer than two
/// observations — a single point has no moving range, so the caller should
/// show an informational message instead of a chart.
pub fn compute_xmr(series: &MetricSeries) -> Result<ControlLimits> {
    if series.len() < 2 {
        return Err(AnalysisError::InsufficientData {
            needed: 2,
            got: series.len(),
        });
    }

    // len >= 2, so both means exist
    let center = mean(&series.values).unwrap();
    let moving_ranges: Vec<f64> = series
        .values
        .windows(2)
        .map(|w| (w[1] - w[0]).abs())
        .collect();
    let mr_bar = mean(&moving_ranges).unwrap();

    Ok(ControlLimits {
        mean: center,
        moving_range_mean: mr_bar,
        upper_control_limit: center + XMR_FACTOR * mr_bar,
        lower_control_limit: center - XMR_FACTOR * mr_bar,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xmr_limits_for_known_series() {
        // mean = 11.5, moving ranges [2, 1, 2], MR-bar = 5/3
        let series = MetricSeries::new("cycle time", vec![10.0, 12.0, 11.0, 13.0]);
        let limits = compute_xmr(&series).unwrap();

        assert!((limits.mean - 11.5).abs() < 1e-12);
        assert!((limits.moving_range_mean - 5.0 / 3.0).abs() < 1e-12);
        assert!((limits.upper_control_limit - (11.5 + 2.66 * 5.0 / 3.0)).abs() < 1e-12);
        assert!((limits.lower_control_limit - (11.5 - 2.66 * 5.0 / 3.0)).abs() < 1e-12);
        // UCL ~ 15.93, LCL ~ 7.07
        assert!((limits.upper_control_limit - 15.933).abs() < 1e-2);
        assert!((limits.lower_control_limit - 7.067).abs() < 1e-2);
    }

    #[test]
    fn xmr_rejects_single_observation() {
        let series = MetricSeries::new("cycle time", vec![10.0]);
        assert_eq!(
            compute_xmr(&series).unwrap_err(),
            AnalysisError::InsufficientData { needed: 2, got: 1 }
        );
    }

    #[test]
    fn xmr_rejects_empty_series() {
        let series = MetricSeries::new("cycle time", vec![]);
        assert!(matches!(
            compute_xmr(&series),
            Err(AnalysisError::InsufficientData { got: 0, .. })
        ));
    }

    #[test]
    fn xmr_is_deterministic() {
        let series = MetricSeries::new("cycle time", vec![10.0, 12.0, 11.0, 13.0]);
        let a = compute_xmr(&series).unwrap();
        let b = compute_xmr(&series).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn beyond_limits_preserves_order() {
        let series = MetricSeries::new(
            "concentration",
            vec![10.0, 10.2, 9.9, 10.1, 10.0, 10.1, 9.9, 10.0, 14.0, 10.1, 6.0],
        );
        let limits = compute_xmr(&series).unwrap();
        let flagged = limits.beyond_limits(&series);
        assert_eq!(flagged, vec![8, 10]);
    }

    #[test]
    fn constant_series_has_collapsed_limits() {
        let series = MetricSeries::new("flat", vec![5.0, 5.0, 5.0]);
        let limits = compute_xmr(&series).unwrap();
        assert!((limits.upper_control_limit - 5.0).abs() < 1e-12);
        assert!((limits.lower_control_limit - 5.0).abs() < 1e-12);
        assert!(limits.beyond_limits(&series).is_empty());
    }
}
