// src/report/process.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::{
    compute_xmr, find_out_of_spec, CapabilityStudy, ControlLimits, MetricSeries,
};
use crate::error::AnalysisError;

/// A batch deep-dive over one parameter series: control limits, out-of-spec
/// observations, and a capability study, each computed independently.
///
/// Sections are `Option` because their preconditions differ — a two-point
/// series can be charted but not studied, a series without spec limits can
/// be charted but not checked. A recoverable condition leaves the section
/// empty instead of failing the report, so the caller renders a message in
/// its place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessReport {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub parameter: String,
    pub observations: usize,
    pub control_limits: Option<ControlLimits>,
    /// Indices outside the control limits (process instability).
    pub beyond_control: Vec<usize>,
    /// Indices outside the specification limits (quality failure).
    /// `None` when the series carries no spec limits.
    pub out_of_spec: Option<Vec<usize>>,
    pub capability: Option<CapabilityStudy>,
}

impl ProcessReport {
    pub fn run(series: &MetricSeries) -> Self {
        let control_limits = compute_xmr(series).ok();
        let beyond_control = control_limits
            .as_ref()
            .map(|limits| limits.beyond_limits(series))
            .unwrap_or_default();

        let out_of_spec = match find_out_of_spec(series) {
            Ok(indices) => Some(indices),
            Err(AnalysisError::MissingSpecLimits) => None,
            // find_out_of_spec has no other failure mode
            Err(_) => None,
        };

        let capability = match (series.lower_spec_limit, series.upper_spec_limit) {
            (Some(lsl), Some(usl)) => CapabilityStudy::run(&series.values, lsl, usl).ok(),
            _ => None,
        };

        Self {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            parameter: series.name.clone(),
            observations: series.len(),
            control_limits,
            beyond_control,
            out_of_spec,
            capability,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_report_for_series_with_limits() {
        let series = MetricSeries::new(
            "Oligo Concentration",
            vec![9.8, 10.1, 9.9, 10.2, 10.0, 10.7, 9.9, 10.1],
        )
        .with_limits(Some(9.5), Some(10.5))
        .unwrap();

        let report = ProcessReport::run(&series);
        assert_eq!(report.parameter, "Oligo Concentration");
        assert_eq!(report.observations, 8);
        assert!(report.control_limits.is_some());
        assert_eq!(report.out_of_spec, Some(vec![5]));
        assert!(report.capability.is_some());
    }

    #[test]
    fn short_series_still_reports_out_of_spec() {
        let series = MetricSeries::new("pH", vec![7.9])
            .with_limits(Some(6.5), Some(7.5))
            .unwrap();

        let report = ProcessReport::run(&series);
        assert!(report.control_limits.is_none());
        assert!(report.beyond_control.is_empty());
        assert_eq!(report.out_of_spec, Some(vec![0]));
        // one observation is not enough for a capability study
        assert!(report.capability.is_none());
    }

    #[test]
    fn series_without_limits_skips_spec_sections() {
        let series = MetricSeries::new("cycle time", vec![30.0, 32.0, 31.0]);
        let report = ProcessReport::run(&series);
        assert!(report.control_limits.is_some());
        assert_eq!(report.out_of_spec, None);
        assert!(report.capability.is_none());
    }
}
