// src/analysis/capability.rs

use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal};

use super::series::{mean, sample_std_dev};
use crate::error::{AnalysisError, Result};

/// Industry threshold below which a process is guaranteed to produce defects.
pub const CPK_INCAPABLE: f64 = 1.0;
/// Common industry target for a robust process.
pub const CPK_TARGET: f64 = 1.33;

/// Capability classification bands for downstream labeling.
///
/// These are informational: [`compute_cpk`] returns the raw index and never
/// enforces a band. A negative Cpk (mean entirely outside the spec window)
/// classifies as `NotCapable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CpkClass {
    /// Cpk < 1.0 — the process cannot meet its specification.
    NotCapable,
    /// 1.0 <= Cpk < 1.33 — meets spec only under tight control.
    Marginal,
    /// Cpk >= 1.33 — capable and robust.
    Capable,
}

impl CpkClass {
    pub fn from_cpk(cpk: f64) -> Self {
        if cpk < CPK_INCAPABLE {
            CpkClass::NotCapable
        } else if cpk < CPK_TARGET {
            CpkClass::Marginal
        } else {
            CpkClass::Capable
        }
    }
}

/// A named Cpk value, in caller-supplied parameter order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapabilityResult {
    pub parameter: String,
    pub cpk: f64,
}

impl CapabilityResult {
    pub fn classify(&self) -> CpkClass {
        CpkClass::from_cpk(self.cpk)
    }
}

/// Computes the process capability index Cpk from sample data.
///
/// `Cpk = min((USL - mean) / 3s, (mean - LSL) / 3s)` where `s` is the sample
/// standard deviation (n - 1 denominator) of `values`. The result may be
/// negative when the process mean lies entirely outside the spec window;
/// no clamping is applied.
///
/// # Errors
///
/// - [`AnalysisError::InvalidSpecLimits`] if `lsl >= usl` or a limit is
///   non-finite.
/// - [`AnalysisError::InsufficientData`] for fewer than two values.
/// - [`AnalysisError::DegenerateDistribution`] when the sample standard
///   deviation is zero — Cpk is undefined, not infinite.
pub fn compute_cpk(values: &[f64], lsl: f64, usl: f64) -> Result<f64> {
    validate_limits(lsl, usl)?;
    let (m, s) = sample_moments(values)?;

    let cpk_upper = (usl - m) / (3.0 * s);
    let cpk_lower = (m - lsl) / (3.0 * s);
    Ok(cpk_upper.min(cpk_lower))
}

/// A full capability study over one parameter: Cpk plus the sample moments
/// and the expected out-of-spec rates implied by a normal process at those
/// moments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapabilityStudy {
    pub lower_spec_limit: f64,
    pub upper_spec_limit: f64,
    pub mean: f64,
    pub std_dev: f64,
    pub cpk: f64,
    /// Expected parts per million below the LSL.
    pub ppm_below: f64,
    /// Expected parts per million above the USL.
    pub ppm_above: f64,
}

impl CapabilityStudy {
    /// Runs a two-sided capability study.
    ///
    /// PPM estimates come from the normal CDF at the fitted sample moments,
    /// so they are projections of long-run defect rates, not observed counts.
    pub fn run(values: &[f64], lsl: f64, usl: f64) -> Result<Self> {
        validate_limits(lsl, usl)?;
        let (m, s) = sample_moments(values)?;

        let cpk_upper = (usl - m) / (3.0 * s);
        let cpk_lower = (m - lsl) / (3.0 * s);

        // s is finite and positive here, so construction cannot fail
        let normal = Normal::new(m, s).map_err(|_| AnalysisError::DegenerateDistribution)?;
        let ppm_below = normal.cdf(lsl) * 1_000_000.0;
        let ppm_above = (1.0 - normal.cdf(usl)) * 1_000_000.0;

        Ok(Self {
            lower_spec_limit: lsl,
            upper_spec_limit: usl,
            mean: m,
            std_dev: s,
            cpk: cpk_upper.min(cpk_lower),
            ppm_below,
            ppm_above,
        })
    }

    pub fn classify(&self) -> CpkClass {
        CpkClass::from_cpk(self.cpk)
    }
}

fn validate_limits(lsl: f64, usl: f64) -> Result<()> {
    for limit in [lsl, usl] {
        if !limit.is_finite() {
            return Err(AnalysisError::NonFiniteValue(limit));
        }
    }
    if lsl >= usl {
        return Err(AnalysisError::InvalidSpecLimits { lsl, usl });
    }
    Ok(())
}

fn sample_moments(values: &[f64]) -> Result<(f64, f64)> {
    if values.len() < 2 {
        return Err(AnalysisError::InsufficientData {
            needed: 2,
            got: values.len(),
        });
    }
    // len >= 2 guarantees both statistics
    let m = mean(values).unwrap();
    let s = sample_std_dev(values).unwrap();
    if s == 0.0 {
        return Err(AnalysisError::DegenerateDistribution);
    }
    Ok((m, s))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two-point sample with exact mean and sample std dev:
    /// {m - d, m + d} has sample std dev d * sqrt(2).
    fn sample_with_sd(mean: f64, sd: f64) -> Vec<f64> {
        let d = sd / std::f64::consts::SQRT_2;
        vec![mean - d, mean + d]
    }

    #[test]
    fn cpk_centered_process() {
        // mean = 10, sd = 0.2, LSL = 9.5, USL = 10.5
        // both half-indices = 0.5 / 0.6 = 0.8333
        let values = sample_with_sd(10.0, 0.2);
        let cpk = compute_cpk(&values, 9.5, 10.5).unwrap();
        assert!((cpk - 0.5 / 0.6).abs() < 1e-10, "got {cpk}");
        assert_eq!(CpkClass::from_cpk(cpk), CpkClass::NotCapable);
    }

    #[test]
    fn cpk_takes_nearest_limit() {
        // mean 10, sd 0.2, asymmetric limits: upper side is closer
        let values = sample_with_sd(10.0, 0.2);
        let cpk = compute_cpk(&values, 8.0, 10.3).unwrap();
        let expected = (10.3 - 10.0) / 0.6;
        assert!((cpk - expected).abs() < 1e-10);
    }

    #[test]
    fn cpk_can_be_negative_when_mean_outside_spec() {
        let values = sample_with_sd(11.0, 0.2);
        let cpk = compute_cpk(&values, 9.5, 10.5).unwrap();
        assert!(cpk < 0.0, "mean above USL must yield negative Cpk, got {cpk}");
        assert_eq!(CpkClass::from_cpk(cpk), CpkClass::NotCapable);
    }

    #[test]
    fn cpk_rejects_zero_variance() {
        assert_eq!(
            compute_cpk(&[10.0, 10.0, 10.0], 9.5, 10.5).unwrap_err(),
            AnalysisError::DegenerateDistribution
        );
    }

    #[test]
    fn cpk_rejects_inverted_limits() {
        let values = sample_with_sd(10.0, 0.2);
        assert!(matches!(
            compute_cpk(&values, 10.5, 9.5),
            Err(AnalysisError::InvalidSpecLimits { .. })
        ));
    }

    #[test]
    fn cpk_rejects_insufficient_data() {
        assert!(matches!(
            compute_cpk(&[10.0], 9.5, 10.5),
            Err(AnalysisError::InsufficientData { .. })
        ));
        assert!(matches!(
            compute_cpk(&[], 9.5, 10.5),
            Err(AnalysisError::InsufficientData { .. })
        ));
    }

    #[test]
    fn classification_bands() {
        assert_eq!(CpkClass::from_cpk(0.99), CpkClass::NotCapable);
        assert_eq!(CpkClass::from_cpk(1.0), CpkClass::Marginal);
        assert_eq!(CpkClass::from_cpk(1.32), CpkClass::Marginal);
        assert_eq!(CpkClass::from_cpk(1.33), CpkClass::Capable);
        assert_eq!(CpkClass::from_cpk(1.82), CpkClass::Capable);
    }

    #[test]
    fn study_reports_moments_and_ppm() {
        let values = sample_with_sd(10.0, 0.2);
        let study = CapabilityStudy::run(&values, 9.5, 10.5).unwrap();

        assert!((study.mean - 10.0).abs() < 1e-12);
        assert!((study.std_dev - 0.2).abs() < 1e-12);
        assert!((study.cpk - 0.5 / 0.6).abs() < 1e-10);
        assert_eq!(study.classify(), CpkClass::NotCapable);

        // Limits sit 2.5 sigma from the mean on each side: the one-tail
        // probability is ~0.62%, i.e. ~6210 PPM per side.
        assert!((study.ppm_below - study.ppm_above).abs() < 1e-6);
        assert!(study.ppm_above > 5000.0 && study.ppm_above < 7500.0);
    }

    #[test]
    fn study_is_deterministic() {
        let values = sample_with_sd(10.0, 0.2);
        let a = CapabilityStudy::run(&values, 9.5, 10.5).unwrap();
        let b = CapabilityStudy::run(&values, 9.5, 10.5).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn capability_result_preserves_parameter_name() {
        let result = CapabilityResult {
            parameter: "Oligo Concentration".to_string(),
            cpk: 1.45,
        };
        assert_eq!(result.classify(), CpkClass::Capable);
        assert_eq!(result.parameter, "Oligo Concentration");
    }
}
