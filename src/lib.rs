// src/lib.rs

//! Statistical process analytics for external-manufacturing oversight.
//!
//! This crate is the computation layer behind partner-network dashboards:
//! XmR control limits, Cpk capability studies, Pareto ranking of quality
//! records, and out-of-spec detection, plus the typed record model and KPI
//! summaries they feed on. Every function is a pure computation over
//! caller-supplied values — rendering, refresh cadence, and data generation
//! belong to the consumer.

pub mod analysis;
pub mod error;
pub mod file;
pub mod records;
pub mod report;

pub use analysis::{
    aggregate, compute_cpk, compute_xmr, find_out_of_spec, CapabilityResult, CapabilityStudy,
    ControlLimits, CpkClass, MetricSeries, ParetoBucket,
};
pub use error::AnalysisError;
