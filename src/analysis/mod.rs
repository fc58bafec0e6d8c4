// src/analysis/mod.rs
pub mod capability;
pub mod control;
pub mod oos;
pub mod pareto;
pub mod series;

// Re-export commonly used types
pub use capability::{
    compute_cpk, CapabilityResult, CapabilityStudy, CpkClass, CPK_INCAPABLE, CPK_TARGET,
};
pub use control::{compute_xmr, ControlLimits};
pub use oos::find_out_of_spec;
pub use pareto::{aggregate, ParetoBucket};
pub use series::MetricSeries;
