// src/report/mod.rs
pub mod finance;
pub mod governance;
pub mod portfolio;
pub mod process;
pub mod quality;

// Re-export commonly used types
pub use finance::{BudgetSummary, OpexSummary};
pub use governance::GovernanceSummary;
pub use portfolio::{cycle_time_series, PortfolioSummary};
pub use process::ProcessReport;
pub use quality::{oldest_open_days, open_by_priority, record_type_pareto};
