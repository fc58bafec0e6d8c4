// src/file/mod.rs
pub mod export;
pub mod import;

pub use export::{load_report, save_report, write_pareto_csv};
pub use import::{load_batches_csv, load_quality_csv, load_risks_csv, load_series_csv};
