// src/report/portfolio.rs

use serde::{Deserialize, Serialize};

use crate::analysis::MetricSeries;
use crate::records::{BatchRecord, BatchStatus};

/// Portfolio-level technical indicators across the master schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub total_batches: usize,
    pub active_batches: usize,
    /// Percentage of batches that did not fail. 100.0 for an empty schedule.
    pub batch_success_rate: f64,
    /// Mean of actual minus planned cycle time over completed batches;
    /// positive means batches run long. `None` until a batch completes.
    pub avg_cycle_time_variance_days: Option<f64>,
    /// Mean final yield over batches reporting one.
    pub avg_yield_percent: Option<f64>,
}

impl PortfolioSummary {
    pub fn from_batches(batches: &[BatchRecord]) -> Self {
        let total = batches.len();
        let failed = batches
            .iter()
            .filter(|b| b.status == BatchStatus::Failed)
            .count();
        let active = batches
            .iter()
            .filter(|b| b.status == BatchStatus::InProduction)
            .count();

        let success_rate = if total > 0 {
            (1.0 - failed as f64 / total as f64) * 100.0
        } else {
            100.0
        };

        let variances: Vec<f64> = batches
            .iter()
            .filter_map(BatchRecord::cycle_time_variance)
            .collect();
        let yields: Vec<f64> = batches.iter().filter_map(|b| b.yield_percent).collect();

        Self {
            total_batches: total,
            active_batches: active,
            batch_success_rate: success_rate,
            avg_cycle_time_variance_days: average(&variances),
            avg_yield_percent: average(&yields),
        }
    }
}

/// Cycle-time performance series for an XmR chart: actual cycle times of
/// completed batches, in schedule order. Incomplete batches are skipped, so
/// the caller can detect the under-two-observations case through the
/// control-limit calculator's error.
pub fn cycle_time_series(batches: &[BatchRecord]) -> MetricSeries {
    let values: Vec<f64> = batches
        .iter()
        .filter_map(|b| b.actual_cycle_time_days)
        .collect();
    MetricSeries::new("Actual Cycle Time (Days)", values)
}

fn average(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}
