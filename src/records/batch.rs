// src/records/batch.rs
use serde::{Deserialize, Serialize};

/// Final disposition of a manufacturing batch on the master schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BatchStatus {
    Completed,
    InProduction,
    AtRisk,
    Failed,
}

/// One row of the master production schedule.
///
/// Cycle times are in days. `actual_cycle_time_days` and `yield_percent`
/// stay `None` until the batch completes; `deviation_id` is set when a
/// failure or at-risk disposition opened a formal deviation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchRecord {
    pub batch_id: String,
    pub partner: String,
    pub program: String,
    pub status: BatchStatus,
    pub planned_cycle_time_days: f64,
    pub actual_cycle_time_days: Option<f64>,
    pub yield_percent: Option<f64>,
    pub deviation_id: Option<String>,
}

impl BatchRecord {
    /// True once an actual cycle time has been recorded.
    pub fn is_complete(&self) -> bool {
        self.actual_cycle_time_days.is_some()
    }

    /// Actual minus planned cycle time; positive means the batch ran long.
    pub fn cycle_time_variance(&self) -> Option<f64> {
        self.actual_cycle_time_days
            .map(|actual| actual - self.planned_cycle_time_days)
    }
}
