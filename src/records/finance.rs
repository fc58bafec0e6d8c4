// src/records/finance.rs
use serde::{Deserialize, Serialize};

/// One line of the external-manufacturing budget, in millions of dollars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetLine {
    pub budget_type: String,
    pub partner: String,
    pub program: String,
    pub annual_budget_m: f64,
    pub actuals_ytd_m: f64,
}

impl BudgetLine {
    /// Actuals as a percentage of the annual budget; `None` when the line
    /// has no budget to spend against.
    pub fn percent_spent(&self) -> Option<f64> {
        if self.annual_budget_m > 0.0 {
            Some(self.actuals_ytd_m / self.annual_budget_m * 100.0)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InitiativeStatus {
    Planned,
    InProgress,
    Complete,
}

/// A continuous-improvement initiative in the operational-excellence
/// portfolio. Impact is annualized savings in $K/yr; cost is one-time
/// implementation spend in $K.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Initiative {
    pub project_id: String,
    pub title: String,
    pub partner: String,
    pub status: InitiativeStatus,
    pub financial_impact_k_yr: f64,
    pub implementation_cost_k: f64,
    /// Technical feasibility, scored 1 (hard) to 5 (easy).
    pub feasibility: u8,
}

impl Initiative {
    /// Annualized savings per implementation dollar; `None` for free
    /// initiatives, where a ratio is meaningless.
    pub fn roi(&self) -> Option<f64> {
        if self.implementation_cost_k > 0.0 {
            Some(self.financial_impact_k_yr / self.implementation_cost_k)
        } else {
            None
        }
    }
}
