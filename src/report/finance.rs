// src/report/finance.rs

use serde::{Deserialize, Serialize};

use crate::records::{BudgetLine, Initiative, InitiativeStatus};

/// Program-level budget position, in millions of dollars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSummary {
    pub total_budget_m: f64,
    pub total_actuals_m: f64,
    /// `None` when there is no budget to measure against.
    pub percent_spent: Option<f64>,
}

impl BudgetSummary {
    pub fn from_lines(lines: &[BudgetLine]) -> Self {
        let total_budget: f64 = lines.iter().map(|l| l.annual_budget_m).sum();
        let total_actuals: f64 = lines.iter().map(|l| l.actuals_ytd_m).sum();
        let percent_spent = if total_budget > 0.0 {
            Some(total_actuals / total_budget * 100.0)
        } else {
            None
        };
        Self {
            total_budget_m: total_budget,
            total_actuals_m: total_actuals,
            percent_spent,
        }
    }
}

/// Impact of the operational-excellence portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpexSummary {
    pub total_initiatives: usize,
    pub completed_initiatives: usize,
    /// Annualized savings still on the table: impact of every initiative
    /// not yet complete, in $K/yr.
    pub potential_annual_savings_k: f64,
    /// Mean ROI over initiatives with a nonzero implementation cost.
    pub avg_roi: Option<f64>,
}

impl OpexSummary {
    pub fn from_initiatives(initiatives: &[Initiative]) -> Self {
        let completed = initiatives
            .iter()
            .filter(|i| i.status == InitiativeStatus::Complete)
            .count();
        let potential: f64 = initiatives
            .iter()
            .filter(|i| i.status != InitiativeStatus::Complete)
            .map(|i| i.financial_impact_k_yr)
            .sum();
        let rois: Vec<f64> = initiatives.iter().filter_map(Initiative::roi).collect();
        let avg_roi = if rois.is_empty() {
            None
        } else {
            Some(rois.iter().sum::<f64>() / rois.len() as f64)
        };
        Self {
            total_initiatives: initiatives.len(),
            completed_initiatives: completed,
            potential_annual_savings_k: potential,
            avg_roi,
        }
    }
}
