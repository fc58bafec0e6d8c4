// src/report/governance.rs

use serde::{Deserialize, Serialize};

use crate::records::Engagement;

/// Effectiveness of the governance program: how many actions meetings
/// generate, and whether they actually close.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GovernanceSummary {
    pub engagements: usize,
    pub actions_generated: u32,
    pub actions_closed: u32,
    /// Percentage of generated actions that have closed. 100.0 when no
    /// actions exist — an empty funnel is not a delinquent one.
    pub closure_rate: f64,
}

impl GovernanceSummary {
    pub fn from_engagements(engagements: &[Engagement]) -> Self {
        let generated: u32 = engagements.iter().map(|e| e.actions_generated).sum();
        let closed: u32 = engagements.iter().map(|e| e.actions_closed).sum();
        let closure_rate = if generated > 0 {
            closed as f64 / generated as f64 * 100.0
        } else {
            100.0
        };
        Self {
            engagements: engagements.len(),
            actions_generated: generated,
            actions_closed: closed,
            closure_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::MeetingType;
    use chrono::NaiveDate;

    fn engagement(generated: u32, closed: u32) -> Engagement {
        Engagement {
            date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            partner: "WuXi".to_string(),
            meeting_type: MeetingType::TechnicalReview,
            key_topics: "Transfer readiness".to_string(),
            actions_generated: generated,
            actions_closed: closed,
        }
    }

    #[test]
    fn closure_rate_over_all_engagements() {
        let summary =
            GovernanceSummary::from_engagements(&[engagement(4, 3), engagement(6, 5)]);
        assert_eq!(summary.engagements, 2);
        assert_eq!(summary.actions_generated, 10);
        assert_eq!(summary.actions_closed, 8);
        assert!((summary.closure_rate - 80.0).abs() < 1e-12);
    }

    #[test]
    fn no_actions_means_full_closure() {
        let summary = GovernanceSummary::from_engagements(&[engagement(0, 0)]);
        assert!((summary.closure_rate - 100.0).abs() < 1e-12);
    }
}
