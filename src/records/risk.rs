// src/records/risk.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MitigationStatus {
    Planned,
    InProgress,
    Complete,
    OnHold,
}

/// One entry in the risk mitigation register.
///
/// Probability and impact are scored 1-5 each, so the combined score is
/// bounded by 25.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskEntry {
    pub risk_id: String,
    /// Partner the risk applies to, or `None` for network-wide risks.
    pub partner: Option<String>,
    pub description: String,
    pub probability: u8,
    pub impact: u8,
    pub mitigation_status: MitigationStatus,
    pub mitigation_plan: String,
}

impl RiskEntry {
    /// Probability x impact, the register's ranking score.
    pub fn score(&self) -> u8 {
        self.probability * self.impact
    }

    /// True for risks still requiring active mitigation work.
    pub fn is_open(&self) -> bool {
        self.mitigation_status != MitigationStatus::Complete
    }

    /// True when the risk applies to the named partner, either directly or
    /// as a network-wide entry.
    pub fn applies_to(&self, partner: &str) -> bool {
        match &self.partner {
            Some(p) => p == partner,
            None => true,
        }
    }
}
