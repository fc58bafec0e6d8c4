// src/records/quality.rs
use serde::{Deserialize, Serialize};

/// Category of an open quality-system record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordType {
    Deviation,
    Capa,
    ChangeRequest,
    OosInvestigation,
}

impl RecordType {
    /// Display label, also the category key for Pareto aggregation.
    pub fn label(&self) -> &'static str {
        match self {
            RecordType::Deviation => "Deviation",
            RecordType::Capa => "CAPA",
            RecordType::ChangeRequest => "Change Request",
            RecordType::OosInvestigation => "OOS Investigation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

/// An open deviation, CAPA, or change request in a partner's quality system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityRecord {
    pub record_id: String,
    pub partner: String,
    pub record_type: RecordType,
    pub priority: Priority,
    pub days_open: u32,
    /// Batch that triggered the record, when traceable to one.
    pub batch_id: Option<String>,
}
