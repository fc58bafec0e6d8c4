// src/records/governance.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeetingType {
    QuarterlyBusinessReview,
    Audit,
    TechnicalReview,
    FaceToFace,
}

/// A logged governance engagement with a partner: QBR, audit, or technical
/// meeting, with the action items it generated and how many have closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Engagement {
    pub date: NaiveDate,
    pub partner: String,
    pub meeting_type: MeetingType,
    pub key_topics: String,
    pub actions_generated: u32,
    pub actions_closed: u32,
}

impl Engagement {
    pub fn open_actions(&self) -> u32 {
        self.actions_generated.saturating_sub(self.actions_closed)
    }
}
