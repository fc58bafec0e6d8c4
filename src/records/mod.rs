// src/records/mod.rs
pub mod batch;
pub mod finance;
pub mod governance;
pub mod quality;
pub mod risk;

// Re-export commonly used types
pub use batch::{BatchRecord, BatchStatus};
pub use finance::{BudgetLine, Initiative, InitiativeStatus};
pub use governance::{Engagement, MeetingType};
pub use quality::{Priority, QualityRecord, RecordType};
pub use risk::{MitigationStatus, RiskEntry};
