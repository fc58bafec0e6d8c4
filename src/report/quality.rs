// src/report/quality.rs

use std::collections::BTreeMap;

use crate::analysis::{aggregate, ParetoBucket};
use crate::records::{Priority, QualityRecord};

/// Pareto ranking of open quality records by record type, the prioritization
/// view for root-cause work: the few record types generating most of the
/// quality-system load.
pub fn record_type_pareto(records: &[QualityRecord]) -> Vec<ParetoBucket> {
    let labels: Vec<&str> = records.iter().map(|r| r.record_type.label()).collect();
    aggregate(&labels)
}

/// Open record count per priority, highest priority first.
pub fn open_by_priority(records: &[QualityRecord]) -> Vec<(Priority, usize)> {
    let mut counts: BTreeMap<Priority, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(record.priority).or_default() += 1;
    }
    counts.into_iter().rev().collect()
}

/// Age in days of the oldest open record, the aging headline number.
pub fn oldest_open_days(records: &[QualityRecord]) -> Option<u32> {
    records.iter().map(|r| r.days_open).max()
}
