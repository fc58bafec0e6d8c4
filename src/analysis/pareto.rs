// src/analysis/pareto.rs

use serde::{Deserialize, Serialize};

/// One bar of a Pareto analysis: a category, its event count, and the
/// running share of all events up to and including this bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParetoBucket {
    pub category: String,
    pub count: u64,
    /// Monotonically non-decreasing; reaches 100.0 at the last bucket.
    pub cumulative_percent: f64,
}

/// Ranks categorical events by frequency with a cumulative-percentage curve.
///
/// Buckets come back sorted by count descending; ties keep the order in
/// which the categories were first seen in the input (stable sort). An empty
/// input yields an empty result, not an error.
pub fn aggregate<S: AsRef<str>>(events: &[S]) -> Vec<ParetoBucket> {
    // First-seen order doubles as the tie-break key, so count into a Vec
    // rather than a map.
    let mut counts: Vec<(String, u64)> = Vec::new();
    for event in events {
        let label = event.as_ref();
        match counts.iter_mut().find(|(c, _)| c == label) {
            Some((_, n)) => *n += 1,
            None => counts.push((label.to_string(), 1)),
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let total = events.len() as f64;
    let mut running = 0u64;
    counts
        .into_iter()
        .map(|(category, count)| {
            running += count;
            ParetoBucket {
                category,
                count,
                cumulative_percent: running as f64 / total * 100.0,
            }
        })
        .collect()
}
