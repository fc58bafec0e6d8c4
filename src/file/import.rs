// src/file/import.rs

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use crate::analysis::MetricSeries;
use crate::records::{BatchRecord, QualityRecord, RiskEntry};

#[derive(Debug, Deserialize)]
struct MeasurementRow {
    value: f64,
}

/// Loads an ordered measurement series from a headered CSV file with a
/// `value` column. Row order is preserved as measurement order.
///
/// Specification limits are not part of the file format; attach them with
/// [`MetricSeries::with_limits`] from wherever the caller keeps its specs.
///
/// Every row is validated here, once, so the analysis layer can assume
/// finite numbers.
pub fn load_series_csv(path: &Path, name: &str) -> Result<MetricSeries> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open measurement file: {}", path.display()))?;

    let mut values = Vec::new();
    for (index, row) in reader.deserialize().enumerate() {
        let row: MeasurementRow = row
            .with_context(|| format!("Malformed measurement row {} in {}", index + 1, path.display()))?;
        if !row.value.is_finite() {
            return Err(anyhow!(
                "Non-finite measurement at row {} in {}",
                index + 1,
                path.display()
            ));
        }
        values.push(row.value);
    }

    Ok(MetricSeries::new(name, values))
}

/// Loads master-schedule rows. Empty cells map to the optional fields
/// (actual cycle time, yield, deviation id) of in-flight batches.
pub fn load_batches_csv(path: &Path) -> Result<Vec<BatchRecord>> {
    read_records(path, "schedule")
}

/// Loads open quality-system records.
pub fn load_quality_csv(path: &Path) -> Result<Vec<QualityRecord>> {
    read_records(path, "quality log")
}

/// Loads the risk register, rejecting scores outside the 1-5 scoring scale.
pub fn load_risks_csv(path: &Path) -> Result<Vec<RiskEntry>> {
    let risks: Vec<RiskEntry> = read_records(path, "risk register")?;
    for risk in &risks {
        let in_scale = (1..=5).contains(&risk.probability) && (1..=5).contains(&risk.impact);
        if !in_scale {
            return Err(anyhow!(
                "Risk {} has probability/impact outside the 1-5 scale",
                risk.risk_id
            ));
        }
    }
    Ok(risks)
}

fn read_records<T: for<'de> Deserialize<'de>>(path: &Path, kind: &str) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open {} file: {}", kind, path.display()))?;

    let mut records = Vec::new();
    for (index, row) in reader.deserialize().enumerate() {
        let record = row
            .with_context(|| format!("Malformed {} row {} in {}", kind, index + 1, path.display()))?;
        records.push(record);
    }
    Ok(records)
}
