// src/file/export.rs

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::analysis::ParetoBucket;
use crate::report::ProcessReport;

/// Saves a process report as pretty-printed RON.
pub fn save_report(path: &Path, report: &ProcessReport) -> Result<()> {
    let content = ron::ser::to_string_pretty(
        report,
        ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .separate_tuple_members(true),
    )?;
    fs::write(path, content)
        .with_context(|| format!("Failed to write report file: {}", path.display()))?;
    Ok(())
}

/// Loads a previously saved process report.
pub fn load_report(path: &Path) -> Result<ProcessReport> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read report file: {}", path.display()))?;
    ron::from_str(&content)
        .with_context(|| format!("Failed to parse report file: {}", path.display()))
}

/// Writes Pareto buckets as CSV, one row per bucket in ranked order.
pub fn write_pareto_csv(path: &Path, buckets: &[ParetoBucket]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create Pareto file: {}", path.display()))?;
    for bucket in buckets {
        writer.serialize(bucket)?;
    }
    writer.flush()?;
    Ok(())
}
