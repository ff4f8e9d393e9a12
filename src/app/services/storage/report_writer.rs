//! Report artifact persistence
//!
//! Writes the quality report document, the per-check failing-row exports, and
//! the six KPI report CSVs. All destinations live under the configured
//! reports directory.

use crate::app::services::kpis::summary::{GroupedKpis, OverallKpis};
use crate::app::services::quality::report::QualityReport;
use crate::app::services::quality::runner::FailureSink;
use crate::constants::artifacts;
use crate::{Error, Result};
use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Sink that persists failing-row subsets as `qc_fail_<name>.csv` files
#[derive(Debug)]
pub struct CsvFailureSink {
    reports_dir: PathBuf,
}

impl CsvFailureSink {
    /// Create a sink writing under the given reports directory
    pub fn new(reports_dir: impl Into<PathBuf>) -> Self {
        Self {
            reports_dir: reports_dir.into(),
        }
    }
}

impl FailureSink for CsvFailureSink {
    fn export(&mut self, subset_name: &str, rows: &DataFrame) -> Result<Option<PathBuf>> {
        if rows.is_empty() {
            return Ok(None);
        }
        let path = self
            .reports_dir
            .join(format!("{}{}.csv", artifacts::QC_FAIL_PREFIX, subset_name));
        write_failing_rows(rows, &path)?;
        Ok(Some(path))
    }
}

/// Write one failing-row subset as a delimited-text file
pub fn write_failing_rows(rows: &DataFrame, path: &Path) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| Error::io(format!("Failed to create {}", path.display()), e))?;
    CsvWriter::new(file).finish(&mut rows.clone())?;

    debug!("Exported {} failing rows to {}", rows.height(), path.display());
    Ok(())
}

/// Persist the quality report as a JSON document
pub fn write_quality_report(report: &QualityReport, path: &Path) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| Error::io(format!("Failed to create {}", path.display()), e))?;
    serde_json::to_writer_pretty(file, report)?;

    info!("Wrote quality report to {}", path.display());
    Ok(())
}

/// Write the overall KPI summary as a single-row CSV
pub fn write_overall_kpis(overall: &OverallKpis, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| {
        Error::csv_parsing(path.display().to_string(), "Failed to open writer", Some(e))
    })?;
    writer.serialize(overall).map_err(|e| {
        Error::csv_parsing(path.display().to_string(), "Failed to serialize summary", Some(e))
    })?;
    writer
        .flush()
        .map_err(|e| Error::io(format!("Failed to flush {}", path.display()), e))?;

    debug!("Wrote overall KPI report to {}", path.display());
    Ok(())
}

/// Write a grouped KPI summary as a CSV with dimension and metric columns
pub fn write_grouped_kpis(grouped: &GroupedKpis, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| {
        Error::csv_parsing(path.display().to_string(), "Failed to open writer", Some(e))
    })?;

    writer.write_record(grouped.column_names()).map_err(|e| {
        Error::csv_parsing(path.display().to_string(), "Failed to write header", Some(e))
    })?;

    for group in &grouped.groups {
        let mut record: Vec<String> = group.key.iter().map(|k| k.to_string()).collect();
        record.push(group.total_tx.to_string());
        record.push(group.total_amount.to_string());
        record.push(group.approved_tx.to_string());
        record.push(group.declined_tx.to_string());
        record.push(group.refunded_tx.to_string());
        record.push(group.chargeback_tx.to_string());
        record.push(group.avg_ticket.to_string());
        record.push(group.approval_rate.to_string());
        record.push(group.decline_rate.to_string());
        record.push(group.refund_rate.to_string());
        record.push(group.chargeback_rate.to_string());
        writer.write_record(&record).map_err(|e| {
            Error::csv_parsing(path.display().to_string(), "Failed to write group", Some(e))
        })?;
    }

    writer
        .flush()
        .map_err(|e| Error::io(format!("Failed to flush {}", path.display()), e))?;

    debug!(
        "Wrote grouped KPI report ({} groups) to {}",
        grouped.group_count(),
        path.display()
    );
    Ok(())
}
