//! KPI report orchestration
//!
//! Computes the overall summary plus the five fixed groupings and hands each
//! result to the report writer. The groupings and their report-name suffixes
//! are fixed; the aggregator itself stays generic over dimension tuples.

use crate::Result;
use crate::app::models::Transaction;
use crate::app::services::storage::report_writer;
use std::path::{Path, PathBuf};
use tracing::info;

use super::aggregator::{kpis_by, kpis_overall};
use super::summary::{Dimension, GroupedKpis, OverallKpis};

/// Fixed report groupings: (report-name suffix, dimension tuple)
pub const REPORT_GROUPINGS: &[(&str, &[Dimension])] = &[
    ("by_date", &[Dimension::Date]),
    ("by_channel", &[Dimension::Channel]),
    ("by_country", &[Dimension::Country]),
    ("by_merchant", &[Dimension::Merchant]),
    ("by_hour", &[Dimension::Date, Dimension::Hour]),
];

/// Overall plus grouped KPI results for one batch
#[derive(Debug, Clone)]
pub struct KpiReportSet {
    pub overall: OverallKpis,
    /// Grouped summaries, keyed by report-name suffix, in export order
    pub grouped: Vec<(&'static str, GroupedKpis)>,
}

impl KpiReportSet {
    /// Look up a grouped summary by its report-name suffix
    pub fn grouping(&self, suffix: &str) -> Option<&GroupedKpis> {
        self.grouped
            .iter()
            .find(|(name, _)| *name == suffix)
            .map(|(_, grouped)| grouped)
    }
}

/// Compute the overall summary and all fixed groupings for a batch
pub fn compute_reports(batch: &[Transaction]) -> KpiReportSet {
    let overall = kpis_overall(batch);
    let grouped = REPORT_GROUPINGS
        .iter()
        .map(|(suffix, dimensions)| (*suffix, kpis_by(batch, dimensions)))
        .collect();

    KpiReportSet { overall, grouped }
}

/// Compute and export the six KPI reports as delimited-text files
///
/// # Arguments
///
/// * `batch` - Clean transaction batch
/// * `reports_dir` - Destination directory (created by the caller)
/// * `prefix` - Report file prefix, e.g. "bankops"
///
/// # Returns
///
/// Paths of the written report files, overall first
pub fn export_reports(
    batch: &[Transaction],
    reports_dir: &Path,
    prefix: &str,
) -> Result<Vec<PathBuf>> {
    let reports = compute_reports(batch);
    let mut written = Vec::with_capacity(1 + reports.grouped.len());

    let overall_path = reports_dir.join(format!("{}_kpi_overall.csv", prefix));
    report_writer::write_overall_kpis(&reports.overall, &overall_path)?;
    written.push(overall_path);

    for (suffix, grouped) in &reports.grouped {
        let path = reports_dir.join(format!("{}_kpi_{}.csv", prefix, suffix));
        report_writer::write_grouped_kpis(grouped, &path)?;
        written.push(path);
    }

    info!(
        "Exported {} KPI reports for {} rows to {}",
        written.len(),
        reports.overall.total_tx,
        reports_dir.display()
    );

    Ok(written)
}
