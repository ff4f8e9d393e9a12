//! Quality check orchestration
//!
//! Runs the fixed battery in report order and hands each failing-row subset
//! to a [`FailureSink`]. The sink is the only persistence seam: the runner
//! itself never touches storage, so the checker stays testable in isolation.

use crate::Result;
use crate::config::QualityCheckConfig;
use crate::constants::check_names;
use polars::prelude::DataFrame;
use std::path::PathBuf;
use tracing::{info, warn};

use super::checks::{
    CheckOutcome, check_amount_range, check_not_null, check_schema_columns, check_status_domain,
    check_timestamp_window, check_unique_tx_id,
};
use super::report::{CheckResult, QualityReport};

/// Persistence seam for failing-row subsets
///
/// Implementations decide where (and whether) a failing subset is written and
/// return the destination recorded in the report.
pub trait FailureSink {
    /// Persist the failing rows of one check under the given subset name
    fn export(&mut self, subset_name: &str, rows: &DataFrame) -> Result<Option<PathBuf>>;
}

/// Sink that drops every subset; for callers that only need the report
#[derive(Debug, Default)]
pub struct DiscardFailureSink;

impl FailureSink for DiscardFailureSink {
    fn export(&mut self, _subset_name: &str, _rows: &DataFrame) -> Result<Option<PathBuf>> {
        Ok(None)
    }
}

/// Run the full quality check battery against a batch
///
/// All checks run unconditionally; a FAIL never aborts the remaining checks,
/// so the report is total. Only structural problems (a missing expected
/// column reaching a row-level check, or a sink I/O failure) propagate as
/// errors.
///
/// # Arguments
///
/// * `df` - Batch to validate, with the expected column set
/// * `config` - Check bounds and window
/// * `sink` - Destination for failing-row subsets
pub fn run_quality_checks(
    df: &DataFrame,
    config: &QualityCheckConfig,
    sink: &mut dyn FailureSink,
) -> Result<QualityReport> {
    let rows_evaluated = df.height();
    info!("Running quality checks over {} rows", rows_evaluated);

    let mut checks = Vec::new();

    // 1) Schema: batch-level, no failing subset
    checks.push(check_schema_columns(df).result);

    // 2) Null checks on key fields
    checks.push(resolve(
        check_not_null(df, "tx_id", check_names::NOT_NULL_KEYS)?,
        "null_tx_id",
        sink,
    )?);
    checks.push(resolve(
        check_not_null(df, "tx_timestamp", check_names::NOT_NULL_TIMESTAMP)?,
        "null_timestamp",
        sink,
    )?);
    checks.push(resolve(
        check_not_null(df, "status", check_names::NOT_NULL_STATUS)?,
        "null_status",
        sink,
    )?);

    // 3) Status domain
    checks.push(resolve(check_status_domain(df)?, "bad_status", sink)?);

    // 4) Duplicates by tx_id
    checks.push(resolve(check_unique_tx_id(df)?, "duplicate_tx_id", sink)?);

    // 5) Amount range
    checks.push(resolve(
        check_amount_range(df, config)?,
        "amount_range",
        sink,
    )?);

    // 6) Timestamp window
    checks.push(resolve(
        check_timestamp_window(df, config)?,
        "timestamp_window",
        sink,
    )?);

    let report = QualityReport::from_checks(rows_evaluated, checks);
    if report.passed() {
        info!("Quality checks passed: {} checks", report.summary.checks_total);
    } else {
        warn!(
            "Quality checks failed: {} of {} checks",
            report.summary.checks_failed, report.summary.checks_total
        );
    }

    Ok(report)
}

/// Export a failing subset through the sink and record its destination
fn resolve(
    outcome: CheckOutcome,
    subset_name: &str,
    sink: &mut dyn FailureSink,
) -> Result<CheckResult> {
    let mut result = outcome.result;
    if let Some(rows) = outcome.failing_rows {
        warn!(
            "Check '{}' failed for {} rows",
            result.name,
            rows.height()
        );
        result.failed_rows_csv = sink
            .export(subset_name, &rows)?
            .map(|path| path.display().to_string());
    }
    Ok(result)
}
