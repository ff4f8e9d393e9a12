//! The fixed battery of quality checks
//!
//! Each check inspects one aspect of a rectangular batch and returns a
//! [`CheckOutcome`]: the check result plus the failing-row subset when rows
//! can fail individually. Checks are independent of each other and of any
//! persistence concern; exporting failing rows is the runner's job.

use crate::constants::{EXPECTED_COLUMNS, STATUSES, check_names};
use crate::config::QualityCheckConfig;
use crate::Result;
use chrono::NaiveDateTime;
use polars::prelude::*;
use std::collections::HashMap;

use super::report::{CheckResult, CheckStatus};

/// Result of one check plus its failing rows, when any
#[derive(Debug)]
pub struct CheckOutcome {
    pub result: CheckResult,
    /// Non-empty failing subset; `None` when the check passed or is batch-level
    pub failing_rows: Option<DataFrame>,
}

impl CheckOutcome {
    fn passing(result: CheckResult) -> Self {
        Self {
            result,
            failing_rows: None,
        }
    }

    fn failing(result: CheckResult, rows: DataFrame) -> Self {
        Self {
            result,
            failing_rows: Some(rows),
        }
    }
}

/// Compare actual columns against the expected fixed set
///
/// Missing expected columns fail the check; extra columns are reported in the
/// diagnostics but do not fail it.
pub fn check_schema_columns(df: &DataFrame) -> CheckOutcome {
    let actual: Vec<String> = df
        .get_columns()
        .iter()
        .map(|c| c.name().to_string())
        .collect();

    let missing: Vec<String> = EXPECTED_COLUMNS
        .iter()
        .filter(|expected| !actual.iter().any(|a| a == *expected))
        .map(|c| c.to_string())
        .collect();
    let extra: Vec<String> = actual
        .iter()
        .filter(|a| !EXPECTED_COLUMNS.contains(&a.as_str()))
        .cloned()
        .collect();

    let status = if missing.is_empty() {
        CheckStatus::Pass
    } else {
        CheckStatus::Fail
    };

    CheckOutcome::passing(
        CheckResult::new(check_names::SCHEMA_COLUMNS, status).with_schema_diff(missing, extra),
    )
}

/// Fail when any row has a null value in the given column
pub fn check_not_null(df: &DataFrame, column: &str, check_name: &str) -> Result<CheckOutcome> {
    let series = df.column(column)?.as_materialized_series();
    let mask = series.is_null();
    finish_row_check(df, CheckResult::new(check_name, CheckStatus::Pass), &mask)
}

/// Fail when any row's status is outside the allowed domain
///
/// A null status is outside the domain too; the dedicated not-null check
/// reports it separately.
pub fn check_status_domain(df: &DataFrame) -> Result<CheckOutcome> {
    let series = df.column("status")?.as_materialized_series();
    let statuses = series.str()?;

    let flags: Vec<bool> = statuses
        .into_iter()
        .map(|value| match value {
            Some(status) => !STATUSES.contains(&status),
            None => true,
        })
        .collect();
    let mask = BooleanChunked::from_slice("outside_domain".into(), &flags);

    let mut allowed: Vec<String> = STATUSES.iter().map(|s| s.to_string()).collect();
    allowed.sort();

    let template =
        CheckResult::new(check_names::STATUS_DOMAIN, CheckStatus::Pass).with_allowed(allowed);
    finish_row_check(df, template, &mask)
}

/// Fail when any `tx_id` appears more than once
///
/// Exports every row sharing a duplicated id, not just the later extras.
pub fn check_unique_tx_id(df: &DataFrame) -> Result<CheckOutcome> {
    let series = df.column("tx_id")?.as_materialized_series();
    let ids = series.str()?;

    let mut counts: HashMap<Option<&str>, usize> = HashMap::new();
    for id in ids.into_iter() {
        *counts.entry(id).or_insert(0) += 1;
    }

    let flags: Vec<bool> = ids.into_iter().map(|id| counts[&id] > 1).collect();
    let mask = BooleanChunked::from_slice("duplicated".into(), &flags);

    let template = CheckResult::new(check_names::UNIQUE_TX_ID, CheckStatus::Pass);
    finish_row_check(df, template, &mask)
}

/// Fail when any row's amount is null or outside the configured range
pub fn check_amount_range(df: &DataFrame, config: &QualityCheckConfig) -> Result<CheckOutcome> {
    let series = df
        .column("amount")?
        .as_materialized_series()
        .cast(&DataType::Float64)?;
    let amounts = series.f64()?;

    let flags: Vec<bool> = amounts
        .into_iter()
        .map(|value| match value {
            Some(amount) => amount < config.amount_min || amount > config.amount_max,
            None => true,
        })
        .collect();
    let mask = BooleanChunked::from_slice("out_of_range".into(), &flags);

    let template = CheckResult::new(check_names::AMOUNT_RANGE, CheckStatus::Pass)
        .with_range(config.amount_min, config.amount_max);
    finish_row_check(df, template, &mask)
}

/// Fail when any row's timestamp is null or outside the configured window
pub fn check_timestamp_window(df: &DataFrame, config: &QualityCheckConfig) -> Result<CheckOutcome> {
    let series = df.column("tx_timestamp")?.as_materialized_series();
    let timestamps: Vec<Option<NaiveDateTime>> = series.datetime()?.as_datetime_iter().collect();

    let flags: Vec<bool> = timestamps
        .into_iter()
        .map(|value| match value {
            Some(ts) => ts < config.time_min || ts > config.time_max,
            None => true,
        })
        .collect();
    let mask = BooleanChunked::from_slice("outside_window".into(), &flags);

    let template = CheckResult::new(check_names::TIMESTAMP_WINDOW, CheckStatus::Pass).with_window(
        iso_timestamp(config.time_min),
        iso_timestamp(config.time_max),
    );
    finish_row_check(df, template, &mask)
}

/// Resolve a row-level mask into a pass or a fail-with-subset outcome
fn finish_row_check(
    df: &DataFrame,
    template: CheckResult,
    mask: &BooleanChunked,
) -> Result<CheckOutcome> {
    if mask.any() {
        let failing = df.filter(mask)?;
        let result = CheckResult {
            status: CheckStatus::Fail,
            ..template
        };
        Ok(CheckOutcome::failing(result, failing))
    } else {
        Ok(CheckOutcome::passing(template))
    }
}

fn iso_timestamp(value: NaiveDateTime) -> String {
    value.format("%Y-%m-%dT%H:%M:%S").to_string()
}
