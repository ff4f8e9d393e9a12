//! Tests for the quality check battery
//!
//! Fixtures build small DataFrames directly so nulls, bad domains, and
//! duplicates can be injected without going through the cleaning transform.


// Test helper functions and fixtures
use crate::Result;
use crate::app::services::quality::runner::FailureSink;
use chrono::{NaiveDate, NaiveDateTime};
use polars::prelude::*;
use std::path::PathBuf;

/// Timestamp fixture helper
pub fn ts(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, 0, 0))
        .expect("fixture date is valid")
}

/// Two well-formed rows; every check passes on this frame
pub fn ok_frame() -> DataFrame {
    df!(
        "tx_id" => ["A1", "A2"],
        "merchant_id" => ["M1", "M1"],
        "channel" => ["WEB", "APP"],
        "country" => ["CO", "CO"],
        "amount" => [100.0, 50.0],
        "status" => ["APPROVED", "DECLINED"],
        "tx_timestamp" => [ts(2025, 1, 1, 10), ts(2025, 1, 1, 11)],
    )
    .expect("fixture frame builds")
}

/// Frame with per-row nullable columns for injecting bad values
pub fn frame_with(
    tx_ids: Vec<Option<&str>>,
    statuses: Vec<Option<&str>>,
    amounts: Vec<Option<f64>>,
    timestamps: Vec<Option<NaiveDateTime>>,
) -> DataFrame {
    let rows = tx_ids.len();
    df!(
        "tx_id" => tx_ids,
        "merchant_id" => vec![Some("M1"); rows],
        "channel" => vec![Some("WEB"); rows],
        "country" => vec![Some("CO"); rows],
        "amount" => amounts,
        "status" => statuses,
        "tx_timestamp" => timestamps,
    )
    .expect("fixture frame builds")
}

/// Sink that records exported subsets instead of writing files
#[derive(Debug, Default)]
pub struct RecordingSink {
    /// (subset name, exported row count) per failed check
    pub exported: Vec<(String, usize)>,
}

impl FailureSink for RecordingSink {
    fn export(&mut self, subset_name: &str, rows: &DataFrame) -> Result<Option<PathBuf>> {
        self.exported.push((subset_name.to_string(), rows.height()));
        Ok(Some(PathBuf::from(format!("memory://{}", subset_name))))
    }
}
