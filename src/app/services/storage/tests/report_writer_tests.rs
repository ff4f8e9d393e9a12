//! Tests for report artifact persistence

use super::sample_batch;
use crate::app::services::quality::report::{CheckResult, CheckStatus, QualityReport};
use crate::app::services::quality::runner::FailureSink;
use crate::app::services::storage::frame::records_to_frame;
use crate::app::services::storage::report_writer::{CsvFailureSink, write_quality_report};
use tempfile::TempDir;

#[test]
fn failure_sink_writes_named_subset_files() {
    let temp_dir = TempDir::new().unwrap();
    let mut sink = CsvFailureSink::new(temp_dir.path());

    let rows = records_to_frame(&sample_batch()).unwrap();
    let path = sink.export("duplicate_tx_id", &rows).unwrap().unwrap();

    assert_eq!(
        path.file_name().unwrap().to_string_lossy(),
        "qc_fail_duplicate_tx_id.csv"
    );
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("tx_id,merchant_id,channel"));
    assert_eq!(content.lines().count(), 4);
}

#[test]
fn failure_sink_skips_empty_subsets() {
    let temp_dir = TempDir::new().unwrap();
    let mut sink = CsvFailureSink::new(temp_dir.path());

    let empty = records_to_frame(&[]).unwrap();
    assert!(sink.export("null_tx_id", &empty).unwrap().is_none());
    assert!(!temp_dir.path().join("qc_fail_null_tx_id.csv").exists());
}

#[test]
fn quality_report_persists_as_json_document() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("quality_report.json");

    let report = QualityReport::from_checks(
        7,
        vec![
            CheckResult::new("schema_columns", CheckStatus::Pass),
            CheckResult::new("unique_tx_id", CheckStatus::Fail),
        ],
    );
    write_quality_report(&report, &path).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["summary"]["rows_evaluated"], 7);
    assert_eq!(value["summary"]["checks_failed"], 1);
    assert_eq!(value["checks"][0]["name"], "schema_columns");
    assert_eq!(value["checks"][1]["status"], "FAIL");
}
