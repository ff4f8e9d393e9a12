//! Tests for Parquet, SQLite, and raw CSV persistence

use super::sample_batch;
use crate::Error;
use crate::app::models::RawRecord;
use crate::app::services::storage::csv_source::{load_raw_csv, write_raw_csv};
use crate::app::services::storage::frame::{frame_to_records, records_to_frame};
use crate::app::services::storage::parquet_store::{read_parquet, write_parquet};
use crate::app::services::storage::sqlite_store::load_into_sqlite;
use rusqlite::Connection;
use tempfile::TempDir;

#[test]
fn parquet_round_trip_preserves_the_batch() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("clean.parquet");

    let batch = sample_batch();
    let mut df = records_to_frame(&batch).unwrap();
    let bytes = write_parquet(&mut df, &path).unwrap();
    assert!(bytes > 0);

    let loaded = read_parquet(&path).unwrap();
    assert_eq!(frame_to_records(&loaded).unwrap(), batch);
}

#[test]
fn reading_a_missing_parquet_is_a_structural_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = read_parquet(&temp_dir.path().join("absent.parquet"));
    assert!(matches!(result, Err(Error::FileNotFound { .. })));
}

#[test]
fn sqlite_load_inserts_all_rows_and_builds_indexes() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("bank_ops.sqlite");

    let inserted = load_into_sqlite(&sample_batch(), &db_path).unwrap();
    assert_eq!(inserted, 3);

    let conn = Connection::open(&db_path).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM transactions", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 3);

    let indexes: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master
             WHERE type = 'index' AND name IN ('idx_tx_time', 'idx_tx_merchant')",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(indexes, 2);
}

#[test]
fn sqlite_reload_replaces_previous_content() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("bank_ops.sqlite");

    load_into_sqlite(&sample_batch(), &db_path).unwrap();
    load_into_sqlite(&sample_batch()[..1], &db_path).unwrap();

    let conn = Connection::open(&db_path).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM transactions", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn sqlite_timestamps_are_iso_text() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("bank_ops.sqlite");
    load_into_sqlite(&sample_batch(), &db_path).unwrap();

    let conn = Connection::open(&db_path).unwrap();
    let ts: String = conn
        .query_row(
            "SELECT tx_timestamp FROM transactions WHERE tx_id = 'T1'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(ts, "2025-01-01T10:00:00");
}

#[test]
fn raw_csv_round_trip_preserves_missing_fields() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("raw.csv");

    let records = vec![
        RawRecord {
            tx_id: Some("T1".to_string()),
            merchant_id: Some("M001".to_string()),
            channel: Some("WEB".to_string()),
            country: None,
            amount: Some("12.50".to_string()),
            status: Some("APPROVED".to_string()),
            tx_timestamp: Some("2025-01-01T10:00:00".to_string()),
        },
        RawRecord {
            tx_id: Some("T2".to_string()),
            merchant_id: Some("M002".to_string()),
            channel: None,
            country: Some("CO".to_string()),
            amount: None,
            status: None,
            tx_timestamp: Some("2025-01-01T11:00:00".to_string()),
        },
    ];

    write_raw_csv(&records, &path).unwrap();
    let loaded = load_raw_csv(&path).unwrap();

    assert_eq!(loaded, records);
}

#[test]
fn loading_a_missing_csv_is_a_structural_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = load_raw_csv(&temp_dir.path().join("absent.csv"));
    assert!(matches!(result, Err(Error::FileNotFound { .. })));
}
