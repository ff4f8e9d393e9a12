//! End-to-end pipeline integration tests
//!
//! Exercises the full stage sequence against a temporary base directory:
//! synthetic generation, cleaning, Parquet and SQLite persistence, quality
//! checks with report export, and KPI report export.

use bankops_processor::app::services::cleaner::clean;
use bankops_processor::app::services::kpis::export::export_reports;
use bankops_processor::app::services::quality::run_quality_checks;
use bankops_processor::app::services::storage::{
    CsvFailureSink, frame_to_records, load_into_sqlite, load_raw_csv, read_parquet,
    records_to_frame, write_parquet, write_quality_report, write_raw_csv,
};
use bankops_processor::app::services::synthetic;
use bankops_processor::config::Config;
use rusqlite::Connection;
use tempfile::TempDir;

fn pipeline_config(temp_dir: &TempDir) -> Config {
    let mut config = Config::with_base(temp_dir.path());
    config.synthetic.rows = 400;
    config
}

#[test]
fn full_pipeline_produces_consistent_artifacts() {
    let temp_dir = TempDir::new().unwrap();
    let config = pipeline_config(&temp_dir);
    config.paths.ensure_directories().unwrap();

    // ETL: synthetic input, clean, persist to both stores
    let records = synthetic::generate(&config.synthetic);
    write_raw_csv(&records, &config.paths.raw_csv()).unwrap();

    let raw = load_raw_csv(&config.paths.raw_csv()).unwrap();
    assert_eq!(raw.len(), 400);

    let cleaned = clean(raw, &config.cleaning);
    assert!(cleaned.row_count() > 0);

    let mut df = records_to_frame(&cleaned.transactions).unwrap();
    write_parquet(&mut df, &config.paths.clean_parquet()).unwrap();
    load_into_sqlite(&cleaned.transactions, &config.paths.sqlite_db()).unwrap();

    // Relational store agrees with the clean batch
    let conn = Connection::open(config.paths.sqlite_db()).unwrap();
    let sql_rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM transactions", [], |row| row.get(0))
        .unwrap();
    assert_eq!(sql_rows as usize, cleaned.row_count());

    // Quality: a freshly cleaned dataset passes every check
    let persisted = read_parquet(&config.paths.clean_parquet()).unwrap();
    let mut sink = CsvFailureSink::new(config.paths.reports_dir());
    let report = run_quality_checks(&persisted, &config.quality, &mut sink).unwrap();
    assert!(report.passed(), "clean dataset should pass all checks");
    assert_eq!(report.summary.rows_evaluated, cleaned.row_count());

    write_quality_report(&report, &config.paths.quality_report()).unwrap();
    assert!(config.paths.quality_report().exists());

    // KPIs: six reports whose totals agree with the clean batch
    let batch = frame_to_records(&persisted).unwrap();
    let written = export_reports(&batch, &config.paths.reports_dir(), "bankops").unwrap();
    assert_eq!(written.len(), 6);

    let overall = std::fs::read_to_string(&written[0]).unwrap();
    let total_field = overall.lines().nth(1).unwrap().split(',').next().unwrap();
    assert_eq!(total_field, cleaned.row_count().to_string());
}

#[test]
fn pipeline_rerun_replaces_persisted_state() {
    let temp_dir = TempDir::new().unwrap();
    let config = pipeline_config(&temp_dir);
    config.paths.ensure_directories().unwrap();

    let records = synthetic::generate(&config.synthetic);
    let cleaned = clean(records, &config.cleaning);

    // First run persists the full batch, second run a smaller one.
    let mut df = records_to_frame(&cleaned.transactions).unwrap();
    write_parquet(&mut df, &config.paths.clean_parquet()).unwrap();
    load_into_sqlite(&cleaned.transactions, &config.paths.sqlite_db()).unwrap();

    let smaller = &cleaned.transactions[..10];
    let mut df = records_to_frame(smaller).unwrap();
    write_parquet(&mut df, &config.paths.clean_parquet()).unwrap();
    load_into_sqlite(smaller, &config.paths.sqlite_db()).unwrap();

    let persisted = read_parquet(&config.paths.clean_parquet()).unwrap();
    assert_eq!(persisted.height(), 10);

    let conn = Connection::open(config.paths.sqlite_db()).unwrap();
    let sql_rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM transactions", [], |row| row.get(0))
        .unwrap();
    assert_eq!(sql_rows, 10);
}

#[test]
fn cleaning_synthetic_input_is_idempotent_through_storage() {
    let temp_dir = TempDir::new().unwrap();
    let config = pipeline_config(&temp_dir);
    config.paths.ensure_directories().unwrap();

    let cleaned = clean(synthetic::generate(&config.synthetic), &config.cleaning);

    // Round-trip through Parquet, then decode and verify the invariants hold.
    let mut df = records_to_frame(&cleaned.transactions).unwrap();
    write_parquet(&mut df, &config.paths.clean_parquet()).unwrap();
    let decoded = frame_to_records(&read_parquet(&config.paths.clean_parquet()).unwrap()).unwrap();

    assert_eq!(decoded, cleaned.transactions);
}
