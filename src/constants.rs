//! Application constants for BankOps processor
//!
//! This module contains the closed value domains, schema definitions, and
//! fixed artifact names used throughout the pipeline.

// =============================================================================
// Value Domains
// =============================================================================

/// Allowed transaction channels
pub const CHANNELS: &[&str] = &["WEB", "APP", "POS"];

/// Allowed transaction statuses
pub const STATUSES: &[&str] = &["APPROVED", "DECLINED", "REFUNDED", "CHARGEBACK"];

/// Fallback country applied when the raw record carries none
pub const DEFAULT_COUNTRY: &str = "CO";

// =============================================================================
// Schema
// =============================================================================

/// Expected columns of the persisted transaction dataset, in storage order
pub const EXPECTED_COLUMNS: &[&str] = &[
    "tx_id",
    "merchant_id",
    "channel",
    "country",
    "amount",
    "status",
    "tx_timestamp",
];

/// Name of the relational table holding the clean dataset
pub const TRANSACTIONS_TABLE: &str = "transactions";

// =============================================================================
// Cleaning Bounds
// =============================================================================

/// Maximum amount retained by the cleaning transform
pub const CLEAN_AMOUNT_MAX: f64 = 10_000.0;

// =============================================================================
// Quality Check Bounds
// =============================================================================

/// Quality check names, in report order
pub mod check_names {
    pub const SCHEMA_COLUMNS: &str = "schema_columns";
    pub const NOT_NULL_KEYS: &str = "not_null_keys";
    pub const NOT_NULL_TIMESTAMP: &str = "not_null_timestamp";
    pub const NOT_NULL_STATUS: &str = "not_null_status";
    pub const STATUS_DOMAIN: &str = "status_domain";
    pub const UNIQUE_TX_ID: &str = "unique_tx_id";
    pub const AMOUNT_RANGE: &str = "amount_range";
    pub const TIMESTAMP_WINDOW: &str = "timestamp_window";
}

/// Number of checks in the fixed battery
pub const CHECKS_TOTAL: usize = 8;

/// Amount bounds validated by the quality checker
///
/// Deliberately looser than [`CLEAN_AMOUNT_MAX`]: the checker validates
/// arbitrary persisted input, not only output of the cleaning transform.
pub const QC_AMOUNT_MIN: f64 = 0.0;
pub const QC_AMOUNT_MAX: f64 = 100_000.0;

/// Accepted timestamp window, inclusive, as (year, month, day) triples
pub const QC_TIME_MIN: (i32, u32, u32) = (2018, 1, 1);
pub const QC_TIME_MAX: (i32, u32, u32) = (2030, 12, 31);

// =============================================================================
// Artifact Names
// =============================================================================

/// Fixed file and directory names under the configured base directory
pub mod artifacts {
    pub const RAW_DIR: &str = "data/raw";
    pub const PROCESSED_DIR: &str = "data/processed";
    pub const REPORTS_DIR: &str = "reports";
    pub const SQL_DIR: &str = "sql";

    pub const RAW_CSV: &str = "transactions_sample.csv";
    pub const CLEAN_PARQUET: &str = "transactions_clean.parquet";
    pub const SQLITE_DB: &str = "bank_ops.sqlite";
    pub const QUALITY_REPORT: &str = "quality_report.json";
    pub const ANALYTICS_SQL: &str = "analytics_queries.sql";

    /// Prefix for failing-row exports, completed with the check's subset name
    pub const QC_FAIL_PREFIX: &str = "qc_fail_";
}

/// Default prefix for KPI report exports
pub const DEFAULT_REPORT_PREFIX: &str = "bankops";

// =============================================================================
// Synthetic Data
// =============================================================================

/// Value pools for synthetic raw batches
pub mod synthetic {
    /// Merchant identifiers drawn by the generator
    pub const MERCHANTS: &[&str] = &["M001", "M002", "M003", "M004", "M005"];

    /// Countries drawn by the generator
    pub const COUNTRIES: &[&str] = &["CO", "MX", "CL", "PE", "AR"];

    /// Channel draw weights, aligned with [`super::CHANNELS`]
    pub const CHANNEL_WEIGHTS: &[f64] = &[0.45, 0.40, 0.15];

    /// Status draw weights, aligned with [`super::STATUSES`]
    pub const STATUS_WEIGHTS: &[f64] = &[0.82, 0.12, 0.04, 0.02];

    /// Fraction of rows with the country blanked out
    pub const NULL_COUNTRY_RATE: f64 = 0.01;

    /// Fraction of rows with the amount inflated into outlier territory
    pub const OUTLIER_RATE: f64 = 0.005;

    /// Outlier multiplier
    pub const OUTLIER_FACTOR: f64 = 6.0;

    pub const DEFAULT_ROWS: usize = 5_000;
    pub const DEFAULT_SEED: u64 = 42;
}
