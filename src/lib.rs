//! BankOps Processor Library
//!
//! A Rust library for turning raw payment-transaction batches into a clean,
//! audited analytical dataset with exportable KPI reports.
//!
//! This library provides tools for:
//! - Ingesting raw transaction batches from delimited-text sources
//! - Cleaning and normalizing records into a canonical schema with enforced invariants
//! - Running a fixed battery of data-quality checks with failing-row exports
//! - Computing overall and dimension-grouped KPI aggregates in a single pass
//! - Persisting the clean dataset to Parquet and SQLite for downstream analysis

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod cleaner;
        pub mod kpis;
        pub mod quality;
        pub mod storage;
        pub mod synthetic;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Channel, RawRecord, Transaction, TxStatus};
pub use config::Config;

/// Result type alias for BankOps processing operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for BankOps processing operations
///
/// Only structural and I/O problems surface here. Malformed record values are
/// resolved by the cleaning transform's default/drop policy, and invariant
/// violations surface as FAIL entries in the quality report, so neither class
/// is represented as an error variant.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// DataFrame operation error
    #[error("DataFrame error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Relational store error
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Report serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}
