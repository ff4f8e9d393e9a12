//! Storage collaborators for the pipeline
//!
//! Everything in this module is plumbing around the core transforms: loading
//! raw delimited-text batches, converting between typed records and
//! DataFrames, persisting the clean dataset to Parquet and SQLite, and
//! writing report artifacts. The core components never touch storage
//! directly; they receive batches and hand back batches or reports.

pub mod csv_source;
pub mod frame;
pub mod parquet_store;
pub mod report_writer;
pub mod sqlite_store;

#[cfg(test)]
pub mod tests;

// Re-export main entry points for easy access
pub use csv_source::{load_raw_csv, write_raw_csv};
pub use frame::{frame_to_records, records_to_frame};
pub use parquet_store::{read_parquet, write_parquet};
pub use report_writer::{CsvFailureSink, write_quality_report};
pub use sqlite_store::load_into_sqlite;
