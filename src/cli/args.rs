//! Command-line argument definitions for BankOps processor
//!
//! This module defines the complete CLI interface using clap derive API.
//! Every pipeline stage is its own subcommand; all of them accept a base
//! directory override and a verbosity flag.

use crate::constants::DEFAULT_REPORT_PREFIX;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the BankOps transaction pipeline
///
/// Cleans raw payment-transaction batches into an audited analytical dataset
/// and exports quality and KPI reports.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "bankops-processor",
    version,
    about = "Clean payment-transaction batches and export quality and KPI reports",
    long_about = "A batch analytics pipeline for payment-transaction data. Ingests raw \
                  transaction records, cleans and normalizes them into a canonical dataset, \
                  persists the result to Parquet and SQLite, runs a fixed battery of \
                  data-quality checks, and exports tabular KPI reports."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the BankOps processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Run the ETL stage: ingest, clean, and persist the dataset
    Etl(EtlArgs),
    /// Compute KPI aggregates and export the six CSV reports
    Kpis(KpisArgs),
    /// Run the quality check battery and export the report
    Quality(QualityArgs),
    /// Execute the fixed analytical SQL script and print previews
    Query(QueryArgs),
    /// Generate a synthetic raw transaction batch
    Generate(GenerateArgs),
}

/// Arguments for the ETL command
#[derive(Debug, Clone, Parser)]
pub struct EtlArgs {
    /// Base directory holding data/, reports/, and sql/
    ///
    /// Defaults to the current working directory.
    #[arg(long = "base", value_name = "PATH", help = "Base directory for pipeline artifacts")]
    pub base: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Arguments for the KPIs command
#[derive(Debug, Clone, Parser)]
pub struct KpisArgs {
    /// Path to the clean Parquet dataset
    ///
    /// If not specified, uses the pipeline's configured clean dataset path.
    #[arg(long = "input", value_name = "PATH", help = "Path to clean parquet file")]
    pub input: Option<PathBuf>,

    /// Output file prefix for the exported reports
    #[arg(
        long = "prefix",
        value_name = "NAME",
        default_value = DEFAULT_REPORT_PREFIX,
        help = "Output file prefix for reports"
    )]
    pub prefix: String,

    /// Base directory holding data/, reports/, and sql/
    #[arg(long = "base", value_name = "PATH", help = "Base directory for pipeline artifacts")]
    pub base: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Arguments for the quality command
#[derive(Debug, Clone, Parser)]
pub struct QualityArgs {
    /// Base directory holding data/, reports/, and sql/
    #[arg(long = "base", value_name = "PATH", help = "Base directory for pipeline artifacts")]
    pub base: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Arguments for the query command
#[derive(Debug, Clone, Parser)]
pub struct QueryArgs {
    /// Number of rows shown per result preview
    #[arg(
        long = "limit",
        value_name = "ROWS",
        default_value_t = 5,
        help = "Rows shown per result preview"
    )]
    pub limit: usize,

    /// Base directory holding data/, reports/, and sql/
    #[arg(long = "base", value_name = "PATH", help = "Base directory for pipeline artifacts")]
    pub base: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Arguments for the generate command
#[derive(Debug, Clone, Parser)]
pub struct GenerateArgs {
    /// Number of synthetic rows to generate
    #[arg(long = "rows", value_name = "COUNT", help = "Number of rows to generate")]
    pub rows: Option<usize>,

    /// RNG seed for reproducible batches
    #[arg(long = "seed", value_name = "SEED", help = "RNG seed for reproducible batches")]
    pub seed: Option<u64>,

    /// Base directory holding data/, reports/, and sql/
    #[arg(long = "base", value_name = "PATH", help = "Base directory for pipeline artifacts")]
    pub base: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}
