//! Command implementations for BankOps processor CLI
//!
//! Each pipeline stage is implemented in its own module; this module holds
//! the dispatch logic and re-exports shared command helpers.

pub mod etl;
pub mod generate;
pub mod kpis;
pub mod quality;
pub mod query;
pub mod shared;

use crate::Result;
use crate::cli::args::Commands;

/// Main command runner for the BankOps processor
///
/// Dispatches to the appropriate subcommand handler:
/// - `etl`: ingest, clean, and persist the dataset
/// - `kpis`: compute and export KPI reports
/// - `quality`: run the check battery and export the report
/// - `query`: execute the fixed analytical SQL script
/// - `generate`: produce a synthetic raw batch
pub fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Etl(args) => etl::run_etl(args),
        Commands::Kpis(args) => kpis::run_kpis(args),
        Commands::Quality(args) => quality::run_quality(args),
        Commands::Query(args) => query::run_query(args),
        Commands::Generate(args) => generate::run_generate(args),
    }
}
