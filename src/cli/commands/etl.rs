//! ETL command implementation
//!
//! Runs the full ingest-clean-persist stage: loads the raw batch (generating
//! a synthetic one when no input exists yet), applies the cleaning transform,
//! and persists the clean dataset to both the columnar and relational stores
//! with replace semantics.

use super::shared::{load_command_config, setup_logging};
use crate::Result;
use crate::app::services::cleaner::clean;
use crate::app::services::storage::{
    load_into_sqlite, load_raw_csv, records_to_frame, write_parquet, write_raw_csv,
};
use crate::app::services::synthetic;
use crate::cli::args::EtlArgs;
use colored::Colorize;
use tracing::{debug, info};

/// ETL command runner
pub fn run_etl(args: EtlArgs) -> Result<()> {
    setup_logging(args.verbose);
    let config = load_command_config(&args.base)?;
    config.paths.ensure_directories()?;

    println!("{}", ">> ETL start".bold());

    let raw_csv = config.paths.raw_csv();
    if !raw_csv.exists() {
        info!("No raw input at {}, generating synthetic batch", raw_csv.display());
        let records = synthetic::generate(&config.synthetic);
        write_raw_csv(&records, &raw_csv)?;
    }

    let raw = load_raw_csv(&raw_csv)?;
    let result = clean(raw, &config.cleaning);
    debug!("{}", result.summary());

    let mut df = records_to_frame(&result.transactions)?;
    write_parquet(&mut df, &config.paths.clean_parquet())?;
    load_into_sqlite(&result.transactions, &config.paths.sqlite_db())?;

    println!(
        ">> Clean rows: {}",
        result.row_count().to_string().green().bold()
    );
    if result.stats.dropped_total() > 0 || result.stats.repaired_total() > 0 {
        println!(
            ">> Repaired values: {} | Dropped rows: {}",
            result.stats.repaired_total(),
            result.stats.dropped_total()
        );
    }
    println!("{}", ">> ETL done".green().bold());

    Ok(())
}
