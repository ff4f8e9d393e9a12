//! KPIs command implementation
//!
//! Loads the clean dataset, computes the overall summary and the five fixed
//! groupings, and exports the six CSV reports.

use super::shared::{load_command_config, setup_logging};
use crate::Result;
use crate::app::services::kpis::export::export_reports;
use crate::app::services::storage::{frame_to_records, read_parquet};
use crate::cli::args::KpisArgs;
use colored::Colorize;
use tracing::debug;

/// KPIs command runner
pub fn run_kpis(args: KpisArgs) -> Result<()> {
    setup_logging(args.verbose);
    let config = load_command_config(&args.base)?;
    config.paths.ensure_directories()?;

    let input = args.input.unwrap_or_else(|| config.paths.clean_parquet());
    debug!("Loading clean dataset from {}", input.display());

    let df = read_parquet(&input)?;
    let batch = frame_to_records(&df)?;

    let reports_dir = config.paths.reports_dir();
    let written = export_reports(&batch, &reports_dir, &args.prefix)?;

    println!(
        ">> KPIs exported to {} ({} reports, {} rows)",
        reports_dir.display().to_string().bold(),
        written.len(),
        batch.len()
    );

    Ok(())
}
