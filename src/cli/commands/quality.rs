//! Quality command implementation
//!
//! Loads the persisted clean dataset, runs the fixed check battery with a
//! CSV failure sink, and writes the quality report document.

use super::shared::{load_command_config, setup_logging};
use crate::Result;
use crate::app::services::quality::run_quality_checks;
use crate::app::services::storage::{CsvFailureSink, read_parquet, write_quality_report};
use crate::cli::args::QualityArgs;
use colored::Colorize;

/// Quality command runner
pub fn run_quality(args: QualityArgs) -> Result<()> {
    setup_logging(args.verbose);
    let config = load_command_config(&args.base)?;
    config.paths.ensure_directories()?;

    let df = read_parquet(&config.paths.clean_parquet())?;

    let mut sink = CsvFailureSink::new(config.paths.reports_dir());
    let report = run_quality_checks(&df, &config.quality, &mut sink)?;
    write_quality_report(&report, &config.paths.quality_report())?;

    let status = if report.passed() {
        "PASS".green().bold()
    } else {
        "FAIL".red().bold()
    };
    println!(
        ">> QUALITY: {} | checks_failed={}",
        status, report.summary.checks_failed
    );

    Ok(())
}
