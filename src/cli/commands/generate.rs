//! Generate command implementation
//!
//! Produces a reproducible synthetic raw batch at the configured raw input
//! location, overwriting any existing file.

use super::shared::{load_command_config, setup_logging};
use crate::Result;
use crate::app::services::storage::write_raw_csv;
use crate::app::services::synthetic;
use crate::cli::args::GenerateArgs;
use colored::Colorize;

/// Generate command runner
pub fn run_generate(args: GenerateArgs) -> Result<()> {
    setup_logging(args.verbose);
    let mut config = load_command_config(&args.base)?;

    if let Some(rows) = args.rows {
        config.synthetic.rows = rows;
    }
    if let Some(seed) = args.seed {
        config.synthetic.seed = seed;
    }
    config.validate()?;
    config.paths.ensure_directories()?;

    let records = synthetic::generate(&config.synthetic);
    let raw_csv = config.paths.raw_csv();
    write_raw_csv(&records, &raw_csv)?;

    println!(
        ">> Generated {} synthetic rows at {}",
        records.len().to_string().green().bold(),
        raw_csv.display()
    );

    Ok(())
}
