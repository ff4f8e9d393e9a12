use bankops_processor::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    match commands::run(command) {
        Ok(()) => {
            // Success - results have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("BankOps Processor - Payment Transaction Analytics Pipeline");
    println!("==========================================================");
    println!();
    println!("Clean raw payment-transaction batches into an audited analytical dataset,");
    println!("run data-quality checks, and export tabular KPI reports.");
    println!();
    println!("USAGE:");
    println!("    bankops-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    etl         Ingest, clean, and persist the transaction dataset");
    println!("    kpis        Compute KPI aggregates and export the six CSV reports");
    println!("    quality     Run the quality check battery and export the report");
    println!("    query       Execute the fixed analytical SQL script with previews");
    println!("    generate    Generate a synthetic raw transaction batch");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Run the full ETL stage in the current directory:");
    println!("    bankops-processor etl");
    println!();
    println!("    # Export KPI reports from a specific clean dataset:");
    println!("    bankops-processor kpis --input data/processed/transactions_clean.parquet \\");
    println!("                           --prefix monthly");
    println!();
    println!("    # Run quality checks and inspect failing rows under reports/:");
    println!("    bankops-processor quality");
    println!();
    println!("For detailed help on any command, use:");
    println!("    bankops-processor <COMMAND> --help");
}
