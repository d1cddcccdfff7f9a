//! confmat command-line entry point

use clap::Parser;
use confmat_cli::commands::Commands;
use std::process::ExitCode;

/// Confusion matrix and evaluation metrics for Cat/Dog labels
#[derive(Debug, Parser)]
#[command(name = "confmat", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
