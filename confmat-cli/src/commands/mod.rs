//! CLI command implementations

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use confmat_core::Category;
use std::io::{self, Write};

pub mod evaluate;

use evaluate::OutputFormat;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute the confusion matrix and metrics for two label lists
    Evaluate(evaluate::EvaluateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List supported labels
    Labels,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Evaluate(args) => args.execute(),
            Commands::List { subcommand } => subcommand.write_to(&mut io::stdout()),
        }
    }
}

impl ListCommands {
    /// Write the listing to `writer`
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        match self {
            ListCommands::Labels => {
                writeln!(writer, "Supported labels:")?;
                for category in Category::ALL {
                    if category.is_positive() {
                        writeln!(writer, "  {category} (positive class)")?;
                    } else {
                        writeln!(writer, "  {category}")?;
                    }
                }
            }
            ListCommands::Formats => {
                writeln!(writer, "Available output formats:")?;
                for format in OutputFormat::value_variants() {
                    writeln!(writer, "  {:<10} {}", format.as_str(), format.description())?;
                }
            }
        }
        Ok(())
    }
}
