//! Evaluate command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::output::create_formatter;
use anyhow::Result;
use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the evaluate command
#[derive(Debug, Args)]
pub struct EvaluateArgs {
    /// Actual labels, comma-separated (Cat, Dog)
    #[arg(
        short,
        long,
        value_name = "LABELS",
        env = "CONFMAT_ACTUAL",
        default_value = " "
    )]
    pub actual: String,

    /// Predicted labels, comma-separated (Cat, Dog)
    #[arg(
        short,
        long,
        value_name = "LABELS",
        env = "CONFMAT_PREDICTED",
        default_value = " "
    )]
    pub predicted: String,

    /// Output format (overrides the configuration file)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain text tables
    Text,
    /// JSON object with matrix, counts and metrics
    Json,
    /// Markdown headings and tables
    Markdown,
}

impl OutputFormat {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// One-line description for listings
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "Aligned plain text tables",
            OutputFormat::Json => "JSON object with matrix, counts and metrics",
            OutputFormat::Markdown => "Markdown headings and tables",
        }
    }
}

impl EvaluateArgs {
    /// Execute the evaluate command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging();

        log::info!("Starting evaluation");
        log::debug!("Arguments: {:?}", self);

        self.run(io::stdout())
    }

    /// Evaluate the labels and write the report to `writer`
    pub fn run<W: Write + Send + Sync>(&self, writer: W) -> Result<()> {
        let config = self.load_config()?;
        let format = match self.format {
            Some(format) => format,
            None => config.output.format()?,
        };
        log::debug!("Output format: {}", format.as_str());

        let result = confmat_core::evaluate(&self.actual, &self.predicted).map_err(|err| {
            log::debug!("Rejected input ({:?}): {err}", err.kind());
            CliError::invalid_input()
        })?;
        log::info!("Evaluated {} label pairs", result.sample_count());

        let mut formatter = create_formatter(format, writer, &config.output);
        formatter
            .format_result(&result)
            .and_then(|_| formatter.finish())
            .map_err(|e| CliError::OutputError(e.to_string()))?;

        Ok(())
    }

    /// Load the configuration file, or defaults when none is given
    fn load_config(&self) -> Result<CliConfig> {
        match &self.config {
            Some(path) => {
                log::info!("Loading configuration from {}", path.display());
                CliConfig::from_file(path)
            }
            None => Ok(CliConfig::default()),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when run from tests
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}
