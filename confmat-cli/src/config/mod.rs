//! Configuration module

use crate::commands::evaluate::OutputFormat;
use crate::error::CliError;
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Upper bound for `output.decimals`
pub const MAX_DECIMALS: usize = 12;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Digits after the decimal point in metric values
    pub decimals: usize,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            decimals: 2,
            pretty_json: true,
        }
    }
}

impl OutputConfig {
    /// Parse `default_format` into an output format
    pub fn format(&self) -> Result<OutputFormat> {
        OutputFormat::from_str(&self.default_format, true).map_err(|_| {
            CliError::ConfigError(format!(
                "unknown output format '{}' (expected text, json or markdown)",
                self.default_format
            ))
            .into()
        })
    }
}

impl CliConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: CliConfig = toml::from_str(content)
            .map_err(|e| CliError::ConfigError(e.message().to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Check field values
    pub fn validate(&self) -> Result<()> {
        self.output.format()?;
        if self.output.decimals > MAX_DECIMALS {
            return Err(CliError::ConfigError(format!(
                "decimals must be at most {MAX_DECIMALS}, got {}",
                self.output.decimals
            ))
            .into());
        }
        Ok(())
    }
}
