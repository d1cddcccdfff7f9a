//! Output formatting module

use crate::commands::evaluate::OutputFormat;
use crate::config::OutputConfig;
use anyhow::Result;
use confmat_core::{EvaluationResult, Metric};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Report title
pub const TITLE: &str = "Confusion Matrix & Evaluation Metrics";
/// Line listing the accepted labels
pub const SUPPORTED_LABELS: &str = "Labels supported: Cat and Dog";

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output one evaluation result
    fn format_result(&mut self, result: &EvaluationResult) -> Result<()>;

    /// Finalize output
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// One row of the metrics table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRow {
    /// Metric name
    pub metric: String,
    /// Formula in terms of TP/FP/TN/FN
    pub formula: String,
    /// Value rounded for display
    pub value: String,
}

/// Build the metrics table rows in display order
pub fn metric_rows(result: &EvaluationResult, decimals: usize) -> Vec<MetricRow> {
    result
        .metrics
        .iter()
        .map(|(metric, value)| MetricRow {
            metric: metric.name().to_string(),
            formula: metric.formula().to_string(),
            value: format_value(value, decimals),
        })
        .collect()
}

/// Format a metric value with a fixed number of decimals
pub fn format_value(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

/// Labelled TP/FP/TN/FN lines in display order
pub fn count_lines(result: &EvaluationResult) -> [(&'static str, usize); 4] {
    let counts = &result.counts;
    [
        ("True Positive (TP)", counts.true_positives),
        ("False Positive (FP)", counts.false_positives),
        ("True Negative (TN)", counts.true_negatives),
        ("False Negative (FN)", counts.false_negatives),
    ]
}

/// Header row of the metrics table
pub fn metric_header() -> [&'static str; 3] {
    ["Metric", "Formula", "Value"]
}

/// Create the formatter for a format
pub fn create_formatter<'a, W: Write + Send + Sync + 'a>(
    format: OutputFormat,
    writer: W,
    config: &OutputConfig,
) -> Box<dyn OutputFormatter + 'a> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer, config.decimals)),
        OutputFormat::Json => Box::new(JsonFormatter::new(
            writer,
            config.decimals,
            config.pretty_json,
        )),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer, config.decimals)),
    }
}

/// Display names of all metrics in order
pub fn metric_names() -> Vec<&'static str> {
    Metric::ALL.iter().map(Metric::name).collect()
}
