//! JSON output formatter

use super::{metric_rows, MetricRow, OutputFormatter};
use anyhow::Result;
use confmat_core::EvaluationResult;
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs the evaluation result as one JSON object
pub struct JsonFormatter<W: Write> {
    writer: W,
    decimals: usize,
    pretty: bool,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct ReportData<'a> {
    /// Matrix, counts and raw metric values
    #[serde(flatten)]
    pub result: &'a EvaluationResult,
    /// Display rows with rounded values
    pub metrics_table: Vec<MetricRow>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, decimals: usize, pretty: bool) -> Self {
        Self {
            writer,
            decimals,
            pretty,
        }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_result(&mut self, result: &EvaluationResult) -> Result<()> {
        let report = ReportData {
            result,
            metrics_table: metric_rows(result, self.decimals),
        };

        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &report)?;
        } else {
            serde_json::to_writer(&mut self.writer, &report)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
