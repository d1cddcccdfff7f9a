//! Markdown output formatter

use super::{count_lines, metric_header, metric_rows, OutputFormatter, SUPPORTED_LABELS, TITLE};
use anyhow::Result;
use confmat_core::{Category, EvaluationResult};
use std::io::Write;

/// Markdown formatter - outputs the report as headings and tables
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    decimals: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W, decimals: usize) -> Self {
        Self { writer, decimals }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_result(&mut self, result: &EvaluationResult) -> Result<()> {
        writeln!(self.writer, "# {TITLE}")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{SUPPORTED_LABELS}")?;
        writeln!(self.writer)?;

        writeln!(self.writer, "## Confusion Matrix")?;
        writeln!(self.writer)?;
        write!(self.writer, "| |")?;
        for predicted in Category::ALL {
            write!(self.writer, " Predicted {predicted} |")?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "|---|---:|---:|")?;
        for actual in Category::ALL {
            write!(self.writer, "| Actual {actual} |")?;
            for predicted in Category::ALL {
                write!(self.writer, " {} |", result.matrix.get(actual, predicted))?;
            }
            writeln!(self.writer)?;
        }
        writeln!(self.writer)?;

        writeln!(self.writer, "## Step-by-Step Values")?;
        writeln!(self.writer)?;
        for (label, count) in count_lines(result) {
            writeln!(self.writer, "- **{label}** = {count}")?;
        }
        writeln!(self.writer)?;

        writeln!(self.writer, "## Evaluation Metrics")?;
        writeln!(self.writer)?;
        let [metric, formula, value] = metric_header();
        writeln!(self.writer, "| {metric} | {formula} | {value} |")?;
        writeln!(self.writer, "|---|---|---:|")?;
        for row in metric_rows(result, self.decimals) {
            writeln!(
                self.writer,
                "| {} | `{}` | {} |",
                row.metric, row.formula, row.value
            )?;
        }

        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confmat_core::evaluate;

    fn render(actual: &str, predicted: &str) -> String {
        let result = evaluate(actual, predicted).unwrap();
        let mut formatter = MarkdownFormatter::new(Vec::new(), 2);
        formatter.format_result(&result).unwrap();
        formatter.finish().unwrap();
        String::from_utf8(formatter.into_inner()).unwrap()
    }

    #[test]
    fn test_headings() {
        let output = render("Cat", "Dog");

        assert!(output.starts_with("# Confusion Matrix & Evaluation Metrics\n"));
        assert!(output.contains("## Confusion Matrix\n"));
        assert!(output.contains("## Step-by-Step Values\n"));
        assert!(output.contains("## Evaluation Metrics\n"));
    }

    #[test]
    fn test_matrix_table() {
        let output = render("Cat,Dog,Dog", "Dog,Dog,Cat");

        assert!(output.contains("| | Predicted Cat | Predicted Dog |"));
        assert!(output.contains("| Actual Cat | 0 | 1 |"));
        assert!(output.contains("| Actual Dog | 1 | 1 |"));
        assert!(output.contains("- **False Negative (FN)** = 1"));
    }

    #[test]
    fn test_metrics_table() {
        let output = render("Dog,Dog", "Dog,Dog");

        assert!(output.contains("| Metric | Formula | Value |"));
        assert!(output.contains("| Accuracy | `(TP + TN) / (TP + TN + FP + FN)` | 1.00 |"));
        assert!(output.contains("| Precision | `TP / (TP + FP)` | 0.00 |"));
        assert!(output.contains("| Recall | `TP / (TP + FN)` | 0.00 |"));
        assert!(output.contains("| F1 Score |"));
    }
}
