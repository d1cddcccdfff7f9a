//! Plain text output formatter

use super::{count_lines, metric_header, metric_rows, OutputFormatter, SUPPORTED_LABELS, TITLE};
use anyhow::Result;
use confmat_core::EvaluationResult;
use std::io::Write;

/// Plain text formatter - outputs aligned tables
pub struct TextFormatter<W: Write> {
    writer: W,
    decimals: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, decimals: usize) -> Self {
        Self { writer, decimals }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_metrics_table(&mut self, result: &EvaluationResult) -> Result<()> {
        let header = metric_header();
        let rows = metric_rows(result, self.decimals);

        // Pad by char count, formulas contain multi-byte '×'
        let metric_width = rows
            .iter()
            .map(|row| row.metric.chars().count())
            .fold(header[0].len(), usize::max);
        let formula_width = rows
            .iter()
            .map(|row| row.formula.chars().count())
            .fold(header[1].len(), usize::max);

        writeln!(
            self.writer,
            "{:<metric_width$}  {:<formula_width$}  {}",
            header[0], header[1], header[2]
        )?;
        for row in &rows {
            writeln!(
                self.writer,
                "{:<metric_width$}  {:<formula_width$}  {}",
                row.metric, row.formula, row.value
            )?;
        }

        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_result(&mut self, result: &EvaluationResult) -> Result<()> {
        writeln!(self.writer, "{TITLE}")?;
        writeln!(self.writer, "{SUPPORTED_LABELS}")?;
        writeln!(self.writer)?;

        writeln!(self.writer, "Confusion Matrix")?;
        write!(self.writer, "{}", result.matrix)?;
        writeln!(self.writer)?;

        writeln!(self.writer, "Step-by-Step Values")?;
        for (label, count) in count_lines(result) {
            writeln!(self.writer, "{label} = {count}")?;
        }
        writeln!(self.writer)?;

        writeln!(self.writer, "Evaluation Metrics")?;
        self.write_metrics_table(result)
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

    fn render(actual: &str, predicted: &str, decimals: usize) -> String {
        let result = evaluate(actual, predicted).unwrap();
        let mut formatter = TextFormatter::new(Vec::new(), decimals);
        formatter.format_result(&result).unwrap();
        formatter.finish().unwrap();
        String::from_utf8(formatter.into_inner()).unwrap()
    }

    #[test]
    fn test_sections_present() {
        let output = render("Cat,Dog,Cat,Dog", "Cat,Cat,Dog,Dog", 2);

        assert!(output.starts_with("Confusion Matrix & Evaluation Metrics\n"));
        assert!(output.contains("Labels supported: Cat and Dog"));
        assert!(output.contains("\nConfusion Matrix\n"));
        assert!(output.contains("Step-by-Step Values"));
        assert!(output.contains("Evaluation Metrics"));
    }

    #[test]
    fn test_matrix_and_counts() {
        let output = render("Cat,Cat,Dog", "Cat,Dog,Dog", 2);

        assert!(output.contains("Predicted Cat"));
        assert!(output.contains("Predicted Dog"));
        assert!(output.contains("Actual Cat"));
        assert!(output.contains("Actual Dog"));
        assert!(output.contains("True Positive (TP) = 1"));
        assert!(output.contains("False Positive (FP) = 0"));
        assert!(output.contains("True Negative (TN) = 1"));
        assert!(output.contains("False Negative (FN) = 1"));
    }

    #[test]
    fn test_metrics_table_rows() {
        let output = render("Cat,Dog,Cat,Dog", "Cat,Cat,Dog,Dog", 2);
        let table: Vec<&str> = output
            .lines()
            .skip_while(|line| *line != "Evaluation Metrics")
            .skip(1)
            .collect();

        assert_eq!(table.len(), 5);
        assert!(table[0].starts_with("Metric"));
        assert!(table[1].starts_with("Accuracy"));
        assert!(table[2].starts_with("Precision"));
        assert!(table[3].starts_with("Recall"));
        assert!(table[4].starts_with("F1 Score"));
        assert!(table[4].contains("2 × (Precision × Recall) / (Precision + Recall)"));
        assert!(table[1..].iter().all(|line| line.ends_with("0.50")));
    }

    #[test]
    fn test_configured_decimals() {
        let output = render("Cat,Cat,Dog", "Cat,Dog,Dog", 3);
        assert!(output.contains("0.667"));
        assert!(!output.contains("0.67\n"));
    }
}
