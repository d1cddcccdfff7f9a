//! Binary confusion matrix

use crate::category::Category;
use crate::error::{EvalError, Result};
use std::fmt;

/// 2×2 contingency table of actual vs. predicted category
///
/// `counts[actual][predicted]`, rows and columns in [`Category::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfusionMatrix {
    counts: [[usize; 2]; 2],
}

impl ConfusionMatrix {
    /// Create an empty matrix
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from raw cell counts
    pub fn from_counts(counts: [[usize; 2]; 2]) -> Self {
        Self { counts }
    }

    /// Tally paired positions of two equal-length sequences
    pub fn from_sequences(actual: &[Category], predicted: &[Category]) -> Result<Self> {
        if actual.len() != predicted.len() {
            return Err(EvalError::LengthMismatch {
                actual: actual.len(),
                predicted: predicted.len(),
            });
        }

        let mut matrix = Self::new();
        for (&a, &p) in actual.iter().zip(predicted.iter()) {
            matrix.record(a, p);
        }

        Ok(matrix)
    }

    /// Count one (actual, predicted) pair
    pub fn record(&mut self, actual: Category, predicted: Category) {
        self.counts[actual.index()][predicted.index()] += 1;
    }

    /// Get the count at [actual][predicted]
    pub fn get(&self, actual: Category, predicted: Category) -> usize {
        self.counts[actual.index()][predicted.index()]
    }

    /// Get the raw cell counts
    pub fn counts(&self) -> &[[usize; 2]; 2] {
        &self.counts
    }

    /// Number of actual occurrences of a category
    pub fn support(&self, actual: Category) -> usize {
        self.counts[actual.index()].iter().sum()
    }

    /// Total number of samples
    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<12}", "")?;
        for predicted in Category::ALL {
            write!(f, " {:>15}", format!("Predicted {predicted}"))?;
        }
        writeln!(f)?;

        for actual in Category::ALL {
            write!(f, "{:<12}", format!("Actual {actual}"))?;
            for predicted in Category::ALL {
                write!(f, " {:>15}", self.get(actual, predicted))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// TP/FP/TN/FN counts with [`Category::POSITIVE`] as the positive class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinaryCounts {
    /// Actual Cat, predicted Cat
    pub true_positives: usize,
    /// Actual Dog, predicted Cat
    pub false_positives: usize,
    /// Actual Dog, predicted Dog
    pub true_negatives: usize,
    /// Actual Cat, predicted Dog
    pub false_negatives: usize,
}

impl BinaryCounts {
    /// Extract counts from a confusion matrix
    pub fn from_matrix(matrix: &ConfusionMatrix) -> Self {
        let (pos, neg) = (Category::Cat, Category::Dog);
        Self {
            true_positives: matrix.get(pos, pos),
            false_negatives: matrix.get(pos, neg),
            false_positives: matrix.get(neg, pos),
            true_negatives: matrix.get(neg, neg),
        }
    }

    /// Sum of all four counts
    pub fn total(&self) -> usize {
        self.true_positives + self.false_positives + self.true_negatives + self.false_negatives
    }
}

impl From<&ConfusionMatrix> for BinaryCounts {
    fn from(matrix: &ConfusionMatrix) -> Self {
        Self::from_matrix(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Category::{Cat, Dog};

    #[test]
    fn test_from_sequences_one_per_cell() {
        let actual = [Cat, Dog, Cat, Dog];
        let predicted = [Cat, Cat, Dog, Dog];
        let cm = ConfusionMatrix::from_sequences(&actual, &predicted).unwrap();

        assert_eq!(cm.counts(), &[[1, 1], [1, 1]]);
        assert_eq!(cm.total(), 4);
    }

    #[test]
    fn test_from_sequences_repeated_values() {
        let actual = [Cat, Cat, Cat, Dog];
        let predicted = [Cat, Cat, Dog, Cat];
        let cm = ConfusionMatrix::from_sequences(&actual, &predicted).unwrap();

        assert_eq!(cm.get(Cat, Cat), 2);
        assert_eq!(cm.get(Cat, Dog), 1);
        assert_eq!(cm.get(Dog, Cat), 1);
        assert_eq!(cm.get(Dog, Dog), 0);
        assert_eq!(cm.support(Cat), 3);
        assert_eq!(cm.support(Dog), 1);
    }

    #[test]
    fn test_from_sequences_length_mismatch() {
        let err = ConfusionMatrix::from_sequences(&[Cat, Dog], &[Cat]).unwrap_err();
        assert_eq!(
            err,
            EvalError::LengthMismatch {
                actual: 2,
                predicted: 1
            }
        );
    }

    #[test]
    fn test_empty_sequences() {
        let cm = ConfusionMatrix::from_sequences(&[], &[]).unwrap();
        assert_eq!(cm.total(), 0);
        assert_eq!(BinaryCounts::from_matrix(&cm), BinaryCounts::default());
    }

    #[test]
    fn test_binary_counts_positive_is_cat() {
        let cm = ConfusionMatrix::from_counts([[5, 2], [3, 7]]);
        let counts = BinaryCounts::from(&cm);

        assert_eq!(counts.true_positives, 5);
        assert_eq!(counts.false_negatives, 2);
        assert_eq!(counts.false_positives, 3);
        assert_eq!(counts.true_negatives, 7);
        assert_eq!(counts.total(), cm.total());
    }

    #[test]
    fn test_display_labels() {
        let cm = ConfusionMatrix::from_counts([[1, 2], [3, 4]]);
        let rendered = cm.to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Predicted Cat"));
        assert!(lines[0].contains("Predicted Dog"));
        assert!(lines[1].starts_with("Actual Cat"));
        assert!(lines[1].trim_end().ends_with('2'));
        assert!(lines[2].starts_with("Actual Dog"));
        assert!(lines[2].trim_end().ends_with('4'));
    }
}
