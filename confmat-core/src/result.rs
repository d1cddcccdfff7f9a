//! Aggregate output of a successful evaluation

use crate::category::Category;
use crate::confusion::{BinaryCounts, ConfusionMatrix};
use crate::error::Result;
use crate::metrics::MetricSet;

/// Confusion matrix, binary counts and derived metrics
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvaluationResult {
    /// Contingency table of actual vs. predicted
    pub matrix: ConfusionMatrix,
    /// TP/FP/TN/FN extracted from the matrix
    pub counts: BinaryCounts,
    /// Metrics derived from the counts
    pub metrics: MetricSet,
}

impl EvaluationResult {
    /// Build the result from a finished confusion matrix
    pub fn from_matrix(matrix: ConfusionMatrix) -> Self {
        let counts = BinaryCounts::from_matrix(&matrix);
        let metrics = MetricSet::from_counts(&counts);
        Self {
            matrix,
            counts,
            metrics,
        }
    }

    /// Tally two validated sequences and derive metrics
    pub fn from_sequences(actual: &[Category], predicted: &[Category]) -> Result<Self> {
        ConfusionMatrix::from_sequences(actual, predicted).map(Self::from_matrix)
    }

    /// Number of evaluated samples
    pub fn sample_count(&self) -> usize {
        self.matrix.total()
    }
}
