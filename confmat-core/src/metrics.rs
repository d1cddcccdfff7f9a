//! Classification metrics derived from binary counts

use crate::confusion::BinaryCounts;

/// Accuracy, precision, recall and F1
///
/// Each value is in `[0, 1]`. A metric whose denominator is zero is reported
/// as exactly `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricSet {
    /// Accuracy: (TP + TN) / (TP + TN + FP + FN)
    pub accuracy: f64,
    /// Precision: TP / (TP + FP)
    pub precision: f64,
    /// Recall: TP / (TP + FN)
    pub recall: f64,
    /// F1 score: 2 * (precision * recall) / (precision + recall)
    pub f1: f64,
}

impl MetricSet {
    /// Create metrics from raw counts
    pub fn from_counts(counts: &BinaryCounts) -> Self {
        let BinaryCounts {
            true_positives: tp,
            false_positives: fp,
            true_negatives: tn,
            false_negatives: fn_,
        } = *counts;

        let total = counts.total();
        let accuracy = if total > 0 {
            (tp + tn) as f64 / total as f64
        } else {
            0.0
        };

        let precision = if tp + fp > 0 {
            tp as f64 / (tp + fp) as f64
        } else {
            0.0
        };

        let recall = if tp + fn_ > 0 {
            tp as f64 / (tp + fn_) as f64
        } else {
            0.0
        };

        let f1 = if precision + recall > 0.0 {
            2.0 * (precision * recall) / (precision + recall)
        } else {
            0.0
        };

        Self {
            accuracy,
            precision,
            recall,
            f1,
        }
    }

    /// Look up a metric value
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Accuracy => self.accuracy,
            Metric::Precision => self.precision,
            Metric::Recall => self.recall,
            Metric::F1 => self.f1,
        }
    }

    /// Iterate `(metric, value)` pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        Metric::ALL.into_iter().map(move |m| (m, self.value(m)))
    }
}

/// A reported metric, in fixed display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Metric {
    /// Fraction of correct predictions
    Accuracy,
    /// Fraction of predicted Cats that are Cats
    Precision,
    /// Fraction of actual Cats predicted as Cat
    Recall,
    /// Harmonic mean of precision and recall
    F1,
}

impl Metric {
    /// All metrics in display order
    pub const ALL: [Metric; 4] = [
        Metric::Accuracy,
        Metric::Precision,
        Metric::Recall,
        Metric::F1,
    ];

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Accuracy => "Accuracy",
            Metric::Precision => "Precision",
            Metric::Recall => "Recall",
            Metric::F1 => "F1 Score",
        }
    }

    /// Formula shown next to the value
    pub fn formula(&self) -> &'static str {
        match self {
            Metric::Accuracy => "(TP + TN) / (TP + TN + FP + FN)",
            Metric::Precision => "TP / (TP + FP)",
            Metric::Recall => "TP / (TP + FN)",
            Metric::F1 => "2 × (Precision × Recall) / (Precision + Recall)",
        }
    }
}
