//! Evaluation error types

use std::fmt;
use thiserror::Error;

/// Which of the two label sequences a token came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// Ground-truth labels
    Actual,
    /// Model predictions
    Predicted,
}

impl Side {
    /// Lowercase name used in messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Actual => "actual",
            Side::Predicted => "predicted",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input errors raised while evaluating two label sequences
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The two sequences have a different number of comma-separated tokens
    #[error("label count mismatch: {actual} actual vs {predicted} predicted")]
    LengthMismatch {
        /// Token count of the actual sequence
        actual: usize,
        /// Token count of the predicted sequence
        predicted: usize,
    },

    /// A token did not normalize to a supported category
    #[error("invalid {side} label '{token}' at position {position}")]
    InvalidLabel {
        /// Sequence containing the token
        side: Side,
        /// Zero-based token index
        position: usize,
        /// The normalized token
        token: String,
    },
}

/// Fieldless failure category, for callers that only branch on the kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`EvalError::LengthMismatch`]
    LengthMismatch,
    /// See [`EvalError::InvalidLabel`]
    InvalidLabel,
}

impl EvalError {
    /// Get the failure kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            EvalError::LengthMismatch { .. } => ErrorKind::LengthMismatch,
            EvalError::InvalidLabel { .. } => ErrorKind::InvalidLabel,
        }
    }
}

/// Result type for evaluation operations
pub type Result<T> = std::result::Result<T, EvalError>;
