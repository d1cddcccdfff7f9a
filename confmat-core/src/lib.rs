//! Binary confusion matrix and classification metrics for Cat/Dog labels
//!
//! The crate turns two comma-separated label strings into a 2×2 confusion
//! matrix and the four standard metrics, with `Cat` as the positive class.
//!
//! ```
//! use confmat_core::evaluate;
//!
//! let result = evaluate("Cat,Dog,Cat,Dog", "Cat,Cat,Dog,Dog").unwrap();
//! assert_eq!(result.counts.true_positives, 1);
//! assert_eq!(result.metrics.accuracy, 0.5);
//! ```

#![warn(missing_docs)]

pub mod category;
pub mod confusion;
pub mod error;
pub mod labels;
pub mod metrics;
pub mod result;

use error::Result;
use labels::tokenize;

// Re-export key types
pub use category::{normalize_token, Category};
pub use confusion::{BinaryCounts, ConfusionMatrix};
pub use error::{ErrorKind, EvalError, Side};
pub use labels::LabelSequence;
pub use metrics::{Metric, MetricSet};
pub use result::EvaluationResult;

/// Evaluate predicted labels against actual labels
///
/// Both inputs are split on commas and normalized before anything else.
/// Differing token counts fail with [`EvalError::LengthMismatch`] before any
/// token is validated. Otherwise the first token, actual side first, that is
/// not `Cat` or `Dog` fails with [`EvalError::InvalidLabel`].
pub fn evaluate(actual_raw: &str, predicted_raw: &str) -> Result<EvaluationResult> {
    let outcome = parse_pair(actual_raw, predicted_raw)
        .and_then(|(actual, predicted)| EvaluationResult::from_sequences(&actual, &predicted));

    match &outcome {
        Ok(result) => log::debug!(
            "evaluated {} samples: {:?}",
            result.sample_count(),
            result.counts
        ),
        Err(err) => log::debug!("evaluation rejected: {err}"),
    }

    outcome
}

/// Tokenize both inputs, check their lengths, then validate both sides
fn parse_pair(actual_raw: &str, predicted_raw: &str) -> Result<(LabelSequence, LabelSequence)> {
    let actual_tokens = tokenize(actual_raw);
    let predicted_tokens = tokenize(predicted_raw);

    if actual_tokens.len() != predicted_tokens.len() {
        return Err(EvalError::LengthMismatch {
            actual: actual_tokens.len(),
            predicted: predicted_tokens.len(),
        });
    }

    let actual = LabelSequence::validate(&actual_tokens, Side::Actual)?;
    let predicted = LabelSequence::validate(&predicted_tokens, Side::Predicted)?;
    Ok((actual, predicted))
}
