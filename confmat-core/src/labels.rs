//! Parsing of comma-separated label text

use crate::category::{normalize_token, Category};
use crate::error::{EvalError, Result, Side};
use std::ops::Deref;

/// Split raw text on commas and normalize every token
///
/// Empty tokens from stray, leading or trailing commas are kept, so the
/// length always equals the comma count plus one.
pub fn tokenize(raw: &str) -> Vec<String> {
    raw.split(',').map(normalize_token).collect()
}

/// An ordered sequence of validated categories
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LabelSequence {
    labels: Vec<Category>,
}

impl LabelSequence {
    /// Create a sequence from already validated categories
    pub fn new(labels: Vec<Category>) -> Self {
        Self { labels }
    }

    /// Tokenize and validate one side of the input
    pub fn parse(raw: &str, side: Side) -> Result<Self> {
        Self::validate(&tokenize(raw), side)
    }

    /// Convert normalized tokens into categories
    ///
    /// Fails on the first token that is not exactly `"Cat"` or `"Dog"`.
    pub fn validate(tokens: &[String], side: Side) -> Result<Self> {
        let labels = tokens
            .iter()
            .enumerate()
            .map(|(position, token)| {
                token
                    .parse::<Category>()
                    .map_err(|_| EvalError::InvalidLabel {
                        side,
                        position,
                        token: token.clone(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { labels })
    }

    /// Get the labels as a slice
    pub fn as_slice(&self) -> &[Category] {
        &self.labels
    }

    /// Consume the sequence
    pub fn into_inner(self) -> Vec<Category> {
        self.labels
    }
}

impl Deref for LabelSequence {
    type Target = [Category];

    fn deref(&self) -> &Self::Target {
        &self.labels
    }
}

impl From<Vec<Category>> for LabelSequence {
    fn from(labels: Vec<Category>) -> Self {
        Self::new(labels)
    }
}

impl FromIterator<Category> for LabelSequence {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
