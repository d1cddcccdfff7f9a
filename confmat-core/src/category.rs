//! The two supported class labels and token normalization

use std::fmt;
use std::str::FromStr;

/// A class label
///
/// Declaration order is the fixed row/column order of the confusion matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// The positive class
    Cat,
    /// The negative class
    Dog,
}

impl Category {
    /// All categories in matrix order
    pub const ALL: [Category; 2] = [Category::Cat, Category::Dog];

    /// Category treated as the detection target for TP/FP/TN/FN
    pub const POSITIVE: Category = Category::Cat;

    /// Canonical spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cat => "Cat",
            Category::Dog => "Dog",
        }
    }

    /// Row/column index in the confusion matrix
    pub fn index(&self) -> usize {
        match self {
            Category::Cat => 0,
            Category::Dog => 1,
        }
    }

    /// Whether this is the positive class
    pub fn is_positive(&self) -> bool {
        *self == Self::POSITIVE
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by [`Category::from_str`] for anything but `"Cat"` or `"Dog"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category '{}'", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Matches the normalized spelling exactly; run [`normalize_token`] first
    /// for case-insensitive input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Cat" => Ok(Category::Cat),
            "Dog" => Ok(Category::Dog),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// Trim surrounding whitespace, uppercase the first character and lowercase the rest
///
/// Case mapping is ASCII-only, so the result does not depend on locale.
/// `" dOG "` becomes `"Dog"`, and a blank token becomes `""`.
pub fn normalize_token(token: &str) -> String {
    let trimmed = token.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => {
            let mut normalized = String::with_capacity(trimmed.len());
            normalized.push(first.to_ascii_uppercase());
            normalized.extend(chars.map(|c| c.to_ascii_lowercase()));
            normalized
        }
        None => String::new(),
    }
}
