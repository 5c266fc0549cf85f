//! Output mode selection.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::{MAX_ARITY, MIN_ARITY};

/// Which combination arities to produce from a word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Ordered 2-word combinations.
    #[default]
    Pairs,
    /// Ordered 3-word combinations.
    Triplets,
    /// Ordered 4-word combinations.
    Quads,
    /// Ordered 5-word combinations.
    Quints,
    /// Every arity from 2 up to 5 (or the word count, if smaller).
    All,
}

impl OutputMode {
    /// Every mode, in increasing arity order.
    pub const ALL: [OutputMode; 5] = [
        OutputMode::Pairs,
        OutputMode::Triplets,
        OutputMode::Quads,
        OutputMode::Quints,
        OutputMode::All,
    ];

    /// Returns the canonical selector string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pairs => "pairs",
            Self::Triplets => "triplets",
            Self::Quads => "quads",
            Self::Quints => "quints",
            Self::All => "all",
        }
    }

    /// Returns the single arity of a fixed-arity mode, or `None` for [`OutputMode::All`].
    #[must_use]
    pub const fn fixed_arity(&self) -> Option<usize> {
        match self {
            Self::Pairs => Some(2),
            Self::Triplets => Some(3),
            Self::Quads => Some(4),
            Self::Quints => Some(5),
            Self::All => None,
        }
    }

    /// Minimum number of words the mode accepts.
    #[must_use]
    pub const fn min_words(&self) -> usize {
        match self.fixed_arity() {
            Some(arity) => arity,
            None => MIN_ARITY,
        }
    }

    /// Arities produced for a list of `word_count` words, in generation order.
    ///
    /// The range is empty when `All` is asked for fewer than two words.
    #[must_use]
    pub fn arities(&self, word_count: usize) -> RangeInclusive<usize> {
        match self.fixed_arity() {
            Some(arity) => arity..=arity,
            None => MIN_ARITY..=MAX_ARITY.min(word_count),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidOutputType(s.to_string()))
    }
}
