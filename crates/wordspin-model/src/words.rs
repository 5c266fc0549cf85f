//! Validated word lists.

use serde::{Deserialize, Serialize};

use crate::MAX_WORDS;
use crate::error::{Result, ValidationError};

/// An ordered list of trimmed, non-empty words, at most [`MAX_WORDS`] long.
///
/// Order follows the input and duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct WordList(Vec<String>);

impl WordList {
    /// Builds a word list from raw multi-line text, one word per non-blank line.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TooManyWords`] when more than [`MAX_WORDS`]
    /// non-blank lines remain.
    pub fn parse(raw: &str) -> Result<Self> {
        Self::from_words(raw.lines())
    }

    /// Builds a word list from already-split words, applying the same rules as
    /// [`WordList::parse`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TooManyWords`] when more than [`MAX_WORDS`]
    /// non-blank words remain.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_string())
            .filter(|word| !word.is_empty())
            .collect();
        if words.len() > MAX_WORDS {
            return Err(ValidationError::TooManyWords {
                count: words.len(),
                max: MAX_WORDS,
            });
        }
        Ok(Self(words))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl TryFrom<Vec<String>> for WordList {
    type Error = ValidationError;

    fn try_from(words: Vec<String>) -> Result<Self> {
        Self::from_words(words)
    }
}

impl From<WordList> for Vec<String> {
    fn from(list: WordList) -> Self {
        list.0
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_blank_lines_and_trims() {
        let list = WordList::parse("alpha\n\n  beta  \n\t\ngamma\r\n").expect("valid input");
        assert_eq!(list.as_slice(), ["alpha", "beta", "gamma"]);
    }

    #[test]
    fn parse_keeps_duplicates_in_order() {
        let list = WordList::parse("b\na\nb").expect("valid input");
        assert_eq!(list.as_slice(), ["b", "a", "b"]);
    }

    #[test]
    fn parse_empty_input_is_empty_list() {
        let list = WordList::parse("  \n\n").expect("blank input is valid");
        assert!(list.is_empty());
    }

    #[test]
    fn deserialize_enforces_cap() {
        let words: Vec<String> = (0..13).map(|i| format!("w{i}")).collect();
        let json = serde_json::to_string(&words).expect("serialize words");
        let err = serde_json::from_str::<WordList>(&json).expect_err("13 words rejected");
        assert!(err.to_string().contains("too many words"));
    }

    #[test]
    fn serializes_as_plain_array() {
        let list = WordList::from_words(["x", "y"]).expect("valid words");
        let json = serde_json::to_string(&list).expect("serialize list");
        assert_eq!(json, r#"["x","y"]"#);
    }
}
